//! Evaluation of a validated expression through evalexpr.
//!
//! The text is first translated by [`super::syntax`], which checks operator
//! runs and writes every number literal as a float. The translation runs
//! against a context holding the bitwise, shift and choice functions the
//! translation calls. The resulting value is then classified: numbers pass,
//! booleans and the empty value are reported as non-numeric, and NaN or an
//! infinity is reported as not finite.

use super::{CalcError, syntax};
use evalexpr::{
    ContextWithMutableFunctions, EvalexprError, EvalexprResult, Function, HashMapContext, Value,
};

/// Evaluate a validated expression to a finite number.
///
/// Parse failures (including unknown operator tokens) map to
/// [`CalcError::Parse`], evaluation failures to [`CalcError::Eval`].
/// Results that are not numbers, such as the boolean from a comparison,
/// map to [`CalcError::NotNumeric`].
pub fn evaluate_expression(input: &str) -> Result<f64, CalcError> {
    let expression = input.trim();

    if expression.is_empty() {
        return Err(CalcError::Parse("Empty expression".to_string()));
    }

    let prepared = syntax::translate(expression)?;
    let context = operator_context().map_err(|e| CalcError::Eval(e.to_string()))?;

    let tree =
        evalexpr::build_operator_tree(&prepared).map_err(|e| CalcError::Parse(e.to_string()))?;
    let value = tree
        .eval_with_context(&context)
        .map_err(|e| CalcError::Eval(e.to_string()))?;

    let number = match value {
        Value::Float(f) => f,
        Value::Int(i) => i as f64,
        other => return Err(CalcError::NotNumeric(other.to_string())),
    };

    if !number.is_finite() {
        return Err(CalcError::NotFinite(number));
    }

    tracing::trace!(expression, %prepared, number, "evaluated expression");
    Ok(number)
}

/// Format a result with the fewest digits that still round-trip.
///
/// Never uses scientific notation and never pads with trailing zeros.
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Functions standing in for the operators evalexpr has no syntax for.
fn operator_context() -> EvalexprResult<HashMapContext> {
    let mut context = HashMapContext::new();

    context.set_function("bit_and".into(), integer_operator(|a, b| Ok(a & b)))?;
    context.set_function("bit_or".into(), integer_operator(|a, b| Ok(a | b)))?;
    context.set_function("bit_xor".into(), integer_operator(|a, b| Ok(a ^ b)))?;
    context.set_function(
        "shift_left".into(),
        integer_operator(|a, b| shift(a, b, i64::checked_shl)),
    )?;
    context.set_function(
        "shift_right".into(),
        integer_operator(|a, b| shift(a, b, i64::checked_shr)),
    )?;
    context.set_function(
        "bit_not".into(),
        Function::new(|argument| Ok(Value::Float(!to_integer(argument)? as f64))),
    )?;
    context.set_function(
        "choose".into(),
        Function::new(|argument| {
            let arguments = argument.as_fixed_len_tuple(3)?;
            let chosen = if arguments[0].as_boolean()? { 1 } else { 2 };
            Ok(arguments[chosen].clone())
        }),
    )?;
    context.set_function(
        "when".into(),
        Function::new(|argument| {
            let arguments = argument.as_fixed_len_tuple(2)?;
            if arguments[0].as_boolean()? {
                Ok(arguments[1].clone())
            } else {
                Ok(Value::Empty)
            }
        }),
    )?;

    Ok(context)
}

/// Two-operand function over the integer parts of its arguments.
fn integer_operator<F>(op: F) -> Function
where
    F: Fn(i64, i64) -> EvalexprResult<i64> + Send + Sync + Clone + 'static,
{
    Function::new(move |argument| {
        let arguments = argument.as_fixed_len_tuple(2)?;
        let result = op(to_integer(&arguments[0])?, to_integer(&arguments[1])?)?;
        Ok(Value::Float(result as f64))
    })
}

/// Truncate a numeric value to an integer; bitwise operators work on those.
fn to_integer(value: &Value) -> EvalexprResult<i64> {
    Ok(value.as_number()?.trunc() as i64)
}

fn shift(value: i64, amount: i64, op: fn(i64, u32) -> Option<i64>) -> EvalexprResult<i64> {
    u32::try_from(amount)
        .ok()
        .and_then(|amount| op(value, amount))
        .ok_or_else(|| EvalexprError::CustomMessage(format!("Invalid shift amount: {}", amount)))
}
