//! Errors produced while evaluating the expression buffer.

use thiserror::Error;

/// Every way an evaluate attempt can fail.
///
/// The `Display` output is exactly what the status line shows.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The buffer contains characters outside the accepted set.
    #[error("Invalid input at: {0}")]
    InvalidInput(String),

    /// The evaluator could not build an expression tree.
    #[error("{0}")]
    Parse(String),

    /// The expression parsed but failed while evaluating.
    #[error("{0}")]
    Eval(String),

    /// Evaluation succeeded but produced something other than a number.
    #[error("Result is not numeric: {0}")]
    NotNumeric(String),

    /// Evaluation produced NaN or an infinity.
    #[error("{}", describe_non_finite(.0))]
    NotFinite(f64),
}

fn describe_non_finite(value: &f64) -> &'static str {
    if value.is_nan() {
        "Not a Number"
    } else if value.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            CalcError::InvalidInput("ab".into()).to_string(),
            "Invalid input at: ab"
        );
        assert_eq!(
            CalcError::Parse("Invalid token: '//'".into()).to_string(),
            "Invalid token: '//'"
        );
        assert_eq!(
            CalcError::NotNumeric("true".into()).to_string(),
            "Result is not numeric: true"
        );
    }

    #[test]
    fn test_non_finite_messages() {
        assert_eq!(CalcError::NotFinite(f64::NAN).to_string(), "Not a Number");
        assert_eq!(CalcError::NotFinite(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(
            CalcError::NotFinite(f64::NEG_INFINITY).to_string(),
            "-Infinity"
        );
    }
}
