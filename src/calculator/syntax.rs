//! Operator grammar of the calculator and its translation to evalexpr source.
//!
//! The keypad language uses `^` for XOR, `**` for powers, `& | ~ << >>` for
//! bitwise work and `c ? a : b` for choices. evalexpr spells several of these
//! differently or not at all, so the validated text is tokenized, parsed by
//! precedence and written back out fully parenthesized. Bitwise, shift and
//! ternary operators become calls to the functions registered in
//! [`super::evaluation`].

use super::CalcError;
use std::fmt;

/// Characters that make up operator tokens.
const OPERATOR_CHARS: &[char] = &[
    '+', '-', '*', '/', '%', '^', '&', '|', '!', '<', '>', '=', '~', '?', ':',
];

/// Binary operators. Two-character tokens come first so the tokenizer is greedy.
const BINARY_OPERATORS: &[&str] = &[
    "**", "&&", "||", "==", "!=", "<=", ">=", "<<", ">>", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "?", ":",
];

/// Prefix operators, which may directly follow a binary one (`2*-3`, `1&&!0`).
const PREFIX_OPERATORS: &[&str] = &["-", "+", "!", "~"];

const PREFIX_BINDING: u8 = 19;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(String),
    Open,
    Close,
    Operator(&'static str),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => f.write_str(text),
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Operator(op) => f.write_str(op),
        }
    }
}

/// Translate a validated expression into an equivalent evalexpr expression.
///
/// Number literals are written as floats so that `3/2` is `1.5`. An empty
/// group `()` is the empty value, and operands written directly after it are
/// absorbed into it, so `()9` stays empty.
pub fn translate(expression: &str) -> Result<String, CalcError> {
    check_operator_runs(expression)?;

    let mut parser = Parser {
        tokens: tokenize(expression)?,
        pos: 0,
    };
    let output = parser.expression(0)?;

    match parser.peek() {
        Some(token) => Err(unexpected(token)),
        None => Ok(output),
    }
}

/// Reject operator runs that are not a binary operator followed only by
/// prefix operators, and expressions that end on an operator.
fn check_operator_runs(expression: &str) -> Result<(), CalcError> {
    let mut run = String::new();

    for c in expression.chars().chain(std::iter::once(' ')) {
        if OPERATOR_CHARS.contains(&c) {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            if !is_operator_run(&run) {
                return Err(CalcError::Parse(format!("Invalid token: '{}'", run)));
            }
            run.clear();
        }
    }

    if expression.trim_end().ends_with(OPERATOR_CHARS) {
        return Err(CalcError::Parse("Unexpected end of expression".to_string()));
    }

    Ok(())
}

fn is_operator_run(run: &str) -> bool {
    let only_prefixes = |rest: &str| rest.chars().all(|c| matches!(c, '-' | '+' | '!' | '~'));

    only_prefixes(run)
        || BINARY_OPERATORS
            .iter()
            .any(|op| run.strip_prefix(op).is_some_and(only_prefixes))
}

fn tokenize(expression: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut rest = expression;

    while let Some(c) = rest.chars().next() {
        if c.is_whitespace() {
            rest = &rest[c.len_utf8()..];
        } else if c.is_ascii_digit() || c == '.' {
            let end = rest
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(rest.len());
            let literal = &rest[..end];
            if literal.parse::<f64>().is_err() {
                return Err(CalcError::Parse(format!("Invalid token: '{}'", literal)));
            }
            tokens.push(Token::Number(literal.to_string()));
            rest = &rest[end..];
        } else if c == '(' {
            tokens.push(Token::Open);
            rest = &rest[1..];
        } else if c == ')' {
            tokens.push(Token::Close);
            rest = &rest[1..];
        } else if let Some(op) = BINARY_OPERATORS
            .iter()
            .chain(PREFIX_OPERATORS)
            .find(|op| rest.starts_with(*op))
        {
            tokens.push(Token::Operator(*op));
            rest = &rest[op.len()..];
        } else {
            return Err(CalcError::Parse(format!("Invalid token: '{}'", c)));
        }
    }

    Ok(tokens)
}

/// Left and right binding power of a binary operator. `:` has none so that
/// the branch of a `?` stops in front of it.
fn binding_power(op: &str) -> Option<(u8, u8)> {
    let power = match op {
        "?" => (2, 1),
        "||" => (3, 4),
        "&&" => (5, 6),
        "==" | "!=" | "<" | "<=" | ">" | ">=" => (7, 8),
        "&" | "|" | "^" => (9, 10),
        "<<" | ">>" => (11, 12),
        "+" | "-" => (13, 14),
        "*" | "/" | "%" => (15, 16),
        "**" => (18, 17),
        _ => return None,
    };
    Some(power)
}

fn unexpected(token: &Token) -> CalcError {
    CalcError::Parse(format!("Unexpected token: '{}'", token))
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expression(&mut self, min_binding: u8) -> Result<String, CalcError> {
        let mut lhs = self.operand()?;

        loop {
            let Some(Token::Operator(op)) = self.peek() else {
                break;
            };
            let op = *op;
            let Some((left, right)) = binding_power(op) else {
                break;
            };
            if left < min_binding {
                break;
            }
            self.pos += 1;

            lhs = if op == "?" {
                let then = self.expression(0)?;
                if self.eat(&Token::Operator(":")) {
                    let otherwise = self.expression(right)?;
                    format!("choose({lhs}, {then}, {otherwise})")
                } else {
                    format!("when({lhs}, {then})")
                }
            } else {
                let rhs = self.expression(right)?;
                binary(op, &lhs, &rhs)
            };
        }

        Ok(lhs)
    }

    fn operand(&mut self) -> Result<String, CalcError> {
        match self.next() {
            Some(Token::Number(literal)) => Ok(float_literal(&literal)),
            Some(Token::Open) => {
                if self.eat(&Token::Close) {
                    while matches!(self.peek(), Some(Token::Number(_) | Token::Open)) {
                        self.operand()?;
                    }
                    return Ok("()".to_string());
                }
                let inner = self.expression(0)?;
                if self.eat(&Token::Close) {
                    return Ok(format!("({inner})"));
                }
                match self.peek() {
                    Some(token) => Err(unexpected(token)),
                    None => Err(CalcError::Parse("Unbalanced parenthesis".to_string())),
                }
            }
            Some(Token::Operator(op)) if PREFIX_OPERATORS.contains(&op) => {
                let operand = self.expression(PREFIX_BINDING)?;
                Ok(match op {
                    "+" => operand,
                    "~" => format!("bit_not({operand})"),
                    _ => format!("({op}{operand})"),
                })
            }
            Some(token) => Err(unexpected(&token)),
            None => Err(CalcError::Parse("Unexpected end of expression".to_string())),
        }
    }
}

fn binary(op: &str, lhs: &str, rhs: &str) -> String {
    let function = match op {
        "&" => "bit_and",
        "|" => "bit_or",
        "^" => "bit_xor",
        "<<" => "shift_left",
        ">>" => "shift_right",
        "**" => return format!("({lhs} ^ {rhs})"),
        _ => return format!("({lhs} {op} {rhs})"),
    };
    format!("{function}({lhs}, {rhs})")
}

/// Write a digits-and-dots literal the way evalexpr reads a float.
fn float_literal(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len() + 2);
    if literal.starts_with('.') {
        out.push('0');
    }
    out.push_str(literal);
    if literal.ends_with('.') {
        out.push('0');
    } else if !literal.contains('.') {
        out.push_str(".0");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_is_parenthesized() {
        assert_eq!(translate("1+2*3").unwrap(), "(1.0 + (2.0 * 3.0))");
        assert_eq!(translate("(1+2)*3").unwrap(), "(((1.0 + 2.0)) * 3.0)");
        assert_eq!(translate("10-2-3").unwrap(), "((10.0 - 2.0) - 3.0)");
    }

    #[test]
    fn test_prefix_operators() {
        assert_eq!(translate("2*-3").unwrap(), "(2.0 * (-3.0))");
        assert_eq!(translate("+3").unwrap(), "3.0");
        assert_eq!(translate("2*+3").unwrap(), "(2.0 * 3.0)");
        assert_eq!(translate("~5").unwrap(), "bit_not(5.0)");
        assert_eq!(translate("1&&!0").unwrap(), "(1.0 && (!0.0))");
    }

    #[test]
    fn test_bitwise_and_power() {
        assert_eq!(translate("6&3").unwrap(), "bit_and(6.0, 3.0)");
        assert_eq!(translate("6^3").unwrap(), "bit_xor(6.0, 3.0)");
        assert_eq!(translate("1<<4|1").unwrap(), "bit_or(shift_left(1.0, 4.0), 1.0)");
        assert_eq!(translate("2**3**2").unwrap(), "(2.0 ^ (3.0 ^ 2.0))");
        assert_eq!(translate("-2**2").unwrap(), "((-2.0) ^ 2.0)");
    }

    #[test]
    fn test_ternary() {
        assert_eq!(
            translate("1<2?3:4").unwrap(),
            "choose((1.0 < 2.0), 3.0, 4.0)"
        );
        assert_eq!(translate("1>2?3").unwrap(), "when((1.0 > 2.0), 3.0)");
        assert_eq!(
            translate("1<2?1>2?5:6:7").unwrap(),
            "choose((1.0 < 2.0), choose((1.0 > 2.0), 5.0, 6.0), 7.0)"
        );
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(translate("()").unwrap(), "()");
        assert_eq!(translate("()9").unwrap(), "()");
        assert_eq!(translate("()955").unwrap(), "()");
        assert_eq!(translate("()9+1").unwrap(), "(() + 1.0)");
    }

    #[test]
    fn test_invalid_operator_runs() {
        assert_eq!(
            translate("1//1"),
            Err(CalcError::Parse("Invalid token: '//'".to_string()))
        );
        assert_eq!(
            translate("1&&&2"),
            Err(CalcError::Parse("Invalid token: '&&&'".to_string()))
        );
        assert_eq!(
            translate("1=2"),
            Err(CalcError::Parse("Invalid token: '='".to_string()))
        );
        assert_eq!(
            translate("1*"),
            Err(CalcError::Parse("Unexpected end of expression".to_string()))
        );
    }

    #[test]
    fn test_malformed_structure() {
        assert_eq!(
            translate("(1+2"),
            Err(CalcError::Parse("Unbalanced parenthesis".to_string()))
        );
        assert_eq!(
            translate("1+2)"),
            Err(CalcError::Parse("Unexpected token: ')'".to_string()))
        );
        assert_eq!(
            translate("1:2"),
            Err(CalcError::Parse("Unexpected token: ':'".to_string()))
        );
        assert_eq!(
            translate("1.2.3"),
            Err(CalcError::Parse("Invalid token: '1.2.3'".to_string()))
        );
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal("3"), "3.0");
        assert_eq!(float_literal("1.5"), "1.5");
        assert_eq!(float_literal(".5"), "0.5");
        assert_eq!(float_literal("7."), "7.0");
    }
}
