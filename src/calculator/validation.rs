//! Input checks applied before anything reaches the evaluator.
//!
//! The evaluator is only ever handed a fixed alphabet: digits, the decimal
//! point, parentheses and the operator characters it understands. Anything
//! else is rejected and reported back as the offending run of characters.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// A plain decimal number with an optional sign. No exponent, no `inf`/`NaN`.
    static ref PLAIN_NUMBER: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)$"
    ).unwrap();
}

/// The first maximal run of characters the evaluator must not see.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidRun {
    /// Byte offset of the run within the checked text.
    pub offset: usize,
    /// The offending characters, exactly as they appeared.
    pub run: String,
}

impl fmt::Display for InvalidRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.run)
    }
}

/// Check whether a single character may appear in an expression.
pub fn is_valid_char(c: char) -> bool {
    matches!(
        c,
        // numbers
        '0'..='9'
        // arithmetic, grouping and decimal separators
        | '(' | ')' | '/' | '*' | '-' | '+' | ',' | '.'
        // comparison, logic and bitwise characters passed through to the evaluator
        | '&' | '|' | '^' | '%' | '>' | '<' | '!' | '~' | '?' | ':' | '='
    )
}

/// Replace the alternate decimal separator `,` with `.`.
pub fn normalize_decimal(input: &str) -> String {
    input.replace(',', ".")
}

/// Validate an expression against the accepted character set.
///
/// Returns the input unchanged when every character is accepted. Otherwise
/// returns the run of invalid characters starting at the first invalid one
/// and extending through every invalid character directly after it.
pub fn validate(input: &str) -> Result<&str, InvalidRun> {
    let Some((start, _)) = input.char_indices().find(|&(_, c)| !is_valid_char(c)) else {
        return Ok(input);
    };

    let end = input[start..]
        .char_indices()
        .find(|&(_, c)| is_valid_char(c))
        .map_or(input.len(), |(i, _)| start + i);

    Err(InvalidRun {
        offset: start,
        run: input[start..end].to_string(),
    })
}

/// Check if pasted text is a plain number (no operators, no expressions).
///
/// Surrounding whitespace is ignored. Exponent notation and the special
/// float spellings are rejected so that everything accepted here can be
/// typed into the buffer character by character.
pub fn is_plain_number(input: &str) -> bool {
    let trimmed = input.trim();
    PLAIN_NUMBER.is_match(trimmed) && trimmed.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_alphabet() {
        let all = "0123456789()/*-+,.&|^%><!~?:=";
        assert_eq!(validate(all), Ok(all));
        assert_eq!(validate("2*(3+4)"), Ok("2*(3+4)"));
        assert_eq!(validate(""), Ok(""));
    }

    #[test]
    fn test_rejects_single_character() {
        let err = validate("1+a").unwrap_err();
        assert_eq!(err.run, "a");
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_rejects_maximal_run() {
        let err = validate("12+abc*3").unwrap_err();
        assert_eq!(err.run, "abc");
        assert_eq!(err.offset, 3);

        // only the first run is reported
        let err = validate("1 + x").unwrap_err();
        assert_eq!(err.run, " ");
    }

    #[test]
    fn test_run_reaches_end_of_input() {
        let err = validate("7*sin").unwrap_err();
        assert_eq!(err.run, "sin");
    }

    #[test]
    fn test_multibyte_run() {
        let err = validate("2×3÷4").unwrap_err();
        assert_eq!(err.run, "×");
        assert_eq!(err.offset, 1);
        assert_eq!(err.to_string(), "×");
    }

    #[test]
    fn test_every_invalid_ascii_character_is_rejected() {
        for c in (0u8..128).map(char::from).filter(|c| !is_valid_char(*c)) {
            let input = format!("1{c}{c}2");
            let err = validate(&input).unwrap_err();
            assert_eq!(err.run, format!("{c}{c}"), "input {input:?}");
        }
    }

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("1,5+2,25"), "1.5+2.25");
        assert_eq!(normalize_decimal("1.5"), "1.5");
    }

    #[test]
    fn test_plain_numbers() {
        assert!(is_plain_number("50"));
        assert!(is_plain_number("-12.5"));
        assert!(is_plain_number("+3"));
        assert!(is_plain_number(".5"));
        assert!(is_plain_number("7."));
        assert!(is_plain_number("  42\n"));
    }

    #[test]
    fn test_not_plain_numbers() {
        assert!(!is_plain_number(""));
        assert!(!is_plain_number("."));
        assert!(!is_plain_number("not a valid number"));
        assert!(!is_plain_number("1+1"));
        assert!(!is_plain_number("1e5"));
        assert!(!is_plain_number("inf"));
        assert!(!is_plain_number("NaN"));
        assert!(!is_plain_number("1,5"));
    }
}
