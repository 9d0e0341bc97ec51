//! Calculator core: input checks, expression evaluation and clipboard access.
//!
//! This module provides functionality to:
//! - Validate that an expression only contains characters we hand to the evaluator
//! - Translate the keypad operator grammar to evalexpr and evaluate it
//! - Format the numeric result
//! - Read and write the clipboard

mod clipboard;
mod error;
mod evaluation;
mod syntax;
mod validation;

pub use clipboard::{
    ClipboardError, ClipboardProvider, MemoryClipboard, SystemClipboard, open_clipboard,
};
pub use error::CalcError;
pub use evaluation::{evaluate_expression, format_result};
pub use validation::{InvalidRun, is_plain_number, is_valid_char, normalize_decimal, validate};
