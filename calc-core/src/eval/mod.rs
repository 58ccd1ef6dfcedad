//! Arithmetic expression evaluation
//!
//! Expression text is sanitized down to digits, `+ - * / ( ) .`, tokenized
//! and evaluated by a recursive-descent parser. Nothing is ever executed
//! dynamically.

mod format;
mod lexer;
mod parser;
mod token;

pub use format::{format_number, parse_number};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::Token;

use log::trace;

use crate::error::{CalcError, Result};
use crate::types::Sentinel;

/// Characters allowed through to the parser besides ASCII digits
const ALLOWED_SYMBOLS: &[char] = &['+', '-', '*', '/', '(', ')', '.'];

/// Strip every character outside the arithmetic alphabet
pub fn sanitize(expr: &str) -> String {
    expr.chars()
        .filter(|c| c.is_ascii_digit() || ALLOWED_SYMBOLS.contains(c))
        .collect()
}

/// Evaluate an arithmetic expression
///
/// Non-finite results (division by zero, overflow) are reported as
/// [`CalcError::DivisionByZero`]; anything that fails to parse is
/// [`CalcError::MalformedExpression`].
pub fn evaluate(expr: &str) -> Result<f64> {
    let sanitized = sanitize(expr);
    let value = Parser::new(&sanitized)?.parse()?;
    trace!("evaluate {:?} -> {}", sanitized, value);

    if !value.is_finite() {
        return Err(CalcError::DivisionByZero);
    }
    Ok(value)
}

/// Evaluate and degrade any failure to its display sentinel
pub fn evaluate_sentinel(expr: &str) -> std::result::Result<f64, Sentinel> {
    evaluate(expr).map_err(|e| e.sentinel())
}
