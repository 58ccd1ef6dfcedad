//! Error types for the calculator engine

use thiserror::Error;

use crate::types::Sentinel;

/// Maximum parenthesis nesting the evaluator accepts
pub const MAX_NESTING: usize = 256;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Result is not finite")]
    DivisionByZero,

    #[error("Square root of a negative number")]
    InvalidDomain,

    #[error("Parentheses nested deeper than {0}")]
    NestingTooDeep(usize),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
}

impl CalcError {
    /// The display sentinel this error degrades to inside the engine
    pub fn sentinel(&self) -> Sentinel {
        match self {
            CalcError::DivisionByZero => Sentinel::DivisionByZero,
            CalcError::InvalidDomain => Sentinel::InvalidDomain,
            _ => Sentinel::MalformedExpression,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
