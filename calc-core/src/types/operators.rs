use std::fmt;

use crate::error::CalcError;

/// A single decimal digit typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Gets the digit as a character
    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }

    /// Gets the numeric value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or(CalcError::InvalidDigit(ch))
    }
}

/// Binary operator applied between the pending operand and the current input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol used in expression text
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator symbol, accepting the typographic button glyphs too
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol.trim() {
            "+" => Some(Operator::Add),
            "-" | "\u{2212}" => Some(Operator::Subtract),
            "*" | "\u{00D7}" => Some(Operator::Multiply),
            "/" | "\u{00F7}" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operations applied to the current input alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Reciprocal,
    Square,
    SquareRoot,
    Negate,
    Percent,
}

impl UnaryOp {
    /// Parse the button role name ("reciprocal", "sqrt", ...)
    pub fn from_role(role: &str) -> Option<UnaryOp> {
        match role {
            "reciprocal" => Some(UnaryOp::Reciprocal),
            "square" => Some(UnaryOp::Square),
            "sqrt" => Some(UnaryOp::SquareRoot),
            "negate" => Some(UnaryOp::Negate),
            "percent" => Some(UnaryOp::Percent),
            _ => None,
        }
    }

    /// Apply the operation to a displayed value
    pub fn apply(&self, num: f64) -> crate::error::Result<f64> {
        match self {
            UnaryOp::Reciprocal if num == 0.0 => Err(CalcError::DivisionByZero),
            UnaryOp::Reciprocal => Ok(1.0 / num),
            UnaryOp::Square => Ok(num * num),
            UnaryOp::SquareRoot if num < 0.0 => Err(CalcError::InvalidDomain),
            UnaryOp::SquareRoot => Ok(num.sqrt()),
            UnaryOp::Negate => Ok(-num),
            UnaryOp::Percent => Ok(num / 100.0),
        }
    }
}

/// Actions on the single memory register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAction {
    Clear,      // MC
    Recall,     // MR
    Add,        // M+
    Subtract,   // M-
    Store,      // MS
}

impl MemoryAction {
    /// Parse a button action name such as "memory-store"
    pub fn from_action(action: &str) -> Option<MemoryAction> {
        match action {
            "memory-clear" => Some(MemoryAction::Clear),
            "memory-recall" => Some(MemoryAction::Recall),
            "memory-add" => Some(MemoryAction::Add),
            "memory-subtract" => Some(MemoryAction::Subtract),
            "memory-store" => Some(MemoryAction::Store),
            _ => None,
        }
    }

    /// Parse the short button label ("MC", "MR", "M+", "M-", "MS")
    pub fn from_label(label: &str) -> Option<MemoryAction> {
        match label.trim().to_uppercase().as_str() {
            "MC" => Some(MemoryAction::Clear),
            "MR" => Some(MemoryAction::Recall),
            "M+" => Some(MemoryAction::Add),
            "M-" | "M\u{2212}" => Some(MemoryAction::Subtract),
            "MS" => Some(MemoryAction::Store),
            _ => None,
        }
    }
}
