//! Commands accepted by the calculator engine

use crate::types::{Digit, MemoryAction, Operator, UnaryOp};

/// One user intent, as produced by the keyboard or pointer adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Unary(UnaryOp),
    Memory(MemoryAction),
    ClearAll,
    ClearEntry,
    Backspace,
}

impl Command {
    /// Creates a digit command from a character
    pub fn digit(ch: char) -> Option<Self> {
        Digit::try_from(ch).ok().map(Command::Digit)
    }
}

impl From<Digit> for Command {
    fn from(digit: Digit) -> Self {
        Command::Digit(digit)
    }
}

impl From<Operator> for Command {
    fn from(op: Operator) -> Self {
        Command::Operator(op)
    }
}

impl From<UnaryOp> for Command {
    fn from(op: UnaryOp) -> Self {
        Command::Unary(op)
    }
}

impl From<MemoryAction> for Command {
    fn from(action: MemoryAction) -> Self {
        Command::Memory(action)
    }
}
