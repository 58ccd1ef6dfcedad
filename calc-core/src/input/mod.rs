//! Input adapters
//!
//! Translate raw keyboard and pointer events into engine [`Command`]s. The
//! engine itself never depends on these.

mod keyboard;
mod pointer;

pub use keyboard::{action_for_key, command_for_key, KeyAction};
pub use pointer::{command_for_button, ButtonInput};

use crate::engine::Command;
use crate::error::{CalcError, Result};
use crate::types::{MemoryAction, UnaryOp};

/// Parse one word of a key script such as `"3 + 4 sqrt MS Enter"`
///
/// Accepts every key name the keyboard adapter knows, case-insensitive
/// aliases for the named keys, the button roles for unary operations and
/// the memory button labels.
pub fn parse_command(word: &str) -> Result<Command> {
    let word = word.trim();
    if word.is_empty() {
        return Err(CalcError::UnknownKey(word.to_string()));
    }

    if let Some(command) = command_for_key(word) {
        return Ok(command);
    }
    if let Some(action) = MemoryAction::from_label(word) {
        return Ok(Command::Memory(action));
    }
    if let Some(op) = UnaryOp::from_role(&word.to_lowercase()) {
        return Ok(Command::Unary(op));
    }

    match word.to_uppercase().as_str() {
        "ENTER" | "RETURN" => Ok(Command::Equals),
        "BACKSPACE" | "BACK" | "BKSP" => Ok(Command::Backspace),
        "ESCAPE" | "ESC" | "C" => Ok(Command::ClearAll),
        "CE" => Ok(Command::ClearEntry),
        "%" => Ok(Command::Unary(UnaryOp::Percent)),
        "1/X" => Ok(Command::Unary(UnaryOp::Reciprocal)),
        "X^2" | "X²" => Ok(Command::Unary(UnaryOp::Square)),
        "+/-" | "\u{00B1}" => Ok(Command::Unary(UnaryOp::Negate)),
        "\u{221A}" => Ok(Command::Unary(UnaryOp::SquareRoot)),
        _ => Err(CalcError::UnknownKey(word.to_string())),
    }
}

/// Parse a whitespace-separated key script
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script.split_whitespace().map(parse_command).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operator;

    #[test]
    fn test_parse_script() {
        let commands = parse_script("1 2 + 3 enter").unwrap();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[2], Command::Operator(Operator::Add));
        assert_eq!(commands[4], Command::Equals);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse_command("ESC").unwrap(), Command::ClearAll);
        assert_eq!(parse_command("ce").unwrap(), Command::ClearEntry);
        assert_eq!(parse_command("SQRT").unwrap(), Command::Unary(UnaryOp::SquareRoot));
        assert_eq!(parse_command("1/x").unwrap(), Command::Unary(UnaryOp::Reciprocal));
        assert_eq!(parse_command("mr").unwrap(), Command::Memory(MemoryAction::Recall));
        assert_eq!(parse_command("\u{00B1}").unwrap(), Command::Unary(UnaryOp::Negate));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("ctrl"), Err(CalcError::UnknownKey("ctrl".into())));
        assert_eq!(parse_command("  "), Err(CalcError::UnknownKey(String::new())));
        assert!(parse_script("1 + banana").is_err());
    }
}
