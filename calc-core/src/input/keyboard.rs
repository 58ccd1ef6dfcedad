//! Keyboard adapter: DOM-style key names to engine commands

use crate::engine::Command;
use crate::types::Operator;

/// Command produced by a key press, plus whether the host should suppress
/// the key's default behaviour (form submit on Enter, navigation on Backspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyAction {
    pub command: Command,
    pub prevent_default: bool,
}

/// Map a key name (as reported by `KeyboardEvent.key`) to a command
///
/// # Examples
/// ```
/// use calc_core::input::command_for_key;
/// use calc_core::{Command, Operator};
///
/// assert_eq!(command_for_key("*"), Some(Command::Operator(Operator::Multiply)));
/// assert_eq!(command_for_key("Enter"), Some(Command::Equals));
/// assert_eq!(command_for_key("Shift"), None);
/// ```
pub fn command_for_key(key: &str) -> Option<Command> {
    action_for_key(key).map(|action| action.command)
}

/// Map a key name to a command along with its default-suppression flag
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    let (command, prevent_default) = match key {
        "." => (Command::Decimal, false),
        "+" | "-" | "*" | "/" => (Command::Operator(Operator::from_symbol(key)?), false),
        "Enter" | "=" => (Command::Equals, true),
        "Backspace" => (Command::Backspace, true),
        "Escape" => (Command::ClearAll, false),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => (Command::digit(ch)?, false),
                _ => return None,
            }
        }
    };

    Some(KeyAction {
        command,
        prevent_default,
    })
}
