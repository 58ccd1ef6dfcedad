//! Pointer adapter: clicked calculator buttons to engine commands

use crate::engine::Command;
use crate::types::{MemoryAction, Operator, UnaryOp};

/// A clicked button as declared by the surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonInput {
    /// Declared role, e.g. "digit", "operator", "sqrt"
    pub value: Option<String>,
    /// Declared action, e.g. "memory-store"
    pub action: Option<String>,
    /// Visible label text
    pub label: String,
}

impl ButtonInput {
    /// Creates a button with only a label
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    /// Creates a button with a role and a label
    pub fn with_role(role: &str, label: &str) -> Self {
        Self {
            value: Some(role.to_string()),
            ..Self::new(label)
        }
    }

    /// Attaches a declared action
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }
}

/// Map a clicked button to a command
///
/// Memory actions take priority over the declared role; an unrecognized
/// role or label yields `None`.
pub fn command_for_button(button: &ButtonInput) -> Option<Command> {
    if let Some(action) = button.action.as_deref().filter(|a| a.starts_with("memory")) {
        return MemoryAction::from_action(action).map(Command::Memory);
    }

    let label = button.label.trim();
    match button.value.as_deref()? {
        "digit" => {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Command::digit(ch),
                _ => None,
            }
        }
        "decimal" => Some(Command::Decimal),
        "operator" => Operator::from_symbol(label).map(Command::Operator),
        "equal" => Some(Command::Equals),
        "clear" => Some(Command::ClearAll),
        "clear-entry" => Some(Command::ClearEntry),
        "backspace" => Some(Command::Backspace),
        role => UnaryOp::from_role(role).map(Command::Unary),
    }
}
