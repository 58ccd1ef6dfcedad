use crate::eval::{format_number, parse_number};
use crate::types::{Operator, Sentinel};

/// A committed left operand waiting for its right-hand side
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOperation {
    /// Left operand exactly as it was displayed when committed
    pub left: String,
    pub operator: Operator,
}

impl PendingOperation {
    pub fn new(left: String, operator: Operator) -> Self {
        Self { left, operator }
    }

    /// Expression line while the right operand is still being typed ("3 + ")
    pub fn expression_text(&self) -> String {
        format!("{} {} ", self.left, self.operator)
    }

    /// Full expression once the right operand is known ("3 + 4")
    pub fn with_right(&self, right: &str) -> String {
        format!("{}{}", self.expression_text(), right)
    }
}

/// Represents the current state of the calculator engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    /// Value being typed or last computed; never empty
    pub current_input: String,
    /// Operation committed by the last binary operator, if any
    pub pending: Option<PendingOperation>,
    /// Most recently applied binary operator
    pub last_operator: Option<Operator>,
    /// Next digit starts a fresh number instead of appending
    pub waiting_for_new_input: bool,
    /// Memory register
    pub memory: f64,
    /// "<expression> =" line left on the display by the last equals
    pub finalized_expression: Option<String>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            pending: None,
            last_operator: None,
            waiting_for_new_input: false,
            memory: 0.0,
            finalized_expression: None,
        }
    }

    /// Reset everything except the memory register
    pub fn reset(&mut self) {
        self.current_input = "0".to_string();
        self.pending = None;
        self.waiting_for_new_input = false;
        self.finalized_expression = None;
    }

    /// The sentinel currently shown, if any
    pub fn sentinel(&self) -> Option<Sentinel> {
        Sentinel::from_text(&self.current_input)
    }

    /// Numeric value of the current input, `None` for sentinels
    pub fn current_value(&self) -> Option<f64> {
        parse_number(&self.current_input)
    }

    /// Replace the current input with a result or its sentinel
    pub fn set_result(&mut self, result: Result<f64, Sentinel>) {
        self.current_input = match result {
            Ok(value) if value.is_finite() => format_number(value),
            Ok(_) => Sentinel::DivisionByZero.to_string(),
            Err(sentinel) => sentinel.to_string(),
        };
    }

    /// Drop the last character of the current input
    pub fn backspace_input(&mut self) {
        self.current_input.pop();
        if self.current_input.is_empty() || self.current_input == "-" {
            self.current_input = "0".to_string();
        }
    }
}
