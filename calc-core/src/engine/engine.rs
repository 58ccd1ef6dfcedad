use log::{debug, trace};

use crate::eval::evaluate_sentinel;
use crate::types::{Digit, MemoryAction, Operator, Sentinel, UnaryOp};
use super::{Command, EngineOutput, EngineState, PendingOperation};

/// The calculator engine
///
/// Every transition runs to completion and returns the refreshed display,
/// so a transition is never observable half-applied. Transitions never fail:
/// evaluation problems show up as a [`Sentinel`] on the main line.
pub struct CalculatorEngine {
    state: EngineState,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create a new engine instance showing "0"
    pub fn new() -> Self {
        Self {
            state: EngineState::new(),
        }
    }

    /// Apply one command and return the refreshed display
    pub fn process(&mut self, command: Command) -> EngineOutput {
        trace!("process {:?}", command);

        match command {
            Command::Digit(digit) => self.input_digit(digit),
            Command::Decimal => self.input_decimal(),
            Command::Operator(op) => self.input_operator(op),
            Command::Equals => self.calculate(),
            Command::Unary(op) => self.unary_operation(op),
            Command::Memory(action) => self.handle_memory(action),
            Command::ClearAll => self.clear_all(),
            Command::ClearEntry => self.clear_entry(),
            Command::Backspace => self.backspace(),
        }
    }

    /// Type a digit
    pub fn input_digit(&mut self, digit: Digit) -> EngineOutput {
        self.begin_transition();

        if self.state.current_input == "0" || self.state.waiting_for_new_input {
            self.state.current_input = digit.as_char().to_string();
            self.state.waiting_for_new_input = false;
        } else {
            self.state.current_input.push(digit.as_char());
        }

        self.commit()
    }

    /// Type a decimal point; at most one per number
    pub fn input_decimal(&mut self) -> EngineOutput {
        self.begin_transition();

        if self.state.waiting_for_new_input {
            self.state.current_input = "0.".to_string();
            self.state.waiting_for_new_input = false;
        } else if !self.state.current_input.contains('.') {
            self.state.current_input.push('.');
        }

        self.commit()
    }

    /// Apply a binary operator, evaluating the pending operation first if
    /// a right operand has been typed
    pub fn input_operator(&mut self, op: Operator) -> EngineOutput {
        if let Some(sentinel) = self.state.sentinel() {
            debug!("operator {} ignored while showing {:?}", op, sentinel);
            return self.commit();
        }
        self.begin_transition();

        let waiting = self.state.waiting_for_new_input;
        match self.state.pending.take() {
            Some(pending) if !waiting => {
                let expression = pending.with_right(&self.state.current_input);
                let result = evaluate_sentinel(&expression);
                debug!("chained {:?} -> {:?}", expression, result);

                self.state.set_result(result);
                self.state.pending = match self.state.sentinel() {
                    Some(_) => None,
                    None => Some(PendingOperation::new(self.state.current_input.clone(), op)),
                };
            }
            Some(mut pending) => {
                pending.operator = op;
                self.state.pending = Some(pending);
            }
            None => {
                self.state.pending = Some(PendingOperation::new(self.state.current_input.clone(), op));
            }
        }

        self.state.last_operator = Some(op);
        self.state.waiting_for_new_input = true;
        self.commit()
    }

    /// Evaluate the pending operation with the current input as its right operand
    pub fn calculate(&mut self) -> EngineOutput {
        let Some(pending) = self.state.pending.take() else {
            return self.commit();
        };
        self.begin_transition();

        let expression = pending.with_right(&self.state.current_input);
        let result = evaluate_sentinel(&expression);
        debug!("calculate {:?} -> {:?}", expression, result);

        self.state.set_result(result);
        self.state.finalized_expression = Some(format!("{} =", expression));
        self.state.waiting_for_new_input = true;
        self.commit()
    }

    /// Apply a unary operation to the current input
    pub fn unary_operation(&mut self, op: UnaryOp) -> EngineOutput {
        let Some(num) = self.state.current_value() else {
            debug!("{:?} ignored: {:?} is not a number", op, self.state.current_input);
            return self.commit();
        };
        self.begin_transition();

        self.state.set_result(op.apply(num).map_err(|e| e.sentinel()));
        self.state.waiting_for_new_input = true;
        self.commit()
    }

    /// Reset input and expression; memory is kept
    pub fn clear_all(&mut self) -> EngineOutput {
        self.state.reset();
        self.commit()
    }

    /// Reset the current input only
    pub fn clear_entry(&mut self) -> EngineOutput {
        self.begin_transition();
        self.state.current_input = "0".to_string();
        self.commit()
    }

    /// Delete the last typed character
    pub fn backspace(&mut self) -> EngineOutput {
        if self.state.sentinel().is_some() {
            return self.commit();
        }
        self.begin_transition();

        self.state.backspace_input();
        self.commit()
    }

    /// Apply a memory action using the current input as operand
    pub fn handle_memory(&mut self, action: MemoryAction) -> EngineOutput {
        let num = self.state.current_value();

        match (action, num) {
            (MemoryAction::Clear, _) => self.state.memory = 0.0,
            (MemoryAction::Recall, Some(_)) => {
                let memory = self.state.memory;
                self.state.set_result(if memory.is_finite() {
                    Ok(memory)
                } else {
                    Err(Sentinel::DivisionByZero)
                });
                self.state.waiting_for_new_input = true;
            }
            (MemoryAction::Add, Some(n)) => self.state.memory += n,
            (MemoryAction::Subtract, Some(n)) => self.state.memory -= n,
            (MemoryAction::Store, Some(n)) => self.state.memory = n,
            (_, None) => {
                debug!("{:?} ignored: {:?} is not a number", action, self.state.current_input);
                return self.commit();
            }
        }

        self.begin_transition();
        trace!("memory = {}", self.state.memory);
        self.commit()
    }

    /// Project the state onto the two display lines
    pub fn render(&self) -> EngineOutput {
        let expression_text = match (&self.state.finalized_expression, &self.state.pending) {
            (Some(line), _) => line.clone(),
            (None, Some(pending)) => pending.expression_text(),
            (None, None) => String::new(),
        };
        EngineOutput::new(self.state.current_input.clone(), expression_text)
    }

    /// Get the current input text
    pub fn current_input(&self) -> &str {
        &self.state.current_input
    }

    /// Get the memory register
    pub fn memory(&self) -> f64 {
        self.state.memory
    }

    /// Whether the memory register holds something other than zero
    pub fn has_memory(&self) -> bool {
        self.state.memory != 0.0
    }

    /// Most recently applied binary operator
    pub fn last_operator(&self) -> Option<Operator> {
        self.state.last_operator
    }

    /// Get the current engine state (for debugging)
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The "<expression> =" line only survives until the next change
    fn begin_transition(&mut self) {
        self.state.finalized_expression = None;
    }

    fn commit(&self) -> EngineOutput {
        self.render()
    }
}
