//! Calculator engine - the input state machine
//!
//! This module folds digit, operator and editing commands into the two-line
//! display model: the current input and the pending expression.

mod command;
mod engine;
mod output;
mod state;

pub use command::Command;
pub use engine::CalculatorEngine;
pub use output::{DisplaySurface, EngineOutput};
pub use state::{EngineState, PendingOperation};
