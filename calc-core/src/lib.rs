pub mod types;
pub mod error;
pub mod eval;
pub mod engine;
pub mod input;

pub use types::*;

// Re-export commonly used types
pub use error::{CalcError, Result};
pub use eval::{evaluate, evaluate_sentinel, format_number, parse_number, sanitize};
pub use engine::{CalculatorEngine, Command, DisplaySurface, EngineOutput};
