pub mod config;
pub mod session;

pub use calc_core::*;
pub use config::Config;
pub use session::{eval_expression, Session, SessionOptions};
