pub mod operators;
pub mod sentinel;

pub use operators::*;
pub use sentinel::*;
