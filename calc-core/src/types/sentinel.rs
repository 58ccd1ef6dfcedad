use std::fmt;

/// Error text substituted for the current input when a result cannot be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    DivisionByZero,        // non-finite result or reciprocal of zero
    MalformedExpression,   // any other evaluation failure
    InvalidDomain,         // square root of a negative number
}

impl Sentinel {
    pub const ALL: [Sentinel; 3] = [
        Sentinel::DivisionByZero,
        Sentinel::MalformedExpression,
        Sentinel::InvalidDomain,
    ];

    /// The exact text shown on the main display line
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentinel::DivisionByZero => "Cannot divide by zero",
            Sentinel::MalformedExpression => "Error",
            Sentinel::InvalidDomain => "Invalid input",
        }
    }

    /// Recognize a sentinel from display text
    pub fn from_text(text: &str) -> Option<Sentinel> {
        Self::ALL.into_iter().find(|s| s.as_str() == text)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
