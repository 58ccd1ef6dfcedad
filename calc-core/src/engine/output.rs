//! Output representation for the calculator engine

/// The two display lines after a transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineOutput {
    /// Main line: the current input or an error sentinel
    pub main_text: String,
    /// Secondary line: the pending expression or the last finished equation
    pub expression_text: String,
}

impl EngineOutput {
    /// Creates a new engine output
    pub fn new(main_text: String, expression_text: String) -> Self {
        Self {
            main_text,
            expression_text,
        }
    }
}

/// Anything that can present engine output
pub trait DisplaySurface {
    fn show(&mut self, output: &EngineOutput);
}

/// Records every frame, mostly useful for tests and replay
impl DisplaySurface for Vec<EngineOutput> {
    fn show(&mut self, output: &EngineOutput) {
        self.push(output.clone());
    }
}
