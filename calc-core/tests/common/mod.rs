//! Helper functions for driving the engine in tests

use calc_core::input::parse_script;
use calc_core::{CalculatorEngine, Digit, EngineOutput};

/// Run a whitespace-separated key script and return the last display
#[allow(dead_code)]
pub fn run_script(engine: &mut CalculatorEngine, script: &str) -> EngineOutput {
    let mut output = engine.render();
    for command in parse_script(script).expect("valid key script") {
        output = engine.process(command);
    }
    output
}

/// Create a fresh engine and run a script on it
#[allow(dead_code)]
pub fn engine_after(script: &str) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    run_script(&mut engine, script);
    engine
}

/// Main display text after running a script on a fresh engine
#[allow(dead_code)]
pub fn main_after(script: &str) -> String {
    engine_after(script).render().main_text
}

/// Helper to create a Digit from a character
#[allow(dead_code)]
pub fn digit(ch: char) -> Digit {
    Digit::try_from(ch).expect("ascii digit")
}

/// Check both display lines at once
#[allow(dead_code)]
pub fn assert_display(output: &EngineOutput, main: &str, expression: &str) {
    assert_eq!(
        (output.main_text.as_str(), output.expression_text.as_str()),
        (main, expression),
        "unexpected display"
    );
}
