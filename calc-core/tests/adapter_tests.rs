//! Tests driving the engine through the keyboard and pointer adapters

use calc_core::input::{action_for_key, command_for_button, command_for_key, ButtonInput};
use calc_core::{CalculatorEngine, DisplaySurface, EngineOutput};
use pretty_assertions::assert_eq;

mod common;
use common::*;

fn press_keys(engine: &mut CalculatorEngine, keys: &[&str]) -> EngineOutput {
    let mut output = engine.render();
    for key in keys {
        if let Some(command) = command_for_key(key) {
            output = engine.process(command);
        }
    }
    output
}

fn click(engine: &mut CalculatorEngine, buttons: &[ButtonInput]) -> EngineOutput {
    let mut output = engine.render();
    for button in buttons {
        if let Some(command) = command_for_button(button) {
            output = engine.process(command);
        }
    }
    output
}

#[test]
fn test_keyboard_session() {
    let mut engine = CalculatorEngine::new();
    let output = press_keys(&mut engine, &["1", "2", "*", "3", "Enter"]);
    assert_display(&output, "36", "12 * 3 =");

    let output = press_keys(&mut engine, &["Escape"]);
    assert_display(&output, "0", "");
}

#[test]
fn test_keyboard_ignores_unmapped_keys() {
    let mut engine = CalculatorEngine::new();
    let output = press_keys(&mut engine, &["4", "Shift", " ", "a", "2"]);
    assert_eq!(output.main_text, "42");
}

#[test]
fn test_keyboard_backspace_prevents_default() {
    let action = action_for_key("Backspace").unwrap();
    assert!(action.prevent_default);

    let mut engine = CalculatorEngine::new();
    press_keys(&mut engine, &["9", "8"]);
    assert_eq!(engine.process(action.command).main_text, "9");
}

#[test]
fn test_pointer_session() {
    let mut engine = CalculatorEngine::new();
    let buttons = [
        ButtonInput::with_role("digit", "9"),
        ButtonInput::with_role("operator", "\u{00F7}"),
        ButtonInput::with_role("digit", "4"),
        ButtonInput::with_role("equal", "="),
        ButtonInput::new("MS").with_action("memory-store"),
        ButtonInput::with_role("clear", "C"),
        ButtonInput::new("MR").with_action("memory-recall"),
        ButtonInput::with_role("square", "x\u{00B2}"),
    ];

    let output = click(&mut engine, &buttons);
    assert_display(&output, "5.0625", "");
    assert_eq!(engine.memory(), 2.25);
}

#[test]
fn test_surface_receives_every_frame() {
    let mut engine = CalculatorEngine::new();
    let mut frames: Vec<EngineOutput> = Vec::new();

    for key in ["7", "-", "2", "="] {
        let command = command_for_key(key).unwrap();
        frames.show(&engine.process(command));
    }

    let lines: Vec<(&str, &str)> = frames
        .iter()
        .map(|f| (f.main_text.as_str(), f.expression_text.as_str()))
        .collect();
    assert_eq!(
        lines,
        vec![("7", ""), ("7", "7 - "), ("2", "7 - "), ("5", "7 - 2 =")]
    );
}
