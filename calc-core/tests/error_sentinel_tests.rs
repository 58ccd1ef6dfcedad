//! Tests for error sentinels and how they gate further input

use calc_core::{CalculatorEngine, Sentinel};

mod common;
use common::*;

#[test]
fn test_division_by_zero_on_equals() {
    let mut engine = CalculatorEngine::new();
    let output = run_script(&mut engine, "5 / 0 =");
    assert_display(&output, "Cannot divide by zero", "5 / 0 =");
    assert_eq!(engine.state().sentinel(), Some(Sentinel::DivisionByZero));
}

#[test]
fn test_operator_ignored_while_showing_error() {
    let mut engine = CalculatorEngine::new();
    run_script(&mut engine, "5 / 0 =");

    let output = run_script(&mut engine, "+");
    assert_display(&output, "Cannot divide by zero", "5 / 0 =");
    assert!(engine.state().pending.is_none());

    let output = run_script(&mut engine, "2");
    assert_display(&output, "2", "");

    let output = run_script(&mut engine, "+");
    assert_display(&output, "2", "2 + ");
}

#[test]
fn test_chained_division_by_zero_drops_pending() {
    let mut engine = CalculatorEngine::new();
    let output = run_script(&mut engine, "5 / 0 +");
    assert_display(&output, "Cannot divide by zero", "");
    assert!(engine.state().waiting_for_new_input);

    let output = run_script(&mut engine, "*");
    assert_display(&output, "Cannot divide by zero", "");
}

#[test]
fn test_zero_divided_by_zero() {
    assert_eq!(main_after("0 / 0 ="), "Cannot divide by zero");
}

#[test]
fn test_overflow_reports_non_finite() {
    let big = vec!["9"; 200].join(" ");
    let script = format!("{} * {} =", big, big);
    assert_eq!(main_after(&script), "Cannot divide by zero");
}

#[test]
fn test_sqrt_of_negative() {
    let mut engine = CalculatorEngine::new();
    let output = run_script(&mut engine, "4 negate sqrt");
    assert_display(&output, "Invalid input", "");
    assert_eq!(engine.state().sentinel(), Some(Sentinel::InvalidDomain));
}

#[test]
fn test_error_operand_in_pending_expression() {
    let mut engine = CalculatorEngine::new();
    run_script(&mut engine, "5 + 4 negate sqrt");
    assert_eq!(engine.current_input(), "Invalid input");

    let output = run_script(&mut engine, "=");
    assert_display(&output, "Error", "5 + Invalid input =");
}

#[test]
fn test_backspace_ignored_on_error() {
    let mut engine = CalculatorEngine::new();
    run_script(&mut engine, "1 / 0 =");

    let output = run_script(&mut engine, "Backspace");
    assert_eq!(output.main_text, "Cannot divide by zero");

    run_script(&mut engine, "Escape 9 negate sqrt Backspace");
    assert_eq!(engine.current_input(), "Invalid input");
}

#[test]
fn test_unary_ignored_on_error() {
    assert_eq!(main_after("1 / 0 = sqrt"), "Cannot divide by zero");
    assert_eq!(main_after("1 / 0 = negate"), "Cannot divide by zero");
}

#[test]
fn test_decimal_and_clears_overwrite_error() {
    assert_eq!(main_after("1 / 0 = ."), "0.");
    assert_eq!(main_after("1 / 0 = Escape"), "0");
    assert_eq!(main_after("1 / 0 = CE"), "0");
}
