use std::io::Cursor;

use calc_cli::{eval_expression, Session, SessionOptions};
use pretty_assertions::assert_eq;

fn options(trace: bool) -> SessionOptions {
    SessionOptions {
        trace,
        show_memory_indicator: true,
        prompt: String::new(),
    }
}

fn output_of(session: Session<Vec<u8>>) -> String {
    String::from_utf8(session.into_inner()).unwrap()
}

#[test]
fn test_run_script() {
    let mut session = Session::new(Vec::new(), options(false));
    let output = session.run_script("3 + 4 Enter").unwrap();
    assert_eq!(output.main_text, "7");
    assert_eq!(output.expression_text, "3 + 4 =");
    assert_eq!(output_of(session), "");
}

#[test]
fn test_trace_prints_every_frame() {
    let mut session = Session::new(Vec::new(), options(true));
    session.run_script("2 * 3 =").unwrap();
    assert_eq!(output_of(session), "\n2\n2 *\n2\n2 *\n3\n2 * 3 =\n6\n");
}

#[test]
fn test_unknown_key_leaves_engine_untouched() {
    let mut session = Session::new(Vec::new(), options(false));
    session.run_script("5").unwrap();

    let err = session.run_script("+ 1 banana").unwrap_err();
    assert!(format!("{:#}", err).contains("banana"));
    assert_eq!(session.engine().current_input(), "5");
    assert_eq!(session.engine().render().expression_text, "");
}

#[test]
fn test_memory_indicator() {
    let mut session = Session::new(Vec::new(), options(false));
    let output = session.run_script("8 MS + 1").unwrap();
    assert_eq!(session.format_frame(&output), "M 8 +\n1");

    let output = session.run_script("MC").unwrap();
    assert_eq!(session.format_frame(&output), "8 +\n1");
}

#[test]
fn test_repl() {
    let input = Cursor::new("1 2 +\n3 =\n\nnope\nquit\n9\n");
    let mut session = Session::new(Vec::new(), options(false));
    session.repl(input).unwrap();

    let text = output_of(session);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "12 +");
    assert_eq!(lines[1], "12");
    assert_eq!(lines[2], "12 + 3 =");
    assert_eq!(lines[3], "15");
    assert!(lines[4].starts_with("error:"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_repl_prompt() {
    let input = Cursor::new("4\n");
    let mut session = Session::new(
        Vec::new(),
        SessionOptions {
            prompt: "> ".to_string(),
            ..options(false)
        },
    );
    session.repl(input).unwrap();
    assert_eq!(output_of(session), "> \n4\n> ");
}

#[test]
fn test_eval_expression() {
    assert_eq!(eval_expression("2 * (3 + 4)"), Ok("14".to_string()));
    assert_eq!(eval_expression("1 / 0"), Err("Cannot divide by zero".to_string()));
    assert_eq!(eval_expression("2 +"), Err("Error".to_string()));
    assert_eq!(eval_expression("rm -rf / ; 1+1"), Err("Error".to_string()));
}
