use std::fs;

use calcline::{Session, interpreter::parser::grammar::Rule};
use walkdir::WalkDir;

#[test]
fn session_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        // Every file is one session, so bindings carry from line to line.
        let mut session = Session::new();

        for (number, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            count += 1;

            let (input, expected) = line.split_once(" => ")
                                        .unwrap_or_else(|| {
                                            panic!("{path:?}:{}: missing ' => '", number + 1)
                                        });
            check_line(&mut session, input, expected.trim(), &format!("{path:?}:{}", number + 1));
        }
    }

    assert!(count > 0, "No session transcripts found in tests/sessions");
}

fn check_line(session: &mut Session, input: &str, expected: &str, location: &str) {
    let result = session.evaluate(input);

    if let Some(error) = expected.strip_prefix("error ") {
        let (rule, offset) = error.split_once(' ')
                                  .unwrap_or_else(|| panic!("{location}: bad expectation"));
        let offset: usize = offset.parse()
                                  .unwrap_or_else(|_| panic!("{location}: bad offset"));
        match result {
            Err(e) => {
                assert_eq!(e.rule_name(), rule, "{location}: wrong rule for {input:?}");
                assert_eq!(e.offset, offset, "{location}: wrong offset for {input:?}");
            },
            Ok(v) => panic!("{location}: {input:?} evaluated to {v}, expected a syntax error"),
        }
        return;
    }

    let expected: f64 = expected.parse()
                                .unwrap_or_else(|_| panic!("{location}: bad expected value"));
    match result {
        Ok(value) => assert!(same_value(value, expected),
                             "{location}: {input:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{location}: {input:?} failed: {e}"),
    }
}

fn same_value(actual: f64, expected: f64) -> bool {
    if expected.is_nan() {
        return actual.is_nan();
    }
    if expected.is_infinite() {
        return actual == expected;
    }
    (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0)
}

fn assert_value(session: &mut Session, src: &str, expected: f64) {
    match session.evaluate(src) {
        Ok(value) => assert!(same_value(value, expected),
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn value_of(src: &str) -> f64 {
    Session::new().evaluate(src)
                  .unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(value_of("1 + 2 * 3"), 7.0);
    assert_eq!(value_of("(1 + 2) * 3"), 9.0);
}

#[test]
fn subtraction_folds_left() {
    assert_eq!(value_of("10 - 3 - 2"), 5.0);
    assert_eq!(value_of("64 / 4 / 2"), 8.0);
}

#[test]
fn power_is_right_associative() {
    assert_eq!(value_of("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(value_of("(2 ^ 3) ^ 2"), 64.0);
}

#[test]
fn hexadecimal_and_binary_literals() {
    assert_eq!(value_of("0x1A"), 26.0);
    assert_eq!(value_of("101b"), 5.0);
}

#[test]
fn trigonometric_functions() {
    assert_eq!(value_of("sin(0)"), 0.0);
    assert_eq!(value_of("cos(0)"), 1.0);
    assert!((value_of("sin(3.141592653589793 / 2)") - 1.0).abs() < 1e-15);
}

#[test]
fn assignments_persist_within_a_session() {
    let mut session = Session::new();
    assert_value(&mut session, "x = 5", 5.0);
    assert_value(&mut session, "x + 1", 6.0);
    assert_eq!(session.environment().get("x"), Some(5.0));
}

#[test]
fn assignment_overwrites_previous_binding() {
    let mut session = Session::new();
    assert_value(&mut session, "x = 5", 5.0);
    assert_value(&mut session, "x = x * x", 25.0);
    assert_eq!(session.environment().len(), 1);
    assert_eq!(session.environment().get("x"), Some(25.0));
}

#[test]
fn header_clears_all_bindings() {
    let mut session = Session::new();
    assert_value(&mut session, "x = 5", 5.0);
    assert_value(&mut session, "y = 6", 6.0);
    assert_value(&mut session, "----", 0.0);
    assert!(session.environment().is_empty());
    assert_value(&mut session, "x", 0.0);
}

#[test]
fn environment_lists_bindings_by_name() {
    let mut session = Session::new();
    assert_value(&mut session, "b = 2", 2.0);
    assert_value(&mut session, "a = 1", 1.0);
    assert_value(&mut session, "B = 3", 3.0);

    let bindings: Vec<_> = session.environment().iter().collect();
    assert_eq!(bindings, [("B", 3.0), ("a", 1.0), ("b", 2.0)]);
}

#[test]
fn unbound_variables_read_as_zero() {
    let mut session = Session::new();
    assert_value(&mut session, "nothing * 3 + 1", 1.0);
    assert!(session.environment().is_empty());
}

#[test]
fn variable_names_are_case_sensitive() {
    let mut session = Session::new();
    assert_value(&mut session, "Rate = 2", 2.0);
    assert_value(&mut session, "rate", 0.0);
    assert_value(&mut session, "Rate", 2.0);
}

#[test]
fn operands_evaluate_left_to_right() {
    let mut session = Session::new();
    // The left operand binds `a` before the right operand reads it.
    assert_value(&mut session, "(a = 2) + a", 4.0);
    // The right operand rebinds `a` after the left one has been read.
    assert_value(&mut session, "a * (a = 10)", 20.0);
    assert_eq!(session.environment().get("a"), Some(10.0));
}

#[test]
fn division_by_zero_is_infinite() {
    assert_eq!(value_of("1 / 0"), f64::INFINITY);
    assert_eq!(value_of("-1 / 0"), f64::NEG_INFINITY);
    assert!(value_of("0 / 0").is_nan());
}

#[test]
fn fractional_power_of_negative_base_is_nan() {
    assert!(value_of("-8 ^ (1 / 3)").is_nan());
}

#[test]
fn incomplete_expression_reports_position_after_operator() {
    let error = Session::new().evaluate("1 + ").unwrap_err();
    assert_eq!(error.rule, Rule::Atom);
    assert_eq!(error.offset, 3);
    assert_eq!(error.length, 0);
}

#[test]
fn syntax_error_leaves_environment_untouched() {
    let mut session = Session::new();
    assert_value(&mut session, "x = 3", 3.0);
    assert!(session.evaluate("x = (x = 4) +").is_err());
    assert_eq!(session.environment().get("x"), Some(3.0));
}

#[test]
fn sessions_do_not_share_environments() {
    let mut first = Session::new();
    let mut second = Session::new();
    assert_value(&mut first, "x = 1", 1.0);
    assert_value(&mut second, "x", 0.0);
}
