use std::thread;

use calcline::{
    ast::{Expr, Span},
    interpreter::parser::{
        core::MAX_NESTING,
        grammar::{Grammar, Rule},
    },
};

fn tree(src: &str) -> String {
    Grammar::new().parse(src)
                  .unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"))
                  .to_string()
}

fn assert_error(src: &str, rule: Rule, offset: usize, length: usize) {
    match Grammar::new().parse(src) {
        Err(e) => {
            assert_eq!(e.rule, rule, "wrong rule for {src:?}");
            assert_eq!(e.offset, offset, "wrong offset for {src:?}");
            assert_eq!(e.length, length, "wrong length for {src:?}");
        },
        Ok(expr) => panic!("{src:?} parsed as {expr}, expected an error"),
    }
}

/// Runs `f` on a thread with room for deeply nested input.
fn with_large_stack(f: impl FnOnce() + Send + 'static) {
    thread::Builder::new().stack_size(64 * 1024 * 1024)
                          .spawn(f)
                          .expect("failed to spawn test thread")
                          .join()
                          .expect("test thread panicked");
}

#[test]
fn additive_and_multiplicative_fold_left() {
    assert_eq!(tree("10 - 3 - 2"), "(Subtract (Subtract 10 3) 2)");
    assert_eq!(tree("8 / 4 * 2"), "(Multiply (Divide 8 4) 2)");
    assert_eq!(tree("1 + 2 * 3"), "(Add 1 (Multiply 2 3))");
}

#[test]
fn power_folds_right() {
    assert_eq!(tree("2 ^ 3 ^ 2"), "(Power 2 (Power 3 2))");
    assert_eq!(tree("2 * 3 ^ 2"), "(Multiply 2 (Power 3 2))");
}

#[test]
fn assignment_takes_an_algebraic_expression() {
    assert_eq!(tree("x = (1 + 2)"), "(Assignment x (Parenthesized (Add 1 2)))");
    assert_eq!(tree("y = x * 2"), "(Assignment y (Multiply x 2))");
}

#[test]
fn chained_assignment_is_rejected() {
    // `x = y` is complete, so `= 1` is left over.
    assert_error("x = y = 1", Rule::Session, 6, 3);
}

#[test]
fn function_call_needs_parentheses() {
    assert_eq!(tree("sin(x) ^ 2"), "(Power (Sin (Parenthesized x)) 2)");
    assert_eq!(tree("cos(0)"), "(Cos (Parenthesized 0))");
    // Without a following `(` the name is a plain variable.
    assert_eq!(tree("sin + 1"), "(Add sin 1)");
}

#[test]
fn glued_minus_is_part_of_the_literal() {
    assert_eq!(tree("3 - -2"), "(Subtract 3 -2)");
    assert_eq!(tree("3--2"), "(Subtract 3 -2)");
    assert_eq!(tree("-2 ^ 2"), "(Power -2 2)");
    assert_eq!(tree("-2.5"), "-2.5");
}

#[test]
fn detached_minus_is_not_a_sign() {
    assert_error("- 5", Rule::Atom, 0, 3);
    assert_error("-x", Rule::Atom, 0, 2);
}

#[test]
fn literals_keep_their_source_text() {
    assert_eq!(tree("0x1A + 101b"), "(Add 0x1A 101b)");
    assert_eq!(tree("0xff * 2.50"), "(Multiply 0xff 2.50)");
}

#[test]
fn headers_are_runs_of_dashes() {
    assert_eq!(tree("----"), "(Header ----)");
    assert_eq!(tree("-"), "(Header -)");
    assert_eq!(tree("- - -"), "(Header - - -)");
    assert_error("-- 1", Rule::Atom, 0, 4);
}

#[test]
fn nodes_carry_source_spans() {
    let expr = Grammar::new().parse("1 + 2 * 3").unwrap();
    assert_eq!(expr.span(), Span::new(0, 9));

    let Expr::BinaryOp { right, .. } = expr else {
        panic!("expected a binary operation");
    };
    assert_eq!(right.span(), Span::new(4, 5));
    assert_eq!(right.rule_name(), "Multiply");
}

#[test]
fn error_positions() {
    assert_error("1 + ", Rule::Atom, 3, 0);
    assert_error("1 + )", Rule::Atom, 4, 1);
    assert_error("(1", Rule::Parenthesized, 2, 0);
    assert_error("1 2 3", Rule::Session, 2, 3);
    assert_error("", Rule::Atom, 0, 0);
    assert_error("sin(", Rule::Atom, 4, 0);
    assert_error("x = ", Rule::Atom, 3, 0);
}

#[test]
fn wide_literals_round_to_the_nearest_value() {
    assert_eq!(tree("0x20000000000000"), "0x20000000000000");
    assert_eq!(tree("1 + 0xFFFFFFFFFFFFFFFFFF"), "(Add 1 0xFFFFFFFFFFFFFFFFFF)");

    let Expr::HexLiteral { value, .. } = Grammar::new().parse("0x10000000000000000").unwrap() else {
        panic!("expected a hexadecimal literal");
    };
    assert_eq!(value, 18_446_744_073_709_551_616.0);
}

#[test]
fn unrecognized_characters_are_reported() {
    assert_error("2 $ 3", Rule::Session, 2, 3);
    assert_error("1 + $", Rule::Atom, 4, 1);
}

#[test]
fn render_points_at_the_failing_span() {
    let error = Grammar::new().parse("1 + $").unwrap_err();
    assert_eq!(error.render("1 + $"), "      ~^\n  Syntax error while parsing Atom");

    let error = Grammar::new().parse("(1").unwrap_err();
    assert_eq!(error.render("(1"), "    ^\n  Syntax error while parsing Parenthesized");
}

#[test]
fn trailing_whitespace_is_ignored() {
    assert_eq!(tree("1 + 2   "), "(Add 1 2)");
    assert_error("1 +   \t", Rule::Atom, 3, 0);
}

#[test]
fn nesting_is_bounded() {
    with_large_stack(|| {
        let grammar = Grammar::new();

        let ok = format!("{}1{}", "(".repeat(200), ")".repeat(200));
        assert!(grammar.parse(&ok).is_ok());

        let deep = format!("{}1{}", "(".repeat(MAX_NESTING + 44), ")".repeat(MAX_NESTING + 44));
        let error = grammar.parse(&deep).unwrap_err();
        assert_eq!(error.rule, Rule::Parenthesized);
        assert_eq!(error.offset, MAX_NESTING + 1);

        let tower = format!("{}1", "1^".repeat(MAX_NESTING + 44));
        assert_eq!(grammar.parse(&tower).unwrap_err().rule, Rule::PowerExpression);
    });
}

#[test]
fn grammar_tables() {
    let grammar = Grammar::new();

    assert_eq!(grammar.start(), Rule::Session);
    assert_eq!(grammar.rules().count(), 16);
    assert!(grammar.rules().all(|rule| !rule.definition().is_empty()));
    assert!(grammar.function("sin").is_some());
    assert!(grammar.function("cos").is_some());
    assert!(grammar.function("tan").is_none());
    assert!(grammar.function("Sin").is_none());
}
