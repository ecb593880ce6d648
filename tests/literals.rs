use calcline::{
    Session,
    error::LiteralError,
    interpreter::literal::{is_variable_name, parse_binary, parse_decimal, parse_hexadecimal},
};
use proptest::prelude::*;

fn value_of(src: &str) -> f64 {
    Session::new().evaluate(src)
                  .unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

#[test]
fn decimal_literals() {
    assert_eq!(parse_decimal("0"), Ok(0.0));
    assert_eq!(parse_decimal("007"), Ok(7.0));
    assert_eq!(parse_decimal("-0.25"), Ok(-0.25));
    assert!(matches!(parse_decimal(".5"), Err(LiteralError::InvalidDigits { .. })));
    assert!(matches!(parse_decimal("1e5"), Err(LiteralError::InvalidDigits { .. })));
    assert!(matches!(parse_decimal("--1"), Err(LiteralError::InvalidDigits { .. })));
}

#[test]
fn hexadecimal_literals() {
    assert_eq!(parse_hexadecimal("0x0"), Ok(0.0));
    assert_eq!(parse_hexadecimal("0xDEADbeef"), Ok(3_735_928_559.0));
    assert!(matches!(parse_hexadecimal("0x"), Err(LiteralError::InvalidDigits { .. })));
    assert!(matches!(parse_hexadecimal("0X1A"), Err(LiteralError::InvalidDigits { .. })));
    assert!(matches!(parse_hexadecimal("0x+1"), Err(LiteralError::InvalidDigits { .. })));
    assert_eq!(parse_hexadecimal("0x20000000000000"), Ok(9_007_199_254_740_992.0));
    assert_eq!(parse_hexadecimal("0x10000000000000000"), Ok(18_446_744_073_709_551_616.0));
    // Past u128 the digits are folded one by one.
    assert_eq!(parse_hexadecimal(&format!("0x1{}", "0".repeat(40))), Ok(2f64.powi(160)));
    assert_eq!(parse_hexadecimal(&format!("0x{}", "f".repeat(300))), Ok(f64::INFINITY));
}

#[test]
fn binary_literals() {
    assert_eq!(parse_binary("0b"), Ok(0.0));
    assert_eq!(parse_binary("11111111b"), Ok(255.0));
    assert!(matches!(parse_binary("b"), Err(LiteralError::InvalidDigits { .. })));
    assert!(matches!(parse_binary("101"), Err(LiteralError::InvalidDigits { .. })));
    assert_eq!(parse_binary(&format!("1{}b", "0".repeat(53))), Ok(9_007_199_254_740_992.0));
    assert_eq!(parse_binary(&format!("1{}b", "0".repeat(200))), Ok(2f64.powi(200)));
}

#[test]
fn literal_error_messages_name_the_text() {
    let error = parse_binary("12b").unwrap_err();
    assert!(error.to_string().contains("12b"));

    let error = parse_hexadecimal("0xg").unwrap_err();
    assert!(error.to_string().contains("0xg"));
}

#[test]
fn variable_names() {
    assert!(is_variable_name("x"));
    assert!(is_variable_name("sin"));
    assert!(!is_variable_name(""));
    assert!(!is_variable_name("café"));
}

proptest! {
    #[test]
    fn decimal_text_evaluates_to_its_value(text in r"-?[0-9]{1,15}(\.[0-9]{1,10})?") {
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(value_of(&text), expected);
    }

    #[test]
    fn printed_values_read_back(text in r"[0-9]{1,15}(\.[0-9]{1,10})?") {
        let value = value_of(&text);
        prop_assert_eq!(value_of(&value.to_string()), value);
    }

    #[test]
    fn binary_text_evaluates_to_its_value(n in any::<u32>()) {
        prop_assert_eq!(value_of(&format!("{n:b}b")), f64::from(n));
    }

    #[test]
    fn hexadecimal_text_evaluates_to_its_value(n in any::<u64>()) {
        #[allow(clippy::cast_precision_loss)]
        let expected = n as f64;
        prop_assert_eq!(value_of(&format!("0x{n:x}")), expected);
        prop_assert_eq!(value_of(&format!("0x{n:X}")), expected);
    }

    #[test]
    fn wide_binary_text_rounds_like_a_cast(n in any::<u128>()) {
        #[allow(clippy::cast_precision_loss)]
        let expected = n as f64;
        prop_assert_eq!(value_of(&format!("{n:b}b")), expected);
    }

    #[test]
    fn assigned_names_read_back(name in "[a-zA-Z]{1,8}", n in -1000i32..1000) {
        let mut session = Session::new();
        let value = f64::from(n);
        prop_assert_eq!(session.evaluate(&format!("{name} = {n}")), Ok(value));
        prop_assert_eq!(session.evaluate(&name), Ok(value));
        prop_assert_eq!(session.environment().get(&name), Some(value));
    }
}
