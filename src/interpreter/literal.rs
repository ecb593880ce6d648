use crate::{error::LiteralError, util::num::widen_digits};

/// Result type used by the literal parsers.
pub type LiteralResult<T> = Result<T, LiteralError>;

/// Converts a decimal literal (`'-'? [0-9]+ ('.' [0-9]+)?`) to a number.
///
/// # Errors
/// Returns `LiteralError::InvalidDigits` if `text` is not a decimal literal.
///
/// # Example
/// ```
/// use calcline::interpreter::literal::parse_decimal;
///
/// assert_eq!(parse_decimal("-2.5"), Ok(-2.5));
/// assert!(parse_decimal("2.").is_err());
/// ```
pub fn parse_decimal(text: &str) -> LiteralResult<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || fraction.is_some_and(|f| !is_digits(f)) {
        return Err(invalid(text));
    }

    text.parse().map_err(|_| invalid(text))
}

/// Converts a hexadecimal literal (`'0x' [0-9a-fA-F]+`) to a number.
///
/// The digits are read as an unsigned integer and widened to `f64`; values
/// past `2^53` round to the nearest representable number.
///
/// # Errors
/// Returns `LiteralError::InvalidDigits` if `text` is not a hexadecimal
/// literal.
///
/// # Example
/// ```
/// use calcline::interpreter::literal::parse_hexadecimal;
///
/// assert_eq!(parse_hexadecimal("0x1A"), Ok(26.0));
/// assert_eq!(parse_hexadecimal("0xff"), Ok(255.0));
/// assert_eq!(parse_hexadecimal("0x10000000000000000"), Ok(18_446_744_073_709_551_616.0));
/// ```
pub fn parse_hexadecimal(text: &str) -> LiteralResult<f64> {
    let digits = text.strip_prefix("0x").ok_or_else(|| invalid(text))?;
    parse_radix(text, digits, 16)
}

/// Converts a binary literal (`[01]+ 'b'`) to a number.
///
/// The trailing `b` marker is stripped and the remaining digits are read as
/// an unsigned base-2 integer.
///
/// # Errors
/// Returns `LiteralError::InvalidDigits` if `text` is not a binary literal.
///
/// # Example
/// ```
/// use calcline::interpreter::literal::parse_binary;
///
/// assert_eq!(parse_binary("101b"), Ok(5.0));
/// assert!(parse_binary("102b").is_err());
/// ```
pub fn parse_binary(text: &str) -> LiteralResult<f64> {
    let digits = text.strip_suffix('b').ok_or_else(|| invalid(text))?;
    parse_radix(text, digits, 2)
}

/// Returns `true` if `text` is a valid variable name (`[a-zA-Z]+`).
///
/// # Example
/// ```
/// use calcline::interpreter::literal::is_variable_name;
///
/// assert!(is_variable_name("Total"));
/// assert!(!is_variable_name("x1"));
/// assert!(!is_variable_name("my_var"));
/// ```
#[must_use]
pub fn is_variable_name(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_alphabetic())
}

fn parse_radix(text: &str, digits: &str, radix: u32) -> LiteralResult<f64> {
    // `from_str_radix` would accept a sign.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid(text));
    }

    Ok(widen_digits(digits, radix))
}

fn invalid(text: &str) -> LiteralError {
    LiteralError::InvalidDigits { text: text.to_owned() }
}
