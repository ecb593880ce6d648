/// Widens a run of digits in `radix` to the nearest `f64`.
///
/// Runs that fit in a `u128` are converted in one rounding step. Longer runs
/// are folded digit by digit and saturate to infinity once they pass
/// `f64::MAX`.
///
/// Callers must have checked that every character of `digits` is a digit of
/// `radix`; anything else is skipped.
///
/// ## Example
/// ```
/// use calcline::util::num::widen_digits;
///
/// assert_eq!(widen_digits("1A", 16), 26.0);
/// assert_eq!(widen_digits("20000000000000", 16), 9_007_199_254_740_992.0);
/// assert!(widen_digits(&"f".repeat(300), 16).is_infinite());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn widen_digits(digits: &str, radix: u32) -> f64 {
    if let Ok(value) = u128::from_str_radix(digits, radix) {
        return value as f64;
    }
    digits.chars()
          .filter_map(|c| c.to_digit(radix))
          .fold(0.0, |acc, digit| acc.mul_add(f64::from(radix), f64::from(digit)))
}

/// Counts the characters in `source` that precede the byte `offset`.
///
/// Diagnostics draw carets in character columns while spans are measured in
/// bytes. An offset past the end or inside a multi-byte character is clamped
/// to the nearest preceding character boundary.
///
/// ## Example
/// ```
/// use calcline::util::num::column_of;
///
/// assert_eq!(column_of("1 + 2", 4), 4);
/// assert_eq!(column_of("é + 2", 3), 2);
/// assert_eq!(column_of("1", 10), 1);
/// ```
#[must_use]
pub fn column_of(source: &str, offset: usize) -> usize {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source[..end].chars().count()
}
