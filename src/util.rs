/// Numeric conversion helpers.
///
/// Integer literals (hexadecimal and binary) are widened to `f64` with
/// ordinary rounding, and byte offsets are mapped to character columns for
/// diagnostics.
pub mod num;
