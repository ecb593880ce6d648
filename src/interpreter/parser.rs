/// Rule table and parse entry point.
///
/// Names every grammar rule, holds the table of callable functions and exposes
/// `Grammar::parse`, which matches a whole line against the start rule.
pub mod grammar;

/// Token cursor and shared parsing helpers.
///
/// Defines the `TokenStream` every rule function reads from, the
/// `ParseResult` alias and the `Expression` rule.
pub mod core;

/// Session-level rules.
///
/// Implements the start rule (`Session`), the reset directive (`Header`) and
/// `Assignment`.
pub mod session;

/// Binary operator rules.
///
/// Implements the three arithmetic precedence layers: additive,
/// multiplicative and power.
pub mod binary;

/// Operand rules.
///
/// Implements function calls, atoms, parenthesized expressions and numeric
/// literals.
pub mod unary;
