/// Core evaluation logic.
///
/// Holds the `Evaluator` and its dispatch over every AST node kind, together
/// with the environment-facing kinds: variables, assignments and headers.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators with IEEE-754 semantics.
pub mod binary;

/// Function evaluation.
///
/// Declares the table of callable functions and applies them.
pub mod function;
