//! # calcline
//!
//! calcline is an interactive calculator language written in Rust.
//! It parses one line at a time into a typed syntax tree and evaluates it
//! against a session-wide variable environment. Lines may contain decimal,
//! hexadecimal (`0x1A`) and binary (`101b`) literals, variables, assignment,
//! `+ - * / ^` with the usual precedence, parentheses and the functions `sin`
//! and `cos`. A line of dashes (`----`) clears all variables.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{environment::Environment, evaluator::core::Evaluator, parser::grammar::Grammar},
};

/// Defines the structure of parsed lines.
///
/// This module declares the `Expr` enum and the small types it is built from.
/// Every node carries the byte span of the input it was parsed from.
pub mod ast;
/// Provides the error types for parsing.
///
/// # Responsibilities
/// - Defines the syntax error reported for lines that do not parse.
/// - Defines the literal conversion error.
/// - Renders caret diagnostics pointing at the failing span.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, literal parsers, grammar, evaluator
/// and environment.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Parses and evaluates one line against an environment.
///
/// This is the per-line boundary of the calculator. On success every
/// assignment in the line has been applied to `environment` and the line's
/// value is returned. On a syntax error nothing has been evaluated and
/// `environment` is untouched.
///
/// # Errors
/// Returns a `SyntaxError` if the line does not match the grammar.
///
/// # Examples
/// ```
/// use calcline::{
///     evaluate,
///     interpreter::{environment::Environment, parser::grammar::Grammar},
/// };
///
/// let grammar = Grammar::new();
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate(&grammar, "x = 5", &mut env), Ok(5.0));
/// assert_eq!(evaluate(&grammar, "x + 1", &mut env), Ok(6.0));
///
/// // A line that does not parse leaves the environment alone.
/// assert!(evaluate(&grammar, "x = 1 +", &mut env).is_err());
/// assert_eq!(env.get("x"), Some(5.0));
/// ```
pub fn evaluate(grammar: &Grammar,
                line: &str,
                environment: &mut Environment)
                -> Result<f64, SyntaxError> {
    let expr = grammar.parse(line)?;
    Ok(Evaluator::new(environment).eval(&expr))
}

/// One interactive session: a grammar and the environment it evaluates
/// against.
///
/// Each session owns its own environment, so two sessions never see each
/// other's variables.
#[derive(Debug, Clone, Default)]
pub struct Session {
    grammar:     Grammar,
    environment: Environment,
}

impl Session {
    /// Starts a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and evaluates one line. See [`evaluate`].
    ///
    /// # Example
    /// ```
    /// use calcline::Session;
    ///
    /// let mut session = Session::new();
    /// session.evaluate("x = 5").unwrap();
    /// assert_eq!(session.evaluate("----"), Ok(0.0));
    /// assert_eq!(session.evaluate("x"), Ok(0.0));
    /// ```
    pub fn evaluate(&mut self, line: &str) -> Result<f64, SyntaxError> {
        evaluate(&self.grammar, line, &mut self.environment)
    }

    /// Parses one line without evaluating it.
    pub fn parse(&self, line: &str) -> Result<Expr, SyntaxError> {
        self.grammar.parse(line)
    }

    /// Evaluates an already parsed line.
    pub fn evaluate_tree(&mut self, expr: &Expr) -> f64 {
        Evaluator::new(&mut self.environment).eval(expr)
    }

    /// The session's variable bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }
}
