use log::{debug, trace};

use crate::{
    ast::{Expr, Identifier},
    interpreter::environment::Environment,
};

/// Walks an AST and computes its value.
///
/// The evaluator holds nothing but an explicitly scoped mutable borrow of the
/// session's [`Environment`]. Evaluation never fails: unbound variables read
/// as zero and arithmetic follows IEEE-754, so invalid operations produce
/// infinities or NaN instead of errors.
///
/// ## Usage
///
/// Create one evaluator per line, or keep one around for a sequence of lines
/// of the same session; either way every assignment lands in the borrowed
/// environment.
pub struct Evaluator<'env> {
    environment: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator that reads and writes `environment`.
    #[must_use]
    pub const fn new(environment: &'env mut Environment) -> Self {
        Self { environment }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated left to right, each exactly once.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::{
    ///     environment::Environment, evaluator::core::Evaluator, parser::grammar::Grammar,
    /// };
    ///
    /// let grammar = Grammar::new();
    /// let mut env = Environment::new();
    ///
    /// let tree = grammar.parse("x = 2 ^ 3").unwrap();
    /// assert_eq!(Evaluator::new(&mut env).eval(&tree), 8.0);
    /// assert_eq!(env.get("x"), Some(8.0));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> f64 {
        let value = match expr {
            Expr::DecimalLiteral { value, .. }
            | Expr::HexLiteral { value, .. }
            | Expr::BinaryLiteral { value, .. } => *value,
            Expr::Variable { name, .. } => self.eval_variable(name),
            Expr::Assignment { target, value, .. } => self.eval_assignment(target, value),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::FunctionCall { function, argument, .. } => {
                self.eval_function_call(*function, argument)
            },
            Expr::Parenthesized { expr, .. } => self.eval(expr),
            Expr::Header { .. } => self.eval_header(),
        };

        trace!("{} at {:?} = {value}", expr.rule_name(), expr.span());
        value
    }

    /// Looks up a variable by name.
    ///
    /// An unbound name evaluates to zero rather than raising an error.
    pub fn eval_variable(&self, name: &str) -> f64 {
        if self.environment.get(name).is_none() {
            debug!("variable '{name}' is unbound, reading 0");
        }
        self.environment.lookup(name)
    }

    /// Evaluates the right-hand side, binds it to the target name and returns
    /// it. Any previous binding is overwritten.
    pub fn eval_assignment(&mut self, target: &Identifier, value: &Expr) -> f64 {
        let value = self.eval(value);
        match self.environment.bind(&target.name, value) {
            Some(previous) => debug!("rebound '{}' from {previous} to {value}", target.name),
            None => debug!("bound '{}' to {value}", target.name),
        }
        value
    }

    /// Clears every binding; a header always evaluates to zero.
    pub fn eval_header(&mut self) -> f64 {
        let cleared = self.environment.clear();
        debug!("header cleared {cleared} binding(s)");
        0.0
    }
}
