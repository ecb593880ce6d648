use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one; there is no
    /// short-circuiting, so assignments on both sides always take effect.
    pub fn eval_binary_op(&mut self, left: &Expr, op: BinaryOperator, right: &Expr) -> f64 {
        let left = self.eval(left);
        let right = self.eval(right);
        Self::eval_arithmetic(op, left, right)
    }

    /// Applies an arithmetic operator to two values.
    ///
    /// Native floating-point semantics apply throughout: division by zero
    /// yields a signed infinity (or NaN for `0 / 0`), and a negative base
    /// raised to a fractional exponent yields NaN.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_arithmetic(BinaryOperator::Divide, -1.0, 0.0),
    ///            f64::NEG_INFINITY);
    /// assert!(Evaluator::eval_arithmetic(BinaryOperator::Power, -8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_arithmetic(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Power => left.powf(right),
        }
    }
}
