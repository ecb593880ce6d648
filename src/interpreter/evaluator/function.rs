use crate::{
    ast::{Expr, Function},
    interpreter::evaluator::core::Evaluator,
};

/// Defines the callable functions by generating a lookup table and a name
/// list.
///
/// Each entry maps the name written in source to its [`Function`]. The macro
/// produces:
/// - `FunctionDef` (table entry),
/// - `FUNCTION_TABLE` (static table read by the grammar),
/// - `FUNCTION_NAMES` (public list of function names).
macro_rules! functions {
    (
        $(
            $name:literal => $function:expr
        ),* $(,)?
    ) => {
        /// One entry of [`FUNCTION_TABLE`].
        #[derive(Debug, Clone, Copy)]
        pub struct FunctionDef {
            /// Name as written in source.
            pub name:     &'static str,
            /// The function it denotes.
            pub function: Function,
        }
        /// Every function callable by name.
        pub static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, function: $function },
            )*
        ];
        /// Names of every callable function.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

functions! {
    "sin" => Function::Sin,
    "cos" => Function::Cos,
}

impl Evaluator<'_> {
    /// Evaluates the argument and applies `function` to it.
    pub fn eval_function_call(&mut self, function: Function, argument: &Expr) -> f64 {
        let argument = self.eval(argument);
        Self::apply_function(function, argument)
    }

    /// Applies a function to a value; trigonometric arguments are radians.
    ///
    /// # Example
    /// ```
    /// use calcline::{ast::Function, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::apply_function(Function::Sin, 0.0), 0.0);
    /// assert_eq!(Evaluator::apply_function(Function::Cos, 0.0), 1.0);
    /// ```
    #[must_use]
    pub fn apply_function(function: Function, argument: f64) -> f64 {
        match function {
            Function::Sin => argument.sin(),
            Function::Cos => argument.cos(),
        }
    }
}
