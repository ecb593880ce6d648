use std::collections::HashMap;

/// Session-scoped variable store.
///
/// Maps case-sensitive variable names to their current value. An environment
/// lives for one interactive session and is never shared between sessions.
///
/// Only the evaluator mutates it: assignments insert or overwrite a binding
/// and a header directive clears every binding. Everyone else gets read
/// access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns the value bound to `name`, or `0` when `name` is unbound.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::environment::Environment;
    ///
    /// let env = Environment::new();
    /// assert_eq!(env.lookup("x"), 0.0);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings.into_iter()
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub(crate) fn bind(&mut self, name: &str, value: f64) -> Option<f64> {
        self.variables.insert(name.to_owned(), value)
    }

    /// Removes every binding and returns how many there were.
    pub(crate) fn clear(&mut self) -> usize {
        let count = self.variables.len();
        self.variables.clear();
        count
    }
}
