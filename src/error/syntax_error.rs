use crate::{interpreter::parser::grammar::Rule, util::num::column_of};

/// The failure reported when a line does not match the grammar.
///
/// Carries the deepest rule that failed and the span of input where matching
/// stopped. `offset` is a byte offset into the line; `length` is the byte
/// length of the unmatched remainder (zero when the input simply ran out).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    /// The rule that could not be matched.
    pub rule:   Rule,
    /// Byte offset where matching stopped.
    pub offset: usize,
    /// Byte length of the unmatched remainder.
    pub length: usize,
}

impl SyntaxError {
    /// Creates a syntax error for `rule` covering `offset..offset + length`.
    #[must_use]
    pub const fn new(rule: Rule, offset: usize, length: usize) -> Self {
        Self { rule,
               offset,
               length }
    }

    /// Returns the name of the failing rule, e.g. `"Atom"`.
    #[must_use]
    pub const fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Renders a caret diagnostic for this error.
    ///
    /// The first line points at the failing span of `source`, assuming the
    /// source itself was echoed after a two-character prompt such as `"> "`:
    /// one `~` per character of the span followed by a `^`. The second line
    /// names the rule.
    ///
    /// # Example
    /// ```
    /// use calcline::Session;
    ///
    /// let mut session = Session::new();
    /// let error = session.evaluate("1 + ").unwrap_err();
    ///
    /// assert_eq!(error.render("1 + "),
    ///            "     ^\n  Syntax error while parsing Atom");
    /// ```
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let start = column_of(source, self.offset);
        let end = column_of(source, self.offset + self.length);

        format!("  {}{}^\n  Syntax error while parsing {}",
                " ".repeat(start),
                "~".repeat(end.saturating_sub(start)),
                self.rule)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Syntax error while parsing {} at offset {}.",
               self.rule, self.offset)
    }
}

impl std::error::Error for SyntaxError {}
