use crate::{
    ast::{Expr, Span},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        parser::{binary::parse_additive, grammar::{Grammar, Rule}, session::parse_assignment},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Maximum nesting of parentheses and chained powers in one line.
///
/// Parsing and evaluation both recurse once per level; the limit keeps
/// pathological input from exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// A cursor over the lexemes of one line.
///
/// Besides the lexemes it keeps the line itself, so rules can slice out the
/// text of the tokens they consume, and the offset where the input proper
/// ends (trailing whitespace excluded), which is where an error is reported
/// when a rule runs out of input.
#[derive(Debug)]
pub struct TokenStream<'s> {
    source:   &'s str,
    lexemes:  Vec<Lexeme>,
    position: usize,
    end:      usize,
    depth:    usize,
}

impl<'s> TokenStream<'s> {
    /// Tokenizes `source` and positions the cursor at its first lexeme.
    #[must_use]
    pub fn new(source: &'s str) -> Self {
        Self { source,
               lexemes: tokenize(source),
               position: 0,
               end: source.trim_end_matches([' ', '\t']).len(),
               depth: 0 }
    }

    /// Returns the next lexeme without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Lexeme> {
        self.peek_nth(0)
    }

    /// Returns the lexeme `n` positions ahead without consuming anything.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<&Lexeme> {
        self.lexemes.get(self.position + n)
    }

    /// Returns `true` if the lexeme `n` positions ahead is `token`.
    #[must_use]
    pub fn peek_is(&self, n: usize, token: Token) -> bool {
        self.peek_nth(n).is_some_and(|l| l.token == Some(token))
    }

    /// Consumes and returns the next lexeme.
    pub fn next_lexeme(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.position).copied();
        if lexeme.is_some() {
            self.position += 1;
        }
        lexeme
    }

    /// Consumes the next lexeme if it is `token`.
    pub fn next_if(&mut self, token: Token) -> Option<Lexeme> {
        if self.peek_is(0, token) { self.next_lexeme() } else { None }
    }

    /// All lexemes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &[Lexeme] {
        &self.lexemes[self.position..]
    }

    /// Returns `true` once every lexeme has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.lexemes.len()
    }

    /// The source text covered by `span`.
    #[must_use]
    pub fn slice(&self, span: Span) -> &'s str {
        &self.source[span.offset..span.end()]
    }

    /// Builds the error for `rule` failing at the current position.
    ///
    /// The error starts at the next lexeme, or at the end of the input if
    /// there is none, and covers the rest of the line.
    #[must_use]
    pub fn error(&self, rule: Rule) -> SyntaxError {
        let offset = self.peek().map_or(self.end, |l| l.span.offset);
        SyntaxError::new(rule, offset, self.end.saturating_sub(offset))
    }

    /// Enters one level of nesting on behalf of `rule`.
    ///
    /// # Errors
    /// Fails with an error at `rule` once `MAX_NESTING` levels are open.
    pub fn descend(&mut self, rule: Rule) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(rule));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses an `Expression`: an assignment, or else an algebraic expression.
///
/// Grammar: `expression := assignment | additive`
pub fn parse_expression(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    if let Some(assignment) = parse_assignment(tokens, grammar)? {
        return Ok(assignment);
    }
    parse_additive(tokens, grammar)
}
