use logos::Logos;

use crate::ast::Span;

/// Represents a lexical token in a calculator line.
///
/// Literal tokens only record their kind; the matched text is sliced from the
/// line by span when the parser builds a node. Longest match decides between
/// overlapping patterns, so `0x1A` is one hexadecimal token rather than `0`
/// followed by a name, and `101b` is one binary token rather than `101`
/// followed by `b`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Hexadecimal literal tokens, such as `0x1A`.
    #[regex(r"0x[0-9a-fA-F]+")]
    Hexadecimal,
    /// Binary literal tokens, such as `101b`.
    #[regex(r"[01]+b")]
    Binary,
    /// Unsigned decimal literal tokens, such as `3` or `2.5`. A leading `-` is
    /// attached by the parser.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Decimal,
    /// Names of variables and functions, such as `x` or `sin`.
    #[regex(r"[a-zA-Z]+")]
    Name,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A token together with its location.
///
/// `token` is `None` for input no pattern recognizes. Unrecognized input is
/// not rejected during lexing; the parser reports it against whichever rule
/// was expecting a token at that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    /// The recognized token, if any.
    pub token: Option<Token>,
    /// Byte span in the line.
    pub span:  Span,
}

/// Splits a line into lexemes.
///
/// Spaces and tabs are skipped; every other byte ends up inside exactly one
/// lexeme.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("x = 0x1A").into_iter().map(|l| l.token).collect();
/// assert_eq!(tokens,
///            [Some(Token::Name), Some(Token::Equals), Some(Token::Hexadecimal)]);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Lexeme> {
    let mut lexer = Token::lexer(line);
    let mut lexemes = Vec::new();

    while let Some(token) = lexer.next() {
        lexemes.push(Lexeme { token: token.ok(),
                              span:  Span::from_range(&lexer.span()), });
    }

    lexemes
}
