use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        lexer::Token,
        literal::is_variable_name,
        parser::{
            binary::parse_additive,
            core::{ParseResult, TokenStream, parse_expression},
            grammar::{Grammar, Rule},
        },
    },
};

/// Parses a whole line against the start rule.
///
/// A line made only of `-` tokens is a header directive; anything else must
/// be a single expression that consumes every token. Leftover input is
/// reported against `Session` at the first unconsumed token.
///
/// Grammar: `session := header | expression`
///
/// # Parameters
/// - `tokens`: Cursor at the start of the line.
/// - `grammar`: The rule table.
///
/// # Returns
/// The AST of the line.
pub fn parse_session(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    if let Some(header) = parse_header(tokens) {
        return Ok(header);
    }

    let expr = parse_expression(tokens, grammar)?;

    if !tokens.is_exhausted() {
        return Err(tokens.error(Rule::Session));
    }

    Ok(expr)
}

/// Parses a header directive, one or more `-` and nothing else.
///
/// Returns `None` without consuming anything if the line is not a header.
fn parse_header(tokens: &mut TokenStream<'_>) -> Option<Expr> {
    let remaining = tokens.remaining();
    let (first, last) = (remaining.first()?, remaining.last()?);

    if !remaining.iter().all(|l| l.token == Some(Token::Minus)) {
        return None;
    }

    let span = first.span.to(last.span);
    let text = tokens.slice(span).to_owned();
    while tokens.next_lexeme().is_some() {}

    Some(Expr::Header { text, span })
}

/// Parses an assignment of the form `name = expression`.
///
/// Assignment needs two tokens of lookahead: a name followed by `=`. When
/// they are not there, nothing is consumed and `Ok(None)` lets the caller
/// fall back to a plain algebraic expression. The right-hand side is an
/// algebraic expression, so `x = y = 1` is rejected.
///
/// Grammar: `assignment := NAME "=" additive`
///
/// # Returns
/// - `Ok(Some(expr))` if an assignment was parsed,
/// - `Ok(None)` if no assignment starts here.
pub fn parse_assignment(tokens: &mut TokenStream<'_>,
                        grammar: &Grammar)
                        -> ParseResult<Option<Expr>> {
    if !(tokens.peek_is(0, Token::Name) && tokens.peek_is(1, Token::Equals)) {
        return Ok(None);
    }

    let Some(name) = tokens.next_lexeme() else {
        return Ok(None);
    };
    tokens.next_lexeme(); // consume '='

    let text = tokens.slice(name.span);
    debug_assert!(is_variable_name(text), "lexer produced a malformed name {text:?}");
    let target = Identifier { name: text.to_owned(),
                              span: name.span, };
    let value = parse_additive(tokens, grammar)?;
    let span = target.span.to(value.span());

    Ok(Some(Expr::Assignment { target,
                               value: Box::new(value),
                               span }))
}
