use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, TokenStream},
            grammar::{Grammar, Rule},
            unary::parse_signed_atom,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
/// A `-` reached here always follows a complete operand, so it is the
/// subtraction operator; `3 - -2` subtracts a negative literal.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `grammar`: The rule table.
///
/// # Returns
/// An `Expr::BinaryOp` tree folded from the left.
pub fn parse_additive(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens, grammar)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Subtract]) {
        tokens.next_lexeme();
        let right = parse_multiplicative(tokens, grammar)?;
        left = fold(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `grammar`: The rule table.
///
/// # Returns
/// A binary expression tree combining power-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    let mut left = parse_power(tokens, grammar)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Multiply, BinaryOperator::Divide])
    {
        tokens.next_lexeme();
        let right = parse_power(tokens, grammar)?;
        left = fold(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: the exponent is itself a power
/// expression, so `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)` and evaluates to 512.
///
/// The rule is: `power := signed_atom ("^" power)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `grammar`: The rule table.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    let base = parse_signed_atom(tokens, grammar)?;
    if tokens.next_if(Token::Caret).is_none() {
        return Ok(base);
    }

    tokens.descend(Rule::PowerExpression)?;
    let exponent = parse_power(tokens, grammar)?;
    tokens.ascend();

    Ok(fold(base, BinaryOperator::Power, exponent))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use calcline::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Caret),
///            Some(BinaryOperator::Power));
/// assert_eq!(token_to_binary_operator(Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Subtract),
        Token::Star => Some(BinaryOperator::Multiply),
        Token::Slash => Some(BinaryOperator::Divide),
        Token::Caret => Some(BinaryOperator::Power),
        _ => None,
    }
}

/// Returns the operator at the cursor if it is one of `accepted`.
fn peek_operator(tokens: &TokenStream<'_>, accepted: &[BinaryOperator]) -> Option<BinaryOperator> {
    tokens.peek()
          .and_then(|l| l.token)
          .and_then(token_to_binary_operator)
          .filter(|op| accepted.contains(op))
}

fn fold(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    let span = left.span().to(right.span());
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     span }
}
