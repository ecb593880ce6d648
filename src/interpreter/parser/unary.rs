use crate::{
    ast::{Expr, Function, Span},
    interpreter::{
        lexer::{Lexeme, Token},
        literal::{
            LiteralResult, is_variable_name, parse_binary, parse_decimal, parse_hexadecimal,
        },
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            grammar::{Grammar, Rule},
        },
    },
};

/// Parses a signed atom: a function call, or else an atom.
///
/// A name registered as a function only starts a call when it is directly
/// followed by `(`; `sin + 1` reads `sin` as a variable.
///
/// Grammar:
/// ```text
///     signed_atom := function_call | atom
/// ```
pub(crate) fn parse_signed_atom(tokens: &mut TokenStream<'_>,
                                grammar: &Grammar)
                                -> ParseResult<Expr> {
    if let Some(function) = peek_function(tokens, grammar) {
        return parse_function_call(tokens, grammar, function);
    }
    parse_atom(tokens, grammar)
}

/// Parses an atom.
///
/// Atoms are the operands of the grammar:
/// - numeric literals (hexadecimal, binary, decimal),
/// - a `-` glued to a decimal literal, which makes the literal negative,
/// - variable names,
/// - parenthesized expressions.
///
/// Grammar (simplified):
/// ```text
///     atom := number
///           | NAME
///           | "(" expression ")"
/// ```
/// # Errors
/// Any other token, unrecognized input or the end of the line is reported
/// against `Atom`.
fn parse_atom(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    let Some(lexeme) = tokens.peek().copied() else {
        return Err(tokens.error(Rule::Atom));
    };

    match lexeme.token {
        Some(Token::Hexadecimal | Token::Binary | Token::Decimal) => parse_number(tokens),
        Some(Token::Minus) if is_sign(tokens, &lexeme) => parse_number(tokens),
        Some(Token::Name) => {
            tokens.next_lexeme();
            let name = tokens.slice(lexeme.span);
            debug_assert!(is_variable_name(name), "lexer produced a malformed name {name:?}");
            Ok(Expr::Variable { name: name.to_owned(),
                                span: lexeme.span, })
        },
        Some(Token::LParen) => parse_parenthesized(tokens, grammar),
        _ => Err(tokens.error(Rule::Atom)),
    }
}

/// Parses a function call such as `sin(x)`.
///
/// The argument is a full parenthesized expression and is kept as a
/// `Parenthesized` node.
///
/// Grammar: `function_call := ("sin" | "cos") parenthesized`
fn parse_function_call(tokens: &mut TokenStream<'_>,
                       grammar: &Grammar,
                       function: Function)
                       -> ParseResult<Expr> {
    let Some(name) = tokens.next_lexeme() else {
        return Err(tokens.error(Rule::FunctionExpression));
    };
    let argument = parse_parenthesized(tokens, grammar)?;
    let span = name.span.to(argument.span());

    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument),
                            span })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`. The inner expression may be an
/// assignment, so `(x = 2) * x` binds `x` and evaluates to 4.
///
/// Grammar `parenthesized := "(" expression ")"`
///
/// # Errors
/// A missing `(` or `)` is reported against `Parenthesized`, as is nesting
/// deeper than `MAX_NESTING`.
fn parse_parenthesized(tokens: &mut TokenStream<'_>, grammar: &Grammar) -> ParseResult<Expr> {
    let Some(open) = tokens.next_if(Token::LParen) else {
        return Err(tokens.error(Rule::Parenthesized));
    };

    tokens.descend(Rule::Parenthesized)?;
    let expr = parse_expression(tokens, grammar)?;
    tokens.ascend();

    let Some(close) = tokens.next_if(Token::RParen) else {
        return Err(tokens.error(Rule::Parenthesized));
    };

    Ok(Expr::Parenthesized { expr: Box::new(expr),
                             span: open.span.to(close.span), })
}

/// Parses a numeric literal.
///
/// Supported forms:
/// - `0x1A`  hexadecimal
/// - `101b`  binary
/// - `42`, `2.5`, `-7`  decimal, the sign glued to the digits
///
/// The literal's text is converted right away so that the AST carries its
/// value.
///
/// # Errors
/// A `-` that is not followed by digits is reported against
/// `DecimalLiteral`.
fn parse_number(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(lexeme) = tokens.next_lexeme() else {
        return Err(tokens.error(Rule::Number));
    };

    match lexeme.token {
        Some(Token::Hexadecimal) => {
            let (text, value) = convert(tokens, Rule::HexLiteral, lexeme.span, parse_hexadecimal);
            Ok(Expr::HexLiteral { text,
                                  value,
                                  span: lexeme.span })
        },
        Some(Token::Binary) => {
            let (text, value) = convert(tokens, Rule::BinaryLiteral, lexeme.span, parse_binary);
            Ok(Expr::BinaryLiteral { text,
                                     value,
                                     span: lexeme.span })
        },
        Some(Token::Decimal) => {
            let (text, value) = convert(tokens, Rule::DecimalLiteral, lexeme.span, parse_decimal);
            Ok(Expr::DecimalLiteral { text,
                                      value,
                                      span: lexeme.span })
        },
        Some(Token::Minus) => {
            let Some(digits) = tokens.next_if(Token::Decimal) else {
                return Err(tokens.error(Rule::DecimalLiteral));
            };
            let span = lexeme.span.to(digits.span);
            let (text, value) = convert(tokens, Rule::DecimalLiteral, span, parse_decimal);
            Ok(Expr::DecimalLiteral { text, value, span })
        },
        _ => unreachable!("parse_number called on a non-number lexeme"),
    }
}

/// Returns the function named at the cursor if a call starts here.
fn peek_function(tokens: &TokenStream<'_>, grammar: &Grammar) -> Option<Function> {
    let name = tokens.peek()
                     .filter(|l| l.token == Some(Token::Name))?;
    if !tokens.peek_is(1, Token::LParen) {
        return None;
    }
    grammar.function(tokens.slice(name.span))
}

/// A `-` is a sign when a decimal literal follows with no space in between.
fn is_sign(tokens: &TokenStream<'_>, minus: &Lexeme) -> bool {
    tokens.peek_nth(1)
          .is_some_and(|next| {
              next.token == Some(Token::Decimal) && next.span.offset == minus.span.end()
          })
}

/// Runs a literal parser over the text of `span`.
///
/// The lexer only produces tokens inside each literal's digit class, so a
/// conversion error means the two disagree and is treated as a bug.
fn convert(tokens: &TokenStream<'_>,
           rule: Rule,
           span: Span,
           parse: fn(&str) -> LiteralResult<f64>)
           -> (String, f64) {
    let text = tokens.slice(span);
    match parse(text) {
        Ok(value) => (text.to_owned(), value),
        Err(e) => unreachable!("lexer produced a malformed {rule} token: {e}"),
    }
}
