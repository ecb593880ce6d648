use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{Expr, Function},
    interpreter::{
        evaluator::function::FUNCTION_TABLE,
        parser::{
            core::{ParseResult, TokenStream},
            session::parse_session,
        },
    },
};

/// The named rules of the calculator grammar.
///
/// Precedence is encoded by layering: each arithmetic rule is built from the
/// next tighter-binding one. Syntax errors name the rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Start rule: a header directive or an expression.
    Session,
    /// One or more `-` characters.
    Header,
    /// An assignment or a plain algebraic expression.
    Expression,
    /// `Variable '=' AlgebraicExpression`.
    Assignment,
    /// Left-associative `+` and `-`.
    AlgebraicExpression,
    /// Left-associative `*` and `/`.
    MultiplyingExpression,
    /// Right-associative `^`.
    PowerExpression,
    /// A function call or an atom.
    SignedAtom,
    /// `sin(...)` or `cos(...)`.
    FunctionExpression,
    /// A number, a variable or a parenthesized expression.
    Atom,
    /// `'(' Expression ')'`.
    Parenthesized,
    /// Any numeric literal.
    Number,
    /// `0x` followed by hex digits.
    HexLiteral,
    /// Binary digits followed by `b`.
    BinaryLiteral,
    /// Optionally signed decimal number.
    DecimalLiteral,
    /// Alphabetic name.
    Variable,
}

impl Rule {
    /// Every rule, outermost first.
    pub const ALL: [Self; 16] = [Self::Session,
                                 Self::Header,
                                 Self::Expression,
                                 Self::Assignment,
                                 Self::AlgebraicExpression,
                                 Self::MultiplyingExpression,
                                 Self::PowerExpression,
                                 Self::SignedAtom,
                                 Self::FunctionExpression,
                                 Self::Atom,
                                 Self::Parenthesized,
                                 Self::Number,
                                 Self::HexLiteral,
                                 Self::BinaryLiteral,
                                 Self::DecimalLiteral,
                                 Self::Variable];

    /// The rule's name as shown in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Header => "Header",
            Self::Expression => "Expression",
            Self::Assignment => "Assignment",
            Self::AlgebraicExpression => "AlgebraicExpression",
            Self::MultiplyingExpression => "MultiplyingExpression",
            Self::PowerExpression => "PowerExpression",
            Self::SignedAtom => "SignedAtom",
            Self::FunctionExpression => "FunctionExpression",
            Self::Atom => "Atom",
            Self::Parenthesized => "Parenthesized",
            Self::Number => "Number",
            Self::HexLiteral => "HexLiteral",
            Self::BinaryLiteral => "BinaryLiteral",
            Self::DecimalLiteral => "DecimalLiteral",
            Self::Variable => "Variable",
        }
    }

    /// The rule's definition in PEG notation.
    #[must_use]
    pub const fn definition(self) -> &'static str {
        match self {
            Self::Session => "Header | Expression",
            Self::Header => "'-'+",
            Self::Expression => "Assignment | AlgebraicExpression",
            Self::Assignment => "Variable '=' AlgebraicExpression",
            Self::AlgebraicExpression => {
                "MultiplyingExpression (('+' | '-') MultiplyingExpression)*"
            },
            Self::MultiplyingExpression => "PowerExpression (('*' | '/') PowerExpression)*",
            Self::PowerExpression => "SignedAtom ('^' PowerExpression)?",
            Self::SignedAtom => "FunctionExpression | Atom",
            Self::FunctionExpression => "('sin' | 'cos') Parenthesized",
            Self::Atom => "Number | Variable | Parenthesized",
            Self::Parenthesized => "'(' Expression ')'",
            Self::Number => "HexLiteral | BinaryLiteral | DecimalLiteral",
            Self::HexLiteral => "'0x' [0-9a-fA-F]+",
            Self::BinaryLiteral => "[01]+ 'b'",
            Self::DecimalLiteral => "'-'? [0-9]+ ('.' [0-9]+)?",
            Self::Variable => "[a-zA-Z]+",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The calculator grammar.
///
/// Built once with [`Grammar::new`] and then only read: every parse borrows
/// it immutably, so one grammar can serve any number of lines and sessions.
/// It registers the rule table and the functions callable by name.
#[derive(Debug, Clone)]
pub struct Grammar {
    functions: HashMap<&'static str, Function>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Builds the grammar with its rule and function tables.
    #[must_use]
    pub fn new() -> Self {
        let functions = FUNCTION_TABLE.iter()
                                      .map(|def| (def.name, def.function))
                                      .collect();
        Self { functions }
    }

    /// The rule every line is matched against.
    #[must_use]
    pub const fn start(&self) -> Rule {
        Rule::Session
    }

    /// Iterates over every registered rule, outermost first.
    pub fn rules(&self) -> impl Iterator<Item = Rule> {
        Rule::ALL.into_iter()
    }

    /// Looks up a callable function by its source name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Function> {
        self.functions.get(name).copied()
    }

    /// Parses one line into an AST.
    ///
    /// The whole line must match the start rule; leftover input is an error.
    ///
    /// # Errors
    /// Returns a `SyntaxError` naming the deepest rule that failed and the
    /// span where matching stopped.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::parser::grammar::{Grammar, Rule};
    ///
    /// let grammar = Grammar::new();
    ///
    /// let tree = grammar.parse("1 + 2 * 3").unwrap();
    /// assert_eq!(tree.to_string(), "(Add 1 (Multiply 2 3))");
    ///
    /// let error = grammar.parse("(1 + 2").unwrap_err();
    /// assert_eq!(error.rule, Rule::Parenthesized);
    /// ```
    pub fn parse(&self, line: &str) -> ParseResult<Expr> {
        let mut tokens = TokenStream::new(line);
        let result = parse_session(&mut tokens, self);

        match &result {
            Ok(expr) => debug!("parsed {line:?} as {expr}"),
            Err(e) => debug!("rejected {line:?}: {e}"),
        }

        result
    }
}
