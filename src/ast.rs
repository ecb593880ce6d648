/// A byte range in a single input line.
///
/// Spans are measured in bytes from the start of the line. They are attached
/// to every AST node and to syntax errors so that diagnostics can point at the
/// exact piece of input involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset of the first byte.
    pub offset: usize,
    /// Number of bytes covered.
    pub length: usize,
}

impl Span {
    /// Creates a span starting at `offset` covering `length` bytes.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Creates a span from a half-open byte range.
    #[must_use]
    pub const fn from_range(range: &std::ops::Range<usize>) -> Self {
        Self { offset: range.start,
               length: range.end - range.start, }
    }

    /// Byte offset one past the last covered byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Span;
    ///
    /// let left = Span::new(0, 1);
    /// let right = Span::new(4, 3);
    /// assert_eq!(left.to(right), Span::new(0, 7));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        let start = if self.offset < other.offset { self.offset } else { other.offset };
        let end = if self.end() > other.end() { self.end() } else { other.end() };
        Self { offset: start,
               length: end - start, }
    }
}

/// Binary arithmetic operators.
///
/// Precedence is not stored here; it is encoded by the layering of the
/// grammar rules that produce each operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}

impl BinaryOperator {
    /// The kind name used in parse trees and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
            Self::Power => "Power",
        }
    }

    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Power => '^',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Unary functions callable as `name(expression)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine, argument in radians.
    Sin,
    /// Cosine, argument in radians.
    Cos,
}

impl Function {
    /// The kind name used in parse trees.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "Sin",
            Self::Cos => "Cos",
        }
    }
}

/// The name on the left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The variable name exactly as written.
    pub name: String,
    /// Location of the name.
    pub span: Span,
}

/// An abstract syntax tree (AST) node produced by the grammar.
///
/// `Expr` is a closed sum over every node kind the grammar can produce. Each
/// variant owns exactly the children its kind requires, so arity is enforced
/// by construction and the evaluator only has to dispatch on the variant.
/// Leaf variants keep the matched source text; literal variants additionally
/// keep the value the literal parser produced for that text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A decimal literal such as `42`, `-1.5`.
    DecimalLiteral {
        /// Matched text, including a leading `-` if present.
        text:  String,
        /// Converted value.
        value: f64,
        /// Location in the source line.
        span:  Span,
    },
    /// A hexadecimal literal such as `0x1A`.
    HexLiteral {
        /// Matched text, including the `0x` prefix.
        text:  String,
        /// Converted value.
        value: f64,
        /// Location in the source line.
        span:  Span,
    },
    /// A binary literal such as `101b`.
    BinaryLiteral {
        /// Matched text, including the trailing `b`.
        text:  String,
        /// Converted value.
        value: f64,
        /// Location in the source line.
        span:  Span,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Location in the source line.
        span: Span,
    },
    /// `name = expression`.
    Assignment {
        /// The variable being bound.
        target: Identifier,
        /// The bound expression.
        value:  Box<Self>,
        /// Location in the source line.
        span:   Span,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location in the source line.
        span:  Span,
    },
    /// A function applied to a parenthesized argument, e.g. `sin(x)`.
    FunctionCall {
        /// The function being applied.
        function: Function,
        /// The argument, always a [`Expr::Parenthesized`] node.
        argument: Box<Self>,
        /// Location in the source line.
        span:     Span,
    },
    /// `( expression )`.
    Parenthesized {
        /// The enclosed expression.
        expr: Box<Self>,
        /// Location in the source line, including both parentheses.
        span: Span,
    },
    /// A line made only of `-` characters; resets the environment.
    Header {
        /// Matched text.
        text: String,
        /// Location in the source line.
        span: Span,
    },
}

impl Expr {
    /// Returns the source span covered by this node.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::DecimalLiteral { span, .. }
            | Self::HexLiteral { span, .. }
            | Self::BinaryLiteral { span, .. }
            | Self::Variable { span, .. }
            | Self::Assignment { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::FunctionCall { span, .. }
            | Self::Parenthesized { span, .. }
            | Self::Header { span, .. } => *span,
        }
    }

    /// Returns the kind name of this node, e.g. `"Multiply"` or `"Sin"`.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::parser::grammar::Grammar;
    ///
    /// let grammar = Grammar::new();
    /// assert_eq!(grammar.parse("2 * 3").unwrap().rule_name(), "Multiply");
    /// assert_eq!(grammar.parse("cos(1)").unwrap().rule_name(), "Cos");
    /// ```
    #[must_use]
    pub const fn rule_name(&self) -> &'static str {
        match self {
            Self::DecimalLiteral { .. } => "DecimalLiteral",
            Self::HexLiteral { .. } => "HexLiteral",
            Self::BinaryLiteral { .. } => "BinaryLiteral",
            Self::Variable { .. } => "Variable",
            Self::Assignment { .. } => "Assignment",
            Self::BinaryOp { op, .. } => op.name(),
            Self::FunctionCall { function, .. } => function.name(),
            Self::Parenthesized { .. } => "Parenthesized",
            Self::Header { .. } => "Header",
        }
    }
}

/// Formats the tree as an s-expression, leaves as their source text.
///
/// `1 + 2 * 3` is shown as `(Add 1 (Multiply 2 3))`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecimalLiteral { text, .. }
            | Self::HexLiteral { text, .. }
            | Self::BinaryLiteral { text, .. } => write!(f, "{text}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Assignment { target, value, .. } => {
                write!(f, "(Assignment {} {value})", target.name)
            },
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "({} {left} {right})", op.name())
            },
            Self::FunctionCall { function, argument, .. } => {
                write!(f, "({} {argument})", function.name())
            },
            Self::Parenthesized { expr, .. } => write!(f, "(Parenthesized {expr})"),
            Self::Header { text, .. } => write!(f, "(Header {text})"),
        }
    }
}
