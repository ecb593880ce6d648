/// The environment module stores variable bindings.
///
/// One `Environment` lives for a whole session. Assignments insert or
/// overwrite bindings, header directives clear them, and variable references
/// read them.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST in a fixed left-to-right order, performs
/// the arithmetic and function applications, and applies assignments and
/// resets to the environment.
pub mod evaluator;
/// The lexer module tokenizes a line for the parser.
///
/// Produces literal, name and operator tokens with their byte spans, skipping
/// spaces and tabs.
pub mod lexer;
/// The literal module converts literal tokens to numbers.
///
/// Holds the decimal, hexadecimal and binary converters and the variable-name
/// check.
pub mod literal;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Encodes operator precedence by layering the grammar rules.
/// - Converts tokens into AST nodes carrying source spans.
/// - Reports the failing rule and span when a line does not parse.
pub mod parser;
