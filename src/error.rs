/// Syntax errors.
///
/// Defines the single error a line can fail with before evaluation: the
/// grammar rule that could not be matched together with the span of input it
/// stopped at. Syntax errors abort one line only; the session carries on.
pub mod syntax_error;
/// Literal conversion errors.
///
/// Raised by the literal parsers when a matched token cannot be turned into a
/// number, either because its value does not fit or because its text does not
/// belong to the literal's digit class.
pub mod literal_error;

pub use literal_error::LiteralError;
pub use syntax_error::SyntaxError;
