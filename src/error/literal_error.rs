#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while converting a literal token.
pub enum LiteralError {
    /// The text contains characters outside the literal's digit class.
    ///
    /// The lexer only hands out tokens matching the digit classes, so this
    /// variant marks a defect in the lexer/literal pairing rather than bad
    /// user input.
    InvalidDigits {
        /// The literal text as written in the source.
        text: String,
    },
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDigits { text } => {
                write!(f, "Literal '{text}' contains invalid digits.")
            },
        }
    }
}

impl std::error::Error for LiteralError {}
