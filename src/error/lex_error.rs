#[derive(Debug)]
/// Represents all errors that can occur while tokenizing input.
pub enum LexError {
    /// Encountered a character that cannot start any token.
    UnrecognizedCharacter {
        /// The offending character.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal was malformed, for example `1.2.3`.
    MalformedNumber {
        /// The literal as it appeared in the input.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unrecognized character '{found}'.")
            },

            Self::MalformedNumber { literal, line } => {
                write!(f, "Error on line {line}: Malformed numeric literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
