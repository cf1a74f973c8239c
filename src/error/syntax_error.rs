#[derive(Debug)]
/// Represents all grammar violations detected while evaluating a statement.
pub enum SyntaxError {
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A primary expression was expected but something else was found.
    ExpectedPrimary {
        /// The token encountered instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens between the end of an expression and the statement
    /// separator.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedClosingParen { line } => {
                write!(f, "Error on line {line}: ')' expected.")
            },

            Self::ExpectedPrimary { found, line } => {
                write!(f, "Error on line {line}: primary expected, found {found}.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for SyntaxError {}
