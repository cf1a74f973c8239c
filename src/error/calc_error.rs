use crate::error::{LexError, RuntimeError, SyntaxError};

/// Result type used throughout the calculator.
///
/// All tokenizing, evaluation and session functions return either a value of
/// type `T` or a [`CalcError`] describing the failure.
pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Debug)]
/// Unifies every failure mode of a calculator session.
///
/// The first three variants are recoverable at the statement level: the
/// session reports them and resumes at the next statement separator. An I/O
/// failure of the underlying character source is fatal and ends the session.
pub enum CalcError {
    /// The tokenizer rejected the input.
    Lex(LexError),
    /// The grammar was violated.
    Syntax(SyntaxError),
    /// Evaluation failed.
    Runtime(RuntimeError),
    /// The underlying character source failed.
    Io(std::io::Error),
}

impl CalcError {
    /// Returns `true` when the error terminates the session instead of being
    /// recovered at the next statement separator.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Syntax(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Io(e) => write!(f, "Fatal input error: {e}."),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<SyntaxError> for CalcError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl From<std::io::Error> for CalcError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
