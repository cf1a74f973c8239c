/// Session-level errors.
///
/// Defines the aggregate error type that unifies all failure modes of a
/// calculator session, including the fatal I/O case, together with the
/// result alias used throughout the crate.
pub mod calc_error;
/// Lexical errors.
///
/// Defines all error types that can occur while tokenizing input.
/// Lexical errors include unrecognized characters and malformed numeric
/// literals.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an
/// expression, such as division by zero.
pub mod runtime_error;
/// Syntax errors.
///
/// Contains all error types for grammar violations detected while a
/// statement is being evaluated, such as a missing closing parenthesis or a
/// missing primary expression.
pub mod syntax_error;

pub use calc_error::{CalcError, CalcResult};
pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
