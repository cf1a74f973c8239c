/// The evaluator module computes statement results directly from tokens.
///
/// The evaluator implements the three-level recursive-descent grammar
/// (`expression`, `term`, `primary`) and evaluates it on the fly, pulling
/// tokens from the stream as it goes and updating the symbol table when an
/// assignment is seen. No intermediate representation is built.
///
/// # Responsibilities
/// - Evaluates expressions with the usual precedence and left-to-right
///   associativity.
/// - Handles parentheses, unary minus, variable lookup, and assignment.
/// - Reports syntax errors and division by zero with source line info.
pub mod evaluator;
/// The lexer module tokenizes the input character stream on demand.
///
/// The lexer reads characters from an interactive or file-backed source and
/// produces one token per request: numbers, names, single-character
/// operators, and a terminal end-of-input marker. It knows nothing about the
/// grammar.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, one pull at a time.
/// - Caches the most recently read token for grammar lookahead.
/// - Reports lexical errors for unrecognized or malformed input.
pub mod lexer;
/// The session module drives statement-by-statement evaluation.
///
/// A session owns the token stream and the symbol table, evaluates one
/// `expression ;` statement at a time, and recovers from statement-level
/// errors by resynchronizing at the next separator.
///
/// # Responsibilities
/// - Splits the token stream into statements and evaluates each in turn.
/// - Recovers from lexical, syntax and runtime errors; stops on I/O errors.
/// - Writes results and diagnostics for the command-line driver.
pub mod session;
/// The symbols module holds the per-session variable state.
///
/// A single flat table maps identifiers to their current numeric value.
/// Assignments update it in place and the new value is immediately visible
/// to later statements in the same session.
///
/// # Responsibilities
/// - Creates entries on first use, defaulting to `0.0`.
/// - Stores assigned values for the lifetime of the session.
pub mod symbols;
