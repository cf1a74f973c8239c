//! # deskcalc
//!
//! deskcalc is a minimal desk calculator written in Rust. It evaluates
//! statements of the form `expression ;` over the operators `+ - * /`, with
//! parentheses, unary minus, and named variables that persist for the whole
//! session. Expressions are evaluated directly from the token stream; no
//! syntax tree is built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{calculator::session::Session, error::CalcResult};

/// Orchestrates the evaluation of calculator input.
///
/// This module ties together the tokenizer, the recursive-descent
/// evaluator, the symbol table, and the statement-level session driver. It
/// exposes the types used to evaluate interactive, file-backed, or
/// in-memory input.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, evaluator, symbols, session.
/// - Provides entry points for evaluating statements one at a time or
///   driving a whole input stream to completion.
/// - Manages statement-level error recovery.
pub mod calculator;
/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while a session runs.
/// It standardizes error reporting and carries the source line of each
/// failure for diagnostics.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, grammar, runtime).
/// - Attaches line numbers and detailed messages for context.
/// - Distinguishes recoverable statement-level errors from fatal I/O
///   failures.
pub mod error;

/// Evaluates every statement in `source` and returns the outcomes in order.
///
/// Each element is one statement's result, or the error that statement
/// failed with. A failed statement does not stop the session: evaluation
/// resumes at the next `;`, and assignments made by earlier statements stay
/// visible.
///
/// # Examples
/// ```
/// use deskcalc::evaluate_script;
///
/// let outcomes = evaluate_script("x = 5; x + 2;");
/// assert!(matches!(outcomes[0], Ok(v) if v == 5.0));
/// assert!(matches!(outcomes[1], Ok(v) if v == 7.0));
///
/// // Division by zero is reported, and the session keeps going.
/// let outcomes = evaluate_script("1 / 0; 2 + 2;");
/// assert!(outcomes[0].is_err());
/// assert!(matches!(outcomes[1], Ok(v) if v == 4.0));
/// ```
#[must_use]
pub fn evaluate_script(source: &str) -> Vec<CalcResult<f64>> {
    let mut session = Session::from_source(source);
    let mut outcomes = Vec::new();

    while let Some(outcome) = session.evaluate_next() {
        outcomes.push(outcome);
    }

    outcomes
}
