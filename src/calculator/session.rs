use std::io::{BufRead, Write};

use crate::{
    calculator::{
        evaluator,
        lexer::{Symbol, Token, TokenStream},
        symbols::SymbolTable,
    },
    error::{CalcError, CalcResult, SyntaxError},
};

/// One run of the calculator over an input stream.
///
/// A session owns a [`TokenStream`] and a [`SymbolTable`]; the table is
/// shared by all statements of the session, so an assignment in one
/// statement is visible to every later one. Statements have the form
/// `expression ;` and are evaluated strictly in order, one at a time.
///
/// Recoverable errors (lexical, syntax, division by zero) are reported per
/// statement: the session discards input through the next `;` and carries
/// on. Only an I/O failure of the character source ends the session early.
///
/// # Example
/// ```
/// use deskcalc::calculator::session::Session;
///
/// let mut session = Session::from_source("x = 5; x + 2;");
/// assert!(matches!(session.evaluate_next(), Some(Ok(v)) if v == 5.0));
/// assert!(matches!(session.evaluate_next(), Some(Ok(v)) if v == 7.0));
/// assert!(session.evaluate_next().is_none());
/// ```
pub struct Session<'a> {
    stream:   TokenStream<'a>,
    table:    SymbolTable,
    finished: bool,
}

impl<'a> Session<'a> {
    /// Creates a session that borrows its character source.
    pub fn new(source: &'a mut dyn BufRead) -> Self {
        Self::with_stream(TokenStream::new(source))
    }

    /// Creates a session that owns its character source; the reader is
    /// released when the session is dropped.
    pub fn from_reader(source: Box<dyn BufRead + 'a>) -> Self {
        Self::with_stream(TokenStream::from_reader(source))
    }

    /// Creates a session over an in-memory copy of `source`.
    #[must_use]
    pub fn from_source(source: &str) -> Session<'static> {
        Session::with_stream(TokenStream::from_source(source))
    }

    fn with_stream(stream: TokenStream<'a>) -> Self {
        Self { stream,
               table: SymbolTable::new(),
               finished: false }
    }

    /// The session's variable state.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.table
    }

    /// Evaluates the next statement.
    ///
    /// Returns `None` once end of input is reached (or after a fatal error),
    /// and otherwise the statement's outcome. Empty statements (stray `;`)
    /// are skipped. When the outcome is a recoverable error, the input has
    /// already been resynchronized to the next statement separator, so the
    /// following call picks up cleanly.
    pub fn evaluate_next(&mut self) -> Option<CalcResult<f64>> {
        if self.finished {
            return None;
        }

        // Find the first token of the statement.
        loop {
            match self.stream.next_token() {
                Ok(Token::EndOfInput) => {
                    self.finished = true;
                    return None;
                },
                Ok(Token::Operator(Symbol::Semicolon)) => continue,
                Ok(_) => break,
                Err(error) => return Some(self.recover_from(error)),
            }
        }

        match evaluator::expression(&mut self.stream, &mut self.table, false) {
            Ok(value) => match self.stream.current() {
                Token::Operator(Symbol::Semicolon) | Token::EndOfInput => Some(Ok(value)),
                trailing => {
                    let error = SyntaxError::UnexpectedTrailingTokens { token: trailing.to_string(),
                                                                       line:  self.stream.line(), };
                    Some(self.recover_from(error.into()))
                },
            },
            Err(error) => Some(self.recover_from(error)),
        }
    }

    /// Discards tokens through the next statement separator (or end of
    /// input), then reports `error`. Lexical errors hit while skipping are
    /// swallowed; a fatal error ends the session instead.
    fn recover_from(&mut self, error: CalcError) -> CalcResult<f64> {
        if error.is_fatal() {
            self.finished = true;
            return Err(error);
        }

        // After a lexical error the last read failed, so the cached current
        // token still belongs to earlier input; the stream must advance at
        // least once before the separator check is meaningful again.
        let mut advance = matches!(error, CalcError::Lex(_));

        loop {
            if !advance
               && matches!(self.stream.current(),
                           Token::Operator(Symbol::Semicolon) | Token::EndOfInput)
            {
                break;
            }
            match self.stream.next_token() {
                Ok(_) => advance = false,
                Err(skipped) if skipped.is_fatal() => {
                    self.finished = true;
                    return Err(skipped);
                },
                Err(_) => advance = true,
            }
        }

        Err(error)
    }

    /// Drives the session to completion.
    ///
    /// Each statement's result is written to `out` on its own line, in the
    /// default floating-point formatting. Recoverable errors are written to
    /// `err` and evaluation continues with the next statement.
    ///
    /// # Errors
    /// Returns the first fatal error: an I/O failure of the input source or
    /// of either writer.
    pub fn run<O: Write, E: Write>(&mut self, out: &mut O, err: &mut E) -> CalcResult<()> {
        while let Some(outcome) = self.evaluate_next() {
            match outcome {
                Ok(value) => writeln!(out, "{value}")?,
                Err(error) => {
                    if error.is_fatal() {
                        return Err(error);
                    }
                    writeln!(err, "{error}")?;
                },
            }
        }
        Ok(())
    }
}
