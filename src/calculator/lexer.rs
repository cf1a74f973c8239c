use std::io::{BufRead, Cursor};

use crate::error::{CalcResult, LexError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5` or `2.1e-10`.
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `rate`.
    Name(String),
    /// Single-character operator tokens.
    Operator(Symbol),
    /// The end of the input source. Terminal: once produced, every further
    /// read produces it again.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Name(name) => write!(f, "{name}"),
            Self::Operator(symbol) => write!(f, "'{symbol}'"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// The operator characters recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Equals,
    /// `;`, the statement separator.
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Symbol {
    /// Maps an input character to its operator, or `None` when the character
    /// is not a recognized operator.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '=' => Some(Self::Equals),
            ';' => Some(Self::Semicolon),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// The character this operator was read from.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Equals => '=',
            Self::Semicolon => ';',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The character source behind a [`TokenStream`].
///
/// A stream either borrows a reader owned by its caller for the stream's
/// whole lifetime, or takes exclusive ownership of one. An owned reader is
/// released when the stream is dropped, on every exit path.
enum Input<'a> {
    Borrowed(&'a mut dyn BufRead),
    Owned(Box<dyn BufRead + 'a>),
}

impl Input<'_> {
    fn reader(&mut self) -> &mut dyn BufRead {
        match self {
            Self::Borrowed(reader) => &mut **reader,
            Self::Owned(reader) => reader.as_mut(),
        }
    }
}

/// A pull-based tokenizer over a character source.
///
/// Tokens are produced one at a time by [`next_token`](Self::next_token),
/// which also caches the produced token as the stream's current token. The
/// grammar uses the cache for one-token lookahead: reading advances state,
/// so a caller that must inspect the same token twice reads once and then
/// consults [`current`](Self::current).
///
/// Input is buffered one line at a time, so interactive sources work and a
/// token is never requested before the evaluator needs it.
pub struct TokenStream<'a> {
    input:   Input<'a>,
    buffer:  String,
    pos:     usize,
    current: Token,
    line:    usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream that borrows `source` for the stream's lifetime.
    pub fn new(source: &'a mut dyn BufRead) -> Self {
        Self::with_input(Input::Borrowed(source))
    }

    /// Creates a stream that takes ownership of `source`, releasing it when
    /// the stream is dropped.
    pub fn from_reader(source: Box<dyn BufRead + 'a>) -> Self {
        Self::with_input(Input::Owned(source))
    }

    /// Creates an owning stream over an in-memory copy of `source`.
    #[must_use]
    pub fn from_source(source: &str) -> TokenStream<'static> {
        TokenStream::from_reader(Box::new(Cursor::new(source.to_owned().into_bytes())))
    }

    fn with_input(input: Input<'a>) -> Self {
        Self { input,
               buffer: String::new(),
               pos: 0,
               current: Token::EndOfInput,
               line: 1 }
    }

    /// The most recently read token. Before the first read this is
    /// [`Token::EndOfInput`]. Repeated calls return the same value; only
    /// [`next_token`](Self::next_token) advances the stream.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The 1-based line number the stream is currently positioned on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Reads the next token from the source and caches it as the current
    /// token.
    ///
    /// # Errors
    /// - [`LexError`](crate::error::LexError) for an unrecognized character
    ///   or a malformed numeric literal; the offending input is consumed so
    ///   the caller can resynchronize, and the cached current token is left
    ///   untouched.
    /// - [`CalcError::Io`](crate::error::CalcError::Io) when the underlying
    ///   reader fails; this is fatal to the session.
    pub fn next_token(&mut self) -> CalcResult<Token> {
        let token = self.scan()?;
        self.current = token.clone();
        Ok(token)
    }

    /// Looks at the next unconsumed character, refilling the line buffer
    /// from the reader when it is exhausted. `None` means end of input.
    fn peek_char(&mut self) -> CalcResult<Option<char>> {
        while self.pos >= self.buffer.len() {
            self.buffer.clear();
            self.pos = 0;
            if self.input.reader().read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
        }
        Ok(self.buffer[self.pos..].chars().next())
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    fn scan(&mut self) -> CalcResult<Token> {
        loop {
            let Some(ch) = self.peek_char()? else {
                return Ok(Token::EndOfInput);
            };

            if ch == '\n' {
                self.line += 1;
                self.bump(ch);
                continue;
            }
            if ch.is_whitespace() {
                self.bump(ch);
                continue;
            }
            if ch.is_ascii_digit() || ch == '.' {
                return self.scan_number();
            }
            if ch.is_ascii_alphabetic() {
                return self.scan_name();
            }

            self.bump(ch);
            return match Symbol::from_char(ch) {
                Some(symbol) => Ok(Token::Operator(symbol)),
                None => Err(LexError::UnrecognizedCharacter { found: ch,
                                                              line:  self.line, }.into()),
            };
        }
    }

    /// Consumes the maximal run of digits and decimal points, then an
    /// optional exponent. The whole run is consumed even when it is
    /// malformed, so error recovery never re-reads part of a bad literal.
    fn scan_number(&mut self) -> CalcResult<Token> {
        let mut literal = String::new();
        let mut dots = 0usize;

        while let Some(ch) = self.peek_char()? {
            if ch.is_ascii_digit() {
                literal.push(ch);
                self.bump(ch);
            } else if ch == '.' {
                dots += 1;
                literal.push(ch);
                self.bump(ch);
            } else {
                break;
            }
        }

        // An exponent marker only belongs to the number when a well-formed
        // exponent actually follows; otherwise `2e` is the number `2`
        // followed by the name `e`.
        if let Some(marker) = self.peek_char()? {
            if (marker == 'e' || marker == 'E') && self.exponent_follows() {
                literal.push(marker);
                self.bump(marker);

                if let Some(sign) = self.peek_char()? {
                    if sign == '+' || sign == '-' {
                        literal.push(sign);
                        self.bump(sign);
                    }
                }
                while let Some(digit) = self.peek_char()? {
                    if digit.is_ascii_digit() {
                        literal.push(digit);
                        self.bump(digit);
                    } else {
                        break;
                    }
                }
            }
        }

        if dots > 1 {
            return Err(LexError::MalformedNumber { literal,
                                                   line: self.line }.into());
        }
        match literal.parse::<f64>() {
            Ok(value) => Ok(Token::Number(value)),
            Err(_) => Err(LexError::MalformedNumber { literal,
                                                      line: self.line }.into()),
        }
    }

    /// Checks, without consuming anything, that the character after the
    /// exponent marker begins a valid exponent: a digit, or a sign followed
    /// by a digit.
    fn exponent_follows(&self) -> bool {
        let mut rest = self.buffer[self.pos..].chars();
        rest.next(); // the marker itself

        match rest.next() {
            Some(ch) if ch.is_ascii_digit() => true,
            Some('+' | '-') => matches!(rest.next(), Some(digit) if digit.is_ascii_digit()),
            _ => false,
        }
    }

    fn scan_name(&mut self) -> CalcResult<Token> {
        let mut name = String::new();
        while let Some(ch) = self.peek_char()? {
            if ch.is_ascii_alphanumeric() {
                name.push(ch);
                self.bump(ch);
            } else {
                break;
            }
        }
        Ok(Token::Name(name))
    }
}
