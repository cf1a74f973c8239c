use crate::{
    calculator::{
        lexer::{Symbol, Token, TokenStream},
        symbols::SymbolTable,
    },
    error::{CalcResult, RuntimeError, SyntaxError},
};

/// Evaluates a full expression.
///
/// This is the entry point of the three-level grammar. It folds a
/// left-associative chain of `+` and `-` over [`term`]:
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// Every level takes an `advance` flag: whether to read the next token
/// before inspecting the stream's current token. A caller that has already
/// read the statement's first token passes `false`; recursive calls that sit
/// on a consumed operator pass `true`.
///
/// # Parameters
/// - `stream`: Token source; left positioned on the first token after the
///   expression.
/// - `table`: Variable state, updated by assignments inside the expression.
/// - `advance`: Whether to read a token before dispatching.
///
/// # Returns
/// The numeric value of the expression.
pub fn expression(stream: &mut TokenStream<'_>,
                  table: &mut SymbolTable,
                  advance: bool)
                  -> CalcResult<f64> {
    let mut left = term(stream, table, advance)?;

    loop {
        match stream.current() {
            Token::Operator(Symbol::Plus) => left += term(stream, table, true)?,
            Token::Operator(Symbol::Minus) => left -= term(stream, table, true)?,
            _ => return Ok(left),
        }
    }
}

/// Evaluates a term.
///
/// Folds a left-associative chain of `*` and `/` over [`primary`], so
/// `8 / 4 / 2` is `(8 / 4) / 2`. A right operand of exactly `0.0` under `/`
/// fails with [`RuntimeError::DivisionByZero`].
///
/// Grammar: `term := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `stream`: Token source.
/// - `table`: Variable state.
/// - `advance`: Whether to read a token before dispatching.
///
/// # Returns
/// The numeric value of the term.
pub fn term(stream: &mut TokenStream<'_>,
            table: &mut SymbolTable,
            advance: bool)
            -> CalcResult<f64> {
    let mut left = primary(stream, table, advance)?;

    loop {
        match stream.current() {
            Token::Operator(Symbol::Star) => left *= primary(stream, table, true)?,
            Token::Operator(Symbol::Slash) => {
                let line = stream.line();
                let divisor = primary(stream, table, true)?;
                if divisor == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line }.into());
                }
                left /= divisor;
            },
            _ => return Ok(left),
        }
    }
}

/// Evaluates a primary, the atomic unit of the grammar.
///
/// Dispatches on the current token:
/// - a number is its own value;
/// - a name followed by `=` assigns the value of the right-hand
///   [`expression`] to it; a bare name yields its current value (`0.0` for a
///   name never assigned);
/// - `-` negates the following primary;
/// - `(` evaluates the enclosed expression and requires a closing `)`,
///   failing with [`SyntaxError::ExpectedClosingParen`] otherwise;
/// - anything else fails with [`SyntaxError::ExpectedPrimary`].
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME ["=" expression]
///              | "-" primary
///              | "(" expression ")"
/// ```
/// After a number the stream is advanced past it, so the caller's next look
/// at the current token sees the token that follows the number. After a bare
/// name the one token of lookahead that ruled out `=` is left as the current
/// token.
///
/// # Parameters
/// - `stream`: Token source.
/// - `table`: Variable state; names are created here on first use.
/// - `advance`: Whether to read a token before dispatching.
///
/// # Returns
/// The numeric value of the primary.
pub fn primary(stream: &mut TokenStream<'_>,
               table: &mut SymbolTable,
               advance: bool)
               -> CalcResult<f64> {
    let token = if advance {
        stream.next_token()?
    } else {
        stream.current().clone()
    };

    match token {
        Token::Number(value) => {
            stream.next_token()?;
            Ok(value)
        },

        Token::Name(name) => {
            if stream.next_token()? == Token::Operator(Symbol::Equals) {
                let value = expression(stream, table, true)?;
                table.assign(&name, value);
                Ok(value)
            } else {
                Ok(table.value_of(&name))
            }
        },

        Token::Operator(Symbol::Minus) => Ok(-primary(stream, table, true)?),

        Token::Operator(Symbol::LParen) => {
            let inner = expression(stream, table, true)?;
            if stream.current() != &Token::Operator(Symbol::RParen) {
                return Err(SyntaxError::ExpectedClosingParen { line: stream.line() }.into());
            }
            stream.next_token()?; // eat ')'
            Ok(inner)
        },

        found => Err(SyntaxError::ExpectedPrimary { found: found.to_string(),
                                                    line:  stream.line(), }.into()),
    }
}
