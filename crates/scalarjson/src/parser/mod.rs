//! The recursive-descent parser for scalar JSON documents.
//!
//! A parse walks one cursor forward over the input: skip whitespace, dispatch
//! on the first byte of the value, check that the token ends cleanly, skip
//! trailing whitespace, and require end of input.
//!
//! # Examples
//!
//! ```rust
//! use scalarjson::{Parser, ParserOptions, Value};
//!
//! let parser = Parser::new(b"\t1e10\n", ParserOptions::default());
//! assert_eq!(parser.parse(), Ok(Value::Number(1e10)));
//! ```

mod literal;
mod numbers;
mod position;


use self::literal::ExpectedLiteral;
use crate::{ErrorKind, ParseStatus, ParserError, ParserOptions, Value};

/// Parse a scalar JSON document with default options.
///
/// # Errors
///
/// Returns a [`ParserError`] if `input` is not exactly one scalar value,
/// optionally surrounded by whitespace.
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parse a scalar JSON document.
///
/// # Errors
///
/// Returns a [`ParserError`] if `input` is not exactly one scalar value,
/// optionally surrounded by whitespace.
pub fn parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParserError> {
    Parser::new(input.as_ref(), options).parse()
}

/// Parse a scalar JSON document, returning a status code and the value.
///
/// The value is [`Value::Null`] whenever the status is not
/// [`ParseStatus::Ok`].
///
/// ```rust
/// use scalarjson::{ParseStatus, Value, parse_status};
///
/// assert_eq!(parse_status("true"), (ParseStatus::Ok, Value::True));
/// assert_eq!(parse_status("null x"), (ParseStatus::RootNotSingular, Value::Null));
/// ```
#[must_use]
pub fn parse_status(input: impl AsRef<[u8]>) -> (ParseStatus, Value) {
    parse_status_with_options(input, ParserOptions::default())
}

/// Like [`parse_status`], with explicit options.
#[must_use]
pub fn parse_status_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> (ParseStatus, Value) {
    let result = parse_with_options(input, options);
    let status = ParseStatus::from(&result);
    (status, result.unwrap_or_default())
}

/// A single-use parser over an input held entirely in memory.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a [u8], options: ParserOptions) -> Self {
        Self {
            input,
            pos: 0,
            options,
        }
    }

    /// Parse the whole input as one scalar value.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::ExpectValue`] if the input is empty or only whitespace.
    /// - [`ErrorKind::InvalidValue`] if a literal or number is malformed.
    /// - [`ErrorKind::NumberTooBig`] if a number overflows `f64`.
    /// - [`ErrorKind::RootNotSingular`] if anything but whitespace follows
    ///   the value.
    pub fn parse(mut self) -> Result<Value, ParserError> {
        self.skip_whitespace();
        let value = self.parse_value()?;
        self.check_token_end()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error_at(ErrorKind::RootNotSingular, self.pos));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ if self.options.allow_unicode_whitespace => {
                    let (ch, len) = bstr::decode_utf8(&self.input[self.pos..]);
                    match ch {
                        Some(c) if c.is_whitespace() || c == '\u{FEFF}' => self.pos += len,
                        _ => break,
                    }
                }
                _ => break,
            }
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParserError> {
        match self.peek() {
            None => Err(self.error_at(ErrorKind::ExpectValue, self.pos)),
            Some(b) => match ExpectedLiteral::from_first(b) {
                Some(literal) => self.parse_literal(literal),
                None => self.parse_number(),
            },
        }
    }

    fn parse_literal(&mut self, literal: ExpectedLiteral) -> Result<Value, ParserError> {
        match literal.match_prefix(&self.input[self.pos..]) {
            Ok(len) => {
                self.pos += len;
                Ok(literal.value())
            }
            Err(at) => Err(self.error_at(ErrorKind::InvalidValue, self.pos + at)),
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParserError> {
        let start = self.pos;
        let lexeme = numbers::scan(self.input, start)
            .map_err(|at| self.error_at(ErrorKind::InvalidValue, at))?;

        // The validator alone decides where the number ends.
        let end = start + lexeme.as_str().len();
        if end == start {
            return Err(self.error_at(ErrorKind::InvalidValue, start));
        }

        let n = lexeme.to_f64().map_err(|kind| self.error_at(kind, start))?;
        self.pos = end;
        Ok(Value::Number(n))
    }

    /// A token glued to the value (`truee`, `0x1`, `1.5.2`) makes the value
    /// itself malformed rather than a second root.
    fn check_token_end(&self) -> Result<(), ParserError> {
        match self.peek() {
            Some(b) if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-') => {
                Err(self.error_at(ErrorKind::InvalidValue, self.pos))
            }
            _ => Ok(()),
        }
    }

    fn error_at(&self, kind: ErrorKind, offset: usize) -> ParserError {
        let (line, column) = position::locate(self.input, offset);
        let err = ParserError {
            kind,
            offset,
            line,
            column,
        };
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}
