use core::fmt;

use thiserror::Error;

/// Why a document was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A literal or number did not match the grammar.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was followed by more non-whitespace input.
    #[error("root value is not singular")]
    RootNotSingular,
    /// A number's magnitude does not fit in an `f64`.
    #[error("number too big")]
    NumberTooBig,
}

/// A parse failure and where in the input it happened.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct ParserError {
    pub(crate) kind: ErrorKind,
    /// Byte offset of the failure.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure, counted in chars.
    pub column: usize,
}

impl ParserError {
    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Status code of a parse, for callers that prefer a flat result.
///
/// Every variant other than [`ParseStatus::Ok`] mirrors an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseStatus {
    /// The document parsed.
    Ok,
    /// See [`ErrorKind::ExpectValue`].
    ExpectValue,
    /// See [`ErrorKind::InvalidValue`].
    InvalidValue,
    /// See [`ErrorKind::RootNotSingular`].
    RootNotSingular,
    /// See [`ErrorKind::NumberTooBig`].
    NumberTooBig,
}

impl ParseStatus {
    /// Returns `true` for [`ParseStatus::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ErrorKind> for ParseStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpectValue => Self::ExpectValue,
            ErrorKind::InvalidValue => Self::InvalidValue,
            ErrorKind::RootNotSingular => Self::RootNotSingular,
            ErrorKind::NumberTooBig => Self::NumberTooBig,
        }
    }
}

impl<T> From<&Result<T, ParserError>> for ParseStatus {
    fn from(result: &Result<T, ParserError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.kind.into(),
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ok => "ok",
            Self::ExpectValue => "expect value",
            Self::InvalidValue => "invalid value",
            Self::RootNotSingular => "root not singular",
            Self::NumberTooBig => "number too big",
        })
    }
}
