//! A strict parser for scalar JSON documents.
//!
//! The accepted grammar is the scalar subset of [RFC 8259]: a single `null`,
//! `true`, `false` or number, optionally surrounded by whitespace. Parsing
//! never allocates and never panics on malformed input; every failure is
//! reported as a [`ParserError`] carrying an [`ErrorKind`] and a position.
//!
//! ```rust
//! use scalarjson::{ErrorKind, Value, parse};
//!
//! assert_eq!(parse(" -1.5E-3 ").unwrap(), Value::Number(-0.0015));
//! assert_eq!(parse("0123").unwrap_err().kind(), ErrorKind::InvalidValue);
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseStatus, ParserError};
pub use options::ParserOptions;
pub use parser::{
    Parser, parse, parse_status, parse_status_with_options, parse_with_options,
};
pub use value::{Value, ValueType};
