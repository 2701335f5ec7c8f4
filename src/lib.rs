//! # spanson
//!
//! A span-based JSON text decoder.
//!
//! ## How it works
//!
//! Decoding is a strict two-stage pipeline:
//!
//! 1. The [`lexer`] scans the source once, left to right, and produces a
//!    flat sequence of typed tokens. A token is a kind plus a byte span
//!    into the original text — no substring is copied during the scan.
//! 2. The [`parser`] walks the token sequence by recursive descent and
//!    builds the [`Value`] tree bottom-up. String escape decoding and
//!    number parsing happen here, at the moment a value is materialized
//!    from its span.
//!
//! Deferring all decoding to materialization keeps the scan phase free of
//! allocation, which is the point of the span representation. Decoded
//! strings are owned, so the returned tree does not borrow the source.
//!
//! ## Key Properties
//!
//! - **Span tokens**: tokens are `(kind, start, end)` records resolved
//!   against the source on demand
//! - **Atomic decode**: a call returns a complete tree or a single
//!   terminal error; no partial result is ever observable
//! - **Diagnostic context**: parse errors carry the two preceding tokens,
//!   the cursor, and the offending token, so failures can be located in
//!   the original text
//! - **Documented dialect**: the permissive lexing behaviors and the two
//!   materialization quirks are specified and tested, see [`grammar`]
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use spanson::loads;
//!
//! let doc = loads(r#"{"name": "Alice", "scores": [9.5, 8, 10]}"#).unwrap();
//!
//! assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! let scores = doc.get("scores").and_then(|v| v.as_array()).unwrap();
//! assert_eq!(scores.len(), 3);
//! ```
//!
//! ### Inspecting failures
//!
//! ```rust
//! use spanson::{loads, Error, ParseError};
//!
//! let err = loads(r#"{"a": 1, "a": 2}"#).unwrap_err();
//! match err {
//!     Error::Parse(ParseError::DuplicateKey { key, context }) => {
//!         assert_eq!(key, "a");
//!         // context.found spans the offending token in the source.
//!         assert!(context.found.is_some());
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```
//!
//! ### Building values programmatically
//!
//! ```rust
//! use spanson::spanson;
//!
//! let data = spanson!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "json"]
//! });
//! assert_eq!(data.get("age").and_then(|v| v.as_i64()), Some(30));
//! ```
//!
//! ### Driving the stages separately
//!
//! The lexer and parser are public, so each grammar production can be
//! exercised in isolation:
//!
//! ```rust
//! use spanson::{lex, Parser, TokenKind};
//!
//! let source = r#"[null]"#;
//! let tokens = lex(source).unwrap();
//! assert_eq!(tokens[1].kind, TokenKind::Null);
//! let doc = Parser::new(source, tokens).parse().unwrap();
//! assert!(doc.get_index(0).unwrap().is_null());
//! ```
//!
//! ## Dialect
//!
//! The accepted dialect is JSON with a handful of deliberate deviations —
//! lenient scanning of stray bytes, unconditional trailing-comma
//! consumption, dot-based int/float classification, and unicode escapes
//! that are validated but not decoded. They are documented in [`grammar`]
//! and pinned by the test suite.

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod map;
pub mod parser;
pub mod unescape;
pub mod value;

pub use error::{Diagnostic, Error, LexError, ParseError, Result};
pub use lexer::{lex, Token, TokenKind};
pub use map::JsonMap;
pub use parser::Parser;
pub use unescape::unescape;
pub use value::{Number, Value};

use std::io;

/// Decodes a JSON document from a string.
///
/// Equivalent to lexing the full text and parsing the resulting token
/// sequence. The top level must be an object or an array.
///
/// # Examples
///
/// ```rust
/// use spanson::loads;
///
/// let doc = loads(r#"{"x": 1, "y": 2}"#).unwrap();
/// assert_eq!(doc.get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an [`Error`] describing the first problem found; there is no
/// partial result.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads(source: &str) -> Result<Value> {
    let tokens = lex(source)?;
    let value = Parser::new(source, tokens).parse()?;
    Ok(value)
}

/// Decodes a JSON document from bytes.
///
/// The bytes must be valid UTF-8.
///
/// # Examples
///
/// ```rust
/// use spanson::loads_slice;
///
/// let doc = loads_slice(br#"[1, 2, 3]"#).unwrap();
/// assert_eq!(doc.as_array().map(Vec::len), Some(3));
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is not a
/// decodable document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads_slice(bytes: &[u8]) -> Result<Value> {
    let source = std::str::from_utf8(bytes).map_err(|_| LexError::InvalidUtf8)?;
    loads(source)
}

/// Decodes a JSON document from an I/O stream.
///
/// Reads the stream to the end first; decoding is not incremental.
///
/// # Examples
///
/// ```rust
/// use spanson::loads_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(br#"{"ok": true}"#);
/// let doc = loads_reader(cursor).unwrap();
/// assert_eq!(doc.get("ok").and_then(|v| v.as_bool()), Some(true));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text is not a decodable
/// document.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn loads_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| Error::io(&e.to_string()))?;
    loads(&source)
}
