//! Error types for JSON decoding.
//!
//! Decoding fails in one of two stages, and the error taxonomy mirrors that:
//!
//! - [`LexError`]: the scan rejected a malformed literal spelling, string
//!   escape, or unterminated string. Carries the byte offset of the problem.
//! - [`ParseError`]: the token stream violated the grammar (bad top-level
//!   token, missing colon, duplicate object key, ...). Every variant carries
//!   a [`Diagnostic`] locating the failure in the token stream.
//!
//! Both are terminal: the first error aborts the decode and is returned as
//! the sole result. There is no recovery and no partial value tree.
//!
//! ## Examples
//!
//! ```rust
//! use spanson::{loads, Error};
//!
//! let result = loads(r#"{"a": tru}"#);
//! assert!(matches!(result, Err(Error::Lex(_))));
//!
//! let result = loads(r#"{"a": 1, "a": 2}"#);
//! if let Err(err) = result {
//!     // The message names the duplicate key and the token context.
//!     assert!(err.to_string().contains("Duplicate key"));
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::lexer::Token;

/// Errors produced while scanning source text into tokens.
///
/// Offsets are byte positions into the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A `t` was seen but the following characters do not spell `true`.
    #[error("Invalid true value at byte {offset}")]
    InvalidTrue { offset: usize },

    /// An `f` was seen but the following characters do not spell `false`.
    #[error("Invalid false value at byte {offset}")]
    InvalidFalse { offset: usize },

    /// An `n` was seen but the following characters do not spell `null`.
    #[error("Invalid null value at byte {offset}")]
    InvalidNull { offset: usize },

    /// A backslash inside a string was followed by an unsupported character.
    #[error("Invalid string escaping at byte {offset}: unsupported escape character {found:?}")]
    InvalidEscape { offset: usize, found: char },

    /// A `\u` escape was not followed by exactly four hex digits.
    #[error("Invalid unicode sequence at byte {offset}: expected 4 hex digits")]
    InvalidUnicode { offset: usize },

    /// Input ended before the closing quote of a string.
    #[error("Unterminated string starting at byte {start}")]
    UnterminatedString { start: usize },

    /// The input bytes were not valid UTF-8 (only reachable through
    /// [`crate::loads_slice`]).
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,
}

/// Context captured at the point a parse failure occurred: the tokens
/// immediately preceding the failure (at most two), the cursor position in
/// the token stream, and the offending token itself.
///
/// Token spans let a caller localize the problem in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diagnostic {
    /// Up to two tokens preceding the failure point, in stream order.
    pub prior: Vec<Token>,
    /// Cursor index into the token stream at the time of failure.
    pub cursor: usize,
    /// The token at the failure point, or `None` if input was exhausted.
    pub found: Option<Token>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prior tokens ")?;
        if self.prior.is_empty() {
            write!(f, "[]")?;
        } else {
            write!(f, "[")?;
            for (i, token) in self.prior.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:?} @ {}..{}", token.kind, token.start, token.end)?;
            }
            write!(f, "]")?;
        }
        write!(f, ", cursor {}", self.cursor)?;
        match &self.found {
            Some(token) => write!(f, ", at {:?} @ {}..{}", token.kind, token.start, token.end),
            None => write!(f, ", at end of input"),
        }
    }
}

/// Errors produced while parsing the token stream into a value tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than two tokens: no document can fit.
    #[error("Too short to be valid, {context}")]
    TooShort { context: Diagnostic },

    /// The first token is not `{` or `[`; bare scalars are rejected at the
    /// top level.
    #[error("Invalid input, {context}")]
    InvalidDocument { context: Diagnostic },

    /// A token kind that cannot begin a value appeared in value position.
    #[error("Unknown tokentype, {context}")]
    UnknownToken { context: Diagnostic },

    /// An object key was not followed by a colon.
    #[error("Expected colon, {context}")]
    ExpectedColon { context: Diagnostic },

    /// The same key appeared twice within one object.
    #[error("Duplicate key found: {key:?}, {context}")]
    DuplicateKey { key: String, context: Diagnostic },

    /// A token that is neither a key string nor `}` at object-member
    /// position.
    #[error("Invalid object content, {context}")]
    InvalidObjectContent { context: Diagnostic },

    /// A number token's span did not resolve to a parseable number.
    #[error("Invalid number literal, {context}")]
    InvalidNumber { context: Diagnostic },

    /// The token stream ended inside an unclosed object, array, or member.
    #[error("Unexpected end of input, {context}")]
    UnexpectedEnd { context: Diagnostic },
}

impl ParseError {
    /// The captured failure context.
    #[must_use]
    pub fn context(&self) -> &Diagnostic {
        match self {
            ParseError::TooShort { context }
            | ParseError::InvalidDocument { context }
            | ParseError::UnknownToken { context }
            | ParseError::ExpectedColon { context }
            | ParseError::DuplicateKey { context, .. }
            | ParseError::InvalidObjectContent { context }
            | ParseError::InvalidNumber { context }
            | ParseError::UnexpectedEnd { context } => context,
        }
    }
}

/// Any failure a decode call can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// IO failure while reading input (only reachable through
    /// [`crate::loads_reader`]).
    #[error("IO error: {0}")]
    Io(String),

    /// Failure outside the decode pipeline, e.g. a value conversion.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an error from a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
