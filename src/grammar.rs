//! The accepted JSON dialect.
//!
//! This module documents the exact dialect this decoder accepts. The core
//! grammar is standard JSON — objects, arrays, strings, numbers, booleans,
//! null — but the decoder is deliberately permissive in a few places and
//! carries two materialization quirks. All of them are specified behavior,
//! covered by tests, and kept stable; none is a defect to be fixed.
//!
//! # Structure
//!
//! A document is exactly one object or one array. Bare scalars at the top
//! level (`1`, `"a"`, `true`) are rejected with an "Invalid input" error,
//! and inputs that lex to fewer than two tokens are rejected as too short.
//! Tokens remaining after the top-level container closes are ignored.
//!
//! # Permissive behaviors
//!
//! ## Lenient scanning
//!
//! Outside of string, number, and literal spans, the lexer skips any byte
//! it does not recognize — all whitespace, but also any stray byte in any
//! position:
//!
//! ```rust
//! use spanson::loads;
//!
//! // The # bytes never reach the parser.
//! let doc = loads("[1 # 2]").unwrap();
//! assert_eq!(doc.as_array().map(Vec::len), Some(2));
//! ```
//!
//! ## Blanket comma consumption
//!
//! After every parsed value, one directly following comma is consumed
//! unconditionally. The practical consequence is that trailing commas are
//! accepted everywhere a value can end:
//!
//! ```rust
//! use spanson::loads;
//!
//! assert!(loads("[1, 2,]").is_ok());
//! assert!(loads(r#"{"a": 1,}"#).is_ok());
//! ```
//!
//! Commas are never *required*, either — element separation falls out of
//! token adjacency, not comma checking.
//!
//! # Materialization quirks
//!
//! ## Number classification
//!
//! A number span containing a `.` becomes a float; any other span is
//! parsed as a float and truncated to an integer. The decisive check is
//! the dot, not the exponent, so `1e2` is integer `100`:
//!
//! ```rust
//! use spanson::{loads, Number, Value};
//!
//! let doc = loads("[1.5, 150, 1e2]").unwrap();
//! assert_eq!(doc.get_index(0), Some(&Value::Number(Number::Float(1.5))));
//! assert_eq!(doc.get_index(1), Some(&Value::Number(Number::Integer(150))));
//! assert_eq!(doc.get_index(2), Some(&Value::Number(Number::Integer(100))));
//! ```
//!
//! ## Unicode escapes are not decoded
//!
//! `\uXXXX` escapes are validated for hex-digit well-formedness during the
//! scan, but decoding only strips the backslash: the output contains a
//! literal `u` followed by the four hex digits as plain text. An input
//! value written as backslash-u-0041 decodes to the five characters
//! `u0041`, not to `A`.
//!
//! # Strict behaviors
//!
//! The decoder does reject, with a terminal error:
//!
//! - misspelled literals (`tru`, `nul`, `flase`);
//! - unsupported escape characters (backslash followed by anything other
//!   than `" \ / b f n r t u`);
//! - `\u` escapes whose next four characters are not all hex digits;
//! - duplicate keys within one object (checked after escape decoding);
//! - missing colons between key and value;
//! - unterminated strings, objects, and arrays — everywhere the grammar
//!   still expects input when the input ends, the decode fails with an
//!   unterminated-input error.
