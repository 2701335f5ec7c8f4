//! Recursive-descent JSON parser.
//!
//! Consumes the token sequence produced by [`crate::lex`] and builds the
//! value tree bottom-up. Each grammar production (value, object, array) has
//! a dedicated method; the parser state is just the source text, the token
//! sequence, and a single cursor index, so productions can be driven and
//! tested in isolation.
//!
//! Strings and numbers are materialized here, not in the lexer: a String
//! token's span goes through [`crate::unescape()`], and a Number token's span
//! is classified by the presence of a `.` — spans with a dot become floats,
//! everything else parses as a float and truncates to an integer.
//!
//! On failure the parser captures a [`Diagnostic`]: the two tokens
//! preceding the cursor, the cursor position, and the offending token.
//!
//! ## Examples
//!
//! ```rust
//! use spanson::{lex, Parser, Value};
//!
//! let source = r#"{"items": [1, 2, 3]}"#;
//! let tokens = lex(source).unwrap();
//! let doc = Parser::new(source, tokens).parse().unwrap();
//! assert_eq!(doc.get("items").and_then(|v| v.as_array()).map(Vec::len), Some(3));
//! ```

use crate::error::{Diagnostic, ParseError};
use crate::lexer::{Token, TokenKind};
use crate::map::JsonMap;
use crate::unescape::unescape;
use crate::value::{Number, Value};

/// Recursive-descent consumer of a token sequence.
///
/// Holds the original source for span resolution. A parser is consumed by
/// [`Parser::parse`]; most callers want [`crate::loads`] instead.
pub struct Parser<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `tokens` as lexed from `source`.
    #[must_use]
    pub fn new(source: &'a str, tokens: Vec<Token>) -> Self {
        Parser {
            source,
            tokens,
            cursor: 0,
        }
    }

    /// Parses the token sequence into a complete value tree.
    ///
    /// The first token must open an object or an array; bare scalars are
    /// rejected at the top level. Tokens remaining after the top-level
    /// container closes are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] carrying the failure context; the tree is
    /// never partially returned.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        if self.tokens.len() < 2 {
            return Err(ParseError::TooShort {
                context: self.diagnostic(),
            });
        }

        match self.tokens[0].kind {
            TokenKind::LeftBrace => {
                self.cursor = 1;
                self.parse_object().map(Value::Object)
            }
            TokenKind::LeftBracket => {
                self.cursor = 1;
                self.parse_array().map(Value::Array)
            }
            _ => Err(ParseError::InvalidDocument {
                context: self.diagnostic(),
            }),
        }
    }

    /// Captures the failure context at the current cursor: up to two
    /// preceding tokens, the cursor index, and the token under the cursor.
    fn diagnostic(&self) -> Diagnostic {
        let lo = self.cursor.saturating_sub(2).min(self.tokens.len());
        let hi = self.cursor.min(self.tokens.len());
        Diagnostic {
            prior: self.tokens[lo..hi].to_vec(),
            cursor: self.cursor,
            found: self.tokens.get(self.cursor).copied(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// The token under the cursor, or `UnexpectedEnd` if the stream is
    /// exhausted where the grammar still expects something.
    fn current(&self) -> Result<Token, ParseError> {
        self.peek().copied().ok_or_else(|| ParseError::UnexpectedEnd {
            context: self.diagnostic(),
        })
    }

    fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }

    /// Parses one value starting at the cursor.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let token = self.current()?;
        let value = match token.kind {
            TokenKind::String => {
                self.cursor += 1;
                Value::String(unescape(self.text(&token)))
            }
            TokenKind::Number => {
                let number = self.materialize_number(&token)?;
                self.cursor += 1;
                Value::Number(number)
            }
            TokenKind::LeftBrace => {
                self.cursor += 1;
                Value::Object(self.parse_object()?)
            }
            TokenKind::LeftBracket => {
                self.cursor += 1;
                Value::Array(self.parse_array()?)
            }
            TokenKind::BooleanTrue => {
                self.cursor += 1;
                Value::Bool(true)
            }
            TokenKind::BooleanFalse => {
                self.cursor += 1;
                Value::Bool(false)
            }
            TokenKind::Null => {
                self.cursor += 1;
                Value::Null
            }
            _ => {
                return Err(ParseError::UnknownToken {
                    context: self.diagnostic(),
                })
            }
        };

        // A comma directly after a freshly produced value is always
        // consumed, regardless of grammar position.
        if matches!(self.peek().map(|t| t.kind), Some(TokenKind::Comma)) {
            self.cursor += 1;
        }

        Ok(value)
    }

    /// Resolves a Number token's span to a numeric value. The int/float
    /// decision keys on a `.` in the source text, so exponent-only forms
    /// like `1e2` truncate to integers.
    fn materialize_number(&self, token: &Token) -> Result<Number, ParseError> {
        let text = self.text(token);
        let as_float: f64 = text.parse().map_err(|_| ParseError::InvalidNumber {
            context: self.diagnostic(),
        })?;
        if text.contains('.') {
            Ok(Number::Float(as_float))
        } else {
            Ok(Number::Integer(as_float as i64))
        }
    }

    /// Parses object members; entered with the cursor just past the `{`.
    fn parse_object(&mut self) -> Result<JsonMap, ParseError> {
        let mut result = JsonMap::new();

        loop {
            let token = self.current()?;
            match token.kind {
                TokenKind::RightBrace => {
                    self.cursor += 1;
                    return Ok(result);
                }
                TokenKind::String => {
                    let key = unescape(self.text(&token));
                    if result.contains_key(&key) {
                        return Err(ParseError::DuplicateKey {
                            key,
                            context: self.diagnostic(),
                        });
                    }
                    self.cursor += 1;

                    if self.current()?.kind != TokenKind::Colon {
                        return Err(ParseError::ExpectedColon {
                            context: self.diagnostic(),
                        });
                    }
                    self.cursor += 1;

                    let value = self.parse_value()?;
                    result.insert(key, value);
                }
                _ => {
                    return Err(ParseError::InvalidObjectContent {
                        context: self.diagnostic(),
                    })
                }
            }
        }
    }

    /// Parses array elements; entered with the cursor just past the `[`.
    fn parse_array(&mut self) -> Result<Vec<Value>, ParseError> {
        let mut result = Vec::new();

        loop {
            let token = self.current()?;
            match token.kind {
                TokenKind::RightBracket => {
                    self.cursor += 1;
                    return Ok(result);
                }
                _ => result.push(self.parse_value()?),
            }
        }
    }
}
