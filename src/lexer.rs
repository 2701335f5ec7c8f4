//! JSON lexer/tokenizer.
//!
//! Scans the source text left to right in a single pass and produces a flat
//! sequence of [`Token`]s. A token is a (kind, span) pair referencing a byte
//! range of the original input; no text is copied during the scan. String
//! escape decoding and number parsing are deferred until the parser
//! materializes a value from the span.
//!
//! The scan is deliberately lenient outside of token spans: whitespace and
//! any other unrecognized byte is skipped silently rather than rejected.
//! See [`crate::grammar`] for the full dialect description.
//!
//! ## Examples
//!
//! ```rust
//! use spanson::{lex, TokenKind};
//!
//! let tokens = lex(r#"{"a": 1}"#).unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::LeftBrace,
//!         TokenKind::String,
//!         TokenKind::Colon,
//!         TokenKind::Number,
//!         TokenKind::RightBrace,
//!     ]
//! );
//! ```

use crate::error::LexError;

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Quoted string literal, span includes both delimiting quotes
    String,
    /// Maximal run of numeric-set characters; validity is checked at parse
    /// time
    Number,
    /// The literal `true`
    BooleanTrue,
    /// The literal `false`
    BooleanFalse,
    /// The literal `null`
    Null,
}

/// An immutable (kind, span) record referencing a half-open byte range of
/// the source text.
///
/// Invariant: `start <= end <= source.len()`, and both offsets lie on UTF-8
/// boundaries (every span begins and ends at an ASCII byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Resolves this token's span against the source it was lexed from.
    #[inline]
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Span length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span is empty. Lexer-produced tokens never are.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Whitespace bytes: space, backspace, tab, carriage return, newline, form
/// feed.
#[inline]
pub(crate) const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | 0x08 | b'\t' | b'\r' | b'\n' | 0x0C)
}

/// Hex digit bytes: `0-9`, `a-f`, `A-F`.
#[inline]
pub(crate) const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Bytes that may appear in a numeric literal: digits, `.`, `e`, `E`, `+`,
/// `-`.
#[inline]
pub(crate) const fn is_numeric_char(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
}

/// Tokenizes `source` into a flat token sequence.
///
/// Fails on malformed `true`/`false`/`null` spellings, invalid string
/// escapes, invalid unicode escape digits, and strings left open at end of
/// input. Whitespace and stray bytes outside of token spans are skipped
/// silently.
///
/// # Errors
///
/// Returns a [`LexError`] carrying the byte offset of the first problem
/// found.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let bytes = source.as_bytes();
    let total_len = bytes.len();
    let mut tokens = Vec::new();

    let mut i = 0;
    while i < total_len {
        match bytes[i] {
            b'{' => {
                tokens.push(Token {
                    kind: TokenKind::LeftBrace,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b'}' => {
                tokens.push(Token {
                    kind: TokenKind::RightBrace,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b'[' => {
                tokens.push(Token {
                    kind: TokenKind::LeftBracket,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b']' => {
                tokens.push(Token {
                    kind: TokenKind::RightBracket,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b':' => {
                tokens.push(Token {
                    kind: TokenKind::Colon,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b',' => {
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    start: i,
                    end: i + 1,
                });
                i += 1;
            }
            b't' => {
                if bytes.len() < i + 4 || &bytes[i..i + 4] != b"true" {
                    return Err(LexError::InvalidTrue { offset: i });
                }
                tokens.push(Token {
                    kind: TokenKind::BooleanTrue,
                    start: i,
                    end: i + 4,
                });
                i += 4;
            }
            b'f' => {
                if bytes.len() < i + 5 || &bytes[i..i + 5] != b"false" {
                    return Err(LexError::InvalidFalse { offset: i });
                }
                tokens.push(Token {
                    kind: TokenKind::BooleanFalse,
                    start: i,
                    end: i + 5,
                });
                i += 5;
            }
            b'n' => {
                if bytes.len() < i + 4 || &bytes[i..i + 4] != b"null" {
                    return Err(LexError::InvalidNull { offset: i });
                }
                tokens.push(Token {
                    kind: TokenKind::Null,
                    start: i,
                    end: i + 4,
                });
                i += 4;
            }
            b'"' => {
                let end = scan_string(bytes, i)?;
                tokens.push(Token {
                    kind: TokenKind::String,
                    start: i,
                    end,
                });
                i = end;
            }
            b if is_numeric_char(b) => {
                let start = i;
                while i < total_len && is_numeric_char(bytes[i]) {
                    i += 1;
                }
                tokens.push(Token {
                    kind: TokenKind::Number,
                    start,
                    end: i,
                });
            }
            b if is_whitespace(b) => i += 1,
            // Lenient scan: any other byte outside a token span is
            // discarded without a token or an error.
            _ => i += 1,
        }
    }

    Ok(tokens)
}

/// Scans a string literal whose opening quote sits at `start`. Returns the
/// offset just past the closing quote. Escape sequences are validated but
/// not decoded here.
fn scan_string(bytes: &[u8], start: usize) -> Result<usize, LexError> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => return Ok(i + 1),
            b'\\' => {
                let Some(&escaped) = bytes.get(i + 1) else {
                    return Err(LexError::UnterminatedString { start });
                };
                match escaped {
                    b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => i += 2,
                    b'u' => {
                        let hex = bytes
                            .get(i + 2..i + 6)
                            .ok_or(LexError::UnterminatedString { start })?;
                        if !hex.iter().copied().all(is_hex_digit) {
                            return Err(LexError::InvalidUnicode { offset: i });
                        }
                        i += 6;
                    }
                    other => {
                        return Err(LexError::InvalidEscape {
                            offset: i,
                            found: other as char,
                        })
                    }
                }
            }
            _ => i += 1,
        }
    }
    Err(LexError::UnterminatedString { start })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_structural_tokens() {
        assert_eq!(
            kinds("{}[]:,"),
            vec![
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Colon,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            kinds("true false null"),
            vec![
                TokenKind::BooleanTrue,
                TokenKind::BooleanFalse,
                TokenKind::Null,
            ]
        );
    }

    #[test]
    fn test_literal_spans() {
        let tokens = lex("  true").unwrap();
        assert_eq!(tokens[0].start, 2);
        assert_eq!(tokens[0].end, 6);
        assert_eq!(tokens[0].text("  true"), "true");
    }

    #[test]
    fn test_invalid_literals() {
        assert_eq!(lex("tru"), Err(LexError::InvalidTrue { offset: 0 }));
        assert_eq!(lex("fals,"), Err(LexError::InvalidFalse { offset: 0 }));
        assert_eq!(lex("[nul]"), Err(LexError::InvalidNull { offset: 1 }));
    }

    #[test]
    fn test_string_span_includes_quotes() {
        let source = r#" "hello" "#;
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text(source), r#""hello""#);
    }

    #[test]
    fn test_string_escapes_consume_without_decoding() {
        let source = r#""a\"b\\c""#;
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(source), source);
    }

    #[test]
    fn test_unicode_escape_hex_validated_only() {
        let source = r#""\u0041""#;
        let tokens = lex(source).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text(source), source);

        assert_eq!(
            lex(r#""\u12zz""#),
            Err(LexError::InvalidUnicode { offset: 1 })
        );
    }

    #[test]
    fn test_invalid_escape_character() {
        assert_eq!(
            lex(r#""a\x""#),
            Err(LexError::InvalidEscape {
                offset: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            lex(r#""no closing quote"#),
            Err(LexError::UnterminatedString { start: 0 })
        );
        // Dangling backslash at end of input.
        assert_eq!(
            lex("\"abc\\"),
            Err(LexError::UnterminatedString { start: 0 })
        );
        // Truncated \u escape at end of input.
        assert_eq!(
            lex("\"ab\\u12"),
            Err(LexError::UnterminatedString { start: 0 })
        );
    }

    #[test]
    fn test_number_runs() {
        let source = "[1.5, -42, 1e9]";
        let tokens = lex(source).unwrap();
        let numbers: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text(source))
            .collect();
        assert_eq!(numbers, vec!["1.5", "-42", "1e9"]);
    }

    #[test]
    fn test_number_run_is_maximal_and_unvalidated() {
        // The run grabs every numeric-set byte; validity is the parser's
        // problem.
        let source = "1.2.3e+-";
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(source), "1.2.3e+-");
    }

    #[test]
    fn test_number_run_stops_at_end_of_input() {
        let tokens = lex("[150").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].end, 4);
    }

    #[test]
    fn test_whitespace_and_stray_bytes_skipped() {
        assert_eq!(
            kinds(" \t\r\n{ # } "),
            vec![TokenKind::LeftBrace, TokenKind::RightBrace]
        );
        // Multi-byte UTF-8 outside of strings is skipped byte by byte.
        assert_eq!(kinds("é[é]é"), vec![TokenKind::LeftBracket, TokenKind::RightBracket]);
    }

    #[test]
    fn test_span_invariant() {
        let source = r#" {"key": [1.5, true, null], "s": "\t"} "#;
        let tokens = lex(source).unwrap();
        let mut previous_end = 0;
        for token in &tokens {
            assert!(token.start <= token.end);
            assert!(token.end <= source.len());
            // Tokens are ordered and non-overlapping.
            assert!(token.start >= previous_end);
            previous_end = token.end;
        }
    }

    #[test]
    fn test_classification_tables() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(0x0C));
        assert!(!is_whitespace(b'x'));
        assert!(is_hex_digit(b'a') && is_hex_digit(b'F') && is_hex_digit(b'0'));
        assert!(!is_hex_digit(b'g'));
        for b in *b"0123456789.eE+-" {
            assert!(is_numeric_char(b));
        }
        assert!(!is_numeric_char(b'f'));
    }
}
