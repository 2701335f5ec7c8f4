//! String escape decoding.
//!
//! The lexer validates escape sequences but leaves them encoded in the
//! source span; [`unescape`] is the point where a string value is actually
//! materialized. Decoding is a fixed series of whole-string replacement
//! passes applied in order, which reproduces two properties callers rely
//! on:
//!
//! - Each pass observes the output of the previous one, so the decoding is
//!   defined by the replacement *order*, not by a single left-to-right
//!   scan.
//! - `\u` collapses to the literal character `u`; the four hex digits stay
//!   in the output as plain text. Unicode escapes are never resolved to
//!   their codepoint. See [`crate::grammar`].

/// Decodes a raw string span into the string value it denotes.
///
/// `raw` must be a span produced by the lexer's string scan: it includes
/// both delimiting quotes, which are stripped by bounds before the
/// replacement passes run. Total over every lexer-accepted span.
///
/// # Panics
///
/// Panics if `raw` is shorter than two bytes or does not start and end on
/// UTF-8 boundaries; lexer-produced spans always satisfy both.
///
/// # Examples
///
/// ```rust
/// use spanson::unescape;
///
/// assert_eq!(unescape(r#""plain""#), "plain");
/// assert_eq!(unescape(r#""a\nb""#), "a\nb");
/// assert_eq!(unescape(r#""q\"q""#), "q\"q");
/// ```
#[must_use]
pub fn unescape(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    inner
        .replace("\\\\", "\\")
        .replace("\\\"", "\"")
        .replace("\\/", "/")
        .replace("\\b", "\u{0008}")
        .replace("\\f", "\u{000C}")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
        .replace("\\t", "\t")
        .replace("\\u", "u")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        assert_eq!(unescape(r#""hello""#), "hello");
        assert_eq!(unescape(r#""""#), "");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(unescape(r#""line\nbreak""#), "line\nbreak");
        assert_eq!(unescape(r#""tab\there""#), "tab\there");
        assert_eq!(unescape(r#""cr\rlf""#), "cr\rlf");
        assert_eq!(unescape(r#""slash\/ok""#), "slash/ok");
        assert_eq!(unescape(r#""quote\"end""#), "quote\"end");
        assert_eq!(unescape(r#""b\bf\f""#), "b\u{0008}f\u{000C}");
    }

    #[test]
    fn test_backslash_escape() {
        assert_eq!(unescape(r#""a\\b""#), "a\\b");
    }

    #[test]
    fn test_unicode_escape_is_not_decoded() {
        // \uXXXX keeps its hex digits as plain text; only the backslash
        // disappears.
        let raw = concat!("\"", "\\u", "0041", "\"");
        assert_eq!(unescape(raw), "u0041");

        let raw = concat!("\"pre ", "\\u", "00e9", " post\"");
        assert_eq!(unescape(raw), "pre u00e9 post");
    }

    #[test]
    fn test_replacement_order_is_observable() {
        // Source text \\n: the backslash pass collapses \\ to \, and the
        // later \n pass then sees \n and yields a newline. A single-pass
        // decoder would produce a literal backslash followed by n.
        let raw = concat!("\"", "\\\\", "n", "\"");
        assert_eq!(unescape(raw), "\n");
    }

    #[test]
    fn test_quotes_stripped_by_bounds() {
        // Only the outermost pair goes away.
        assert_eq!(unescape(r#""\"inner\"""#), "\"inner\"");
    }
}
