use spanson::{loads, Error, JsonMap, LexError, Number, ParseError, Value};

#[test]
fn test_structure_mirrors_input() {
    let doc = loads(
        r#"{
            "user": {"id": 42, "name": "Alice", "active": true},
            "tags": ["admin", "ops"],
            "note": null
        }"#,
    )
    .unwrap();

    let user = doc.get("user").unwrap();
    assert_eq!(user.get("id").and_then(|v| v.as_i64()), Some(42));
    assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
    assert_eq!(user.get("active").and_then(|v| v.as_bool()), Some(true));

    let tags = doc.get("tags").and_then(|v| v.as_array()).unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].as_str(), Some("admin"));
    assert_eq!(tags[1].as_str(), Some("ops"));

    assert!(doc.get("note").unwrap().is_null());
}

#[test]
fn test_object_key_order_preserved() {
    let doc = loads(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    let keys: Vec<_> = doc.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_array_order_preserved() {
    let doc = loads(r#"[3, 1, 4, 1.5, 9]"#).unwrap();
    let values: Vec<_> = doc.as_array().unwrap().iter().cloned().collect();
    assert_eq!(
        values,
        vec![
            Value::from(3),
            Value::from(1),
            Value::from(4),
            Value::from(1.5),
            Value::from(9),
        ]
    );
}

#[test]
fn test_empty_containers() {
    assert_eq!(loads("{}").unwrap(), Value::Object(JsonMap::new()));
    assert_eq!(loads("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(
        loads(r#"{"empty": {}, "list": []}"#).unwrap().get("empty"),
        Some(&Value::Object(JsonMap::new()))
    );
}

#[test]
fn test_duplicate_key_rejected() {
    let err = loads(r#"{"a": 1, "a": 2}"#).unwrap_err();
    assert!(matches!(
        err,
        Error::Parse(ParseError::DuplicateKey { .. })
    ));
}

#[test]
fn test_distinct_keys_accepted() {
    let doc = loads(r#"{"a": 1, "b": 2}"#).unwrap();
    assert_eq!(doc.get("a").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(doc.get("b").and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn test_invalid_true_literal() {
    assert_eq!(
        loads(r#"{"a": tru}"#),
        Err(Error::Lex(LexError::InvalidTrue { offset: 6 }))
    );
}

#[test]
fn test_invalid_null_literal() {
    assert_eq!(
        loads(r#"{"a": nul}"#),
        Err(Error::Lex(LexError::InvalidNull { offset: 6 }))
    );
}

#[test]
fn test_invalid_false_literal() {
    assert!(matches!(
        loads(r#"{"a": fals}"#),
        Err(Error::Lex(LexError::InvalidFalse { .. }))
    ));
}

#[test]
fn test_number_classification_quirk() {
    // Dot present: float.
    assert_eq!(
        loads("[1.5]").unwrap().get_index(0),
        Some(&Value::Number(Number::Float(1.5)))
    );
    // Plain digits: integer.
    assert_eq!(
        loads("[150]").unwrap().get_index(0),
        Some(&Value::Number(Number::Integer(150)))
    );
    // Exponent but no dot: still an integer, value 100. Current semantics,
    // not a bug to fix.
    assert_eq!(
        loads("[1e2]").unwrap().get_index(0),
        Some(&Value::Number(Number::Integer(100)))
    );
    // Dot plus exponent: float.
    assert_eq!(
        loads("[1.5e2]").unwrap().get_index(0),
        Some(&Value::Number(Number::Float(150.0)))
    );
    // Negative forms.
    assert_eq!(
        loads("[-42]").unwrap().get_index(0),
        Some(&Value::Number(Number::Integer(-42)))
    );
    assert_eq!(
        loads("[-0.5]").unwrap().get_index(0),
        Some(&Value::Number(Number::Float(-0.5)))
    );
}

#[test]
fn test_escape_decoding() {
    let doc = loads(r#"{"a": "line\nbreak"}"#).unwrap();
    assert_eq!(doc.get("a").and_then(|v| v.as_str()), Some("line\nbreak"));

    let doc = loads(r#"{"a": "q\"q \\ sl\/ash \t tab"}"#).unwrap();
    assert_eq!(
        doc.get("a").and_then(|v| v.as_str()),
        Some("q\"q \\ sl/ash \t tab")
    );
}

#[test]
fn test_unicode_escape_passthrough() {
    // The \u escape loses its backslash but keeps the hex digits as plain
    // text; no codepoint decoding happens.
    let source = concat!("{\"a\": \"", "\\u", "0041", "\"}");
    let doc = loads(source).unwrap();
    assert_eq!(doc.get("a").and_then(|v| v.as_str()), Some("u0041"));
}

#[test]
fn test_structural_error_unclosed_array() {
    assert!(matches!(
        loads("[1,2"),
        Err(Error::Parse(ParseError::UnexpectedEnd { .. }))
    ));
}

#[test]
fn test_structural_error_bare_scalar() {
    // A single scalar lexes to one token and is rejected as too short.
    assert!(matches!(
        loads("1"),
        Err(Error::Parse(ParseError::TooShort { .. }))
    ));
    // Two scalars are long enough but still not a document.
    assert!(matches!(
        loads("1 2"),
        Err(Error::Parse(ParseError::InvalidDocument { .. }))
    ));
}

#[test]
fn test_invalid_escape_character() {
    assert!(matches!(
        loads(r#"{"a": "\x"}"#),
        Err(Error::Lex(LexError::InvalidEscape { found: 'x', .. }))
    ));
}

#[test]
fn test_invalid_unicode_sequence() {
    // Too few hex digits: the quote and brace fall inside the 4-character
    // window and fail the hex check.
    assert!(matches!(
        loads(r#"{"a": "\u12"}"#),
        Err(Error::Lex(LexError::InvalidUnicode { .. }))
    ));
    assert!(matches!(
        loads(r#"{"a": "\uZZZZ"}"#),
        Err(Error::Lex(LexError::InvalidUnicode { .. }))
    ));
}

#[test]
fn test_unterminated_string() {
    assert!(matches!(
        loads(r#"{"a": "oops"#),
        Err(Error::Lex(LexError::UnterminatedString { .. }))
    ));
}

#[test]
fn test_unterminated_object() {
    assert!(matches!(
        loads(r#"{"a": 1"#),
        Err(Error::Parse(ParseError::UnexpectedEnd { .. }))
    ));
    assert!(matches!(
        loads(r#"{"a":"#),
        Err(Error::Parse(ParseError::UnexpectedEnd { .. }))
    ));
}

#[test]
fn test_missing_colon() {
    assert!(matches!(
        loads(r#"{"a" 1}"#),
        Err(Error::Parse(ParseError::ExpectedColon { .. }))
    ));
}

#[test]
fn test_object_content_must_be_key_or_close() {
    assert!(matches!(
        loads(r#"{42: 1}"#),
        Err(Error::Parse(ParseError::InvalidObjectContent { .. }))
    ));
    assert!(matches!(
        loads(r#"{[1]}"#),
        Err(Error::Parse(ParseError::InvalidObjectContent { .. }))
    ));
}

#[test]
fn test_deeply_nested_document() {
    let source = format!("{}1{}", "[".repeat(64), "]".repeat(64));
    let doc = loads(&source).unwrap();
    let mut value = &doc;
    let mut depth = 0;
    while let Some(inner) = value.get_index(0) {
        value = inner;
        depth += 1;
    }
    assert_eq!(depth, 64);
    assert_eq!(value.as_i64(), Some(1));
}

#[test]
fn test_error_display_carries_context() {
    let err = loads(r#"{"a" 1}"#).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Expected colon"));
    assert!(message.contains("cursor"));
}

#[test]
fn test_decoded_tree_outlives_source() {
    let doc;
    {
        let source = String::from(r#"{"k": "value"}"#);
        doc = loads(&source).unwrap();
    }
    // Strings are materialized eagerly; nothing borrows the source.
    assert_eq!(doc.get("k").and_then(|v| v.as_str()), Some("value"));
}
