//! Basic JSON decoding.
//!
//! Run with: cargo run --example simple

use spanson::loads;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let source = r#"{
        "users": [
            {"id": 42, "name": "Alice Johnson", "email": "alice@example.com"},
            {"id": 43, "name": "Bob Smith", "email": "bob@example.com"}
        ]
    }"#;

    let doc = loads(source)?;

    let users = doc.get("users").and_then(|v| v.as_array()).unwrap();
    println!("Decoded {} users:", users.len());
    for user in users {
        println!(
            "  #{} {} <{}>",
            user.get("id").and_then(|v| v.as_i64()).unwrap(),
            user.get("name").and_then(|v| v.as_str()).unwrap(),
            user.get("email").and_then(|v| v.as_str()).unwrap(),
        );
    }

    // Malformed input produces a single terminal error with context.
    let err = loads(r#"{"id": 1, "id": 2}"#).unwrap_err();
    println!("\nDuplicate key rejected: {err}");

    Ok(())
}
