//! Working with decoded values dynamically.
//!
//! Run with: cargo run --example dynamic_values

use spanson::{loads, spanson, Value};
use std::error::Error;

/// Recursively counts the scalar leaves of a value tree.
fn count_leaves(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        Value::Object(map) => map.values().map(count_leaves).sum(),
        _ => 1,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let doc = loads(
        r#"{
            "project": "telemetry",
            "sensors": [
                {"id": 1, "readings": [20.5, 21.0, 19.8]},
                {"id": 2, "readings": [18.2]}
            ],
            "calibrated": true
        }"#,
    )?;

    println!("document has {} scalar leaves", count_leaves(&doc));

    // Walk without knowing the schema.
    if let Some(sensors) = doc.get("sensors").and_then(|v| v.as_array()) {
        for sensor in sensors {
            let id = sensor.get("id").and_then(|v| v.as_i64()).unwrap();
            let readings = sensor.get("readings").and_then(|v| v.as_array()).unwrap();
            let sum: f64 = readings.iter().filter_map(|r| r.as_f64()).sum();
            println!(
                "sensor {id}: {} readings, mean {:.2}",
                readings.len(),
                sum / readings.len() as f64
            );
        }
    }

    // The same shapes can be built programmatically.
    let built = spanson!({
        "project": "telemetry",
        "calibrated": true
    });
    assert_eq!(
        built.get("project").and_then(|v| v.as_str()),
        doc.get("project").and_then(|v| v.as_str())
    );
    println!("programmatic value matches decoded value");

    Ok(())
}
