//! Working with JsonValue for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use serde_jsonkit::{from_str, from_value, json, to_string, to_value, JsonValue};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = json!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging"],
        "debug": true
    });

    println!("Config:\n{}\n", to_string(&config)?);

    if let JsonValue::Object(obj) = &config {
        if let Some(JsonValue::String(host)) = obj.get("host") {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = obj.get("port").and_then(|v| v.as_i64()) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(JsonValue::Array(features)) = obj.get("features") {
            println!("Accessing field 'features': {} items\n", features.len());
        }
    }

    // Text of unknown shape
    let parsed: JsonValue = from_str(r#"{"id": 7, "name": "Bob", "roles": [], "extra": {"a": 1}}"#)?;
    for (key, value) in parsed.as_object().into_iter().flatten() {
        println!("  {} is {}", key, value.kind());
    }

    // And back into a typed record
    let user: User = from_value(parsed)?;
    println!("\n{:?}", user);

    let user_value = to_value(&user)?;
    println!("User as compact text: {}", user_value);

    Ok(())
}
