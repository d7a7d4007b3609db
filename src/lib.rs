//! # serde_jsonkit
//!
//! A Serde-compatible JSON codec producing indented, human-readable text,
//! with small file-level helpers for loading and saving configuration files.
//!
//! ## Key Features
//!
//! - **Readable Output**: Four spaces per nesting level, `": "` after every
//!   label, struct fields in declared order, map keys sorted
//! - **Strict Decoding**: Type mismatches and numeric overflow are errors,
//!   never silent coercions
//! - **Forward Compatible**: Unknown labels are skipped; missing labels keep
//!   their `Default` value on `#[serde(default)]` records
//! - **Precise Errors**: Every decode error reports its line and column
//! - **File Store**: [`store::load`] and [`store::save`] read and write whole
//!   files through the codec
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_jsonkit::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let json = to_string(&user).unwrap();
//! assert_eq!(
//!     json,
//!     "{\n    \"id\": 123,\n    \"name\": \"Alice\",\n    \"active\": true\n}"
//! );
//!
//! let user_back: User = from_str(&json).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Optional and Missing Fields
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_jsonkit::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
//! #[serde(default)]
//! struct Address {
//!     street: String,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     zip: Option<String>,
//! }
//!
//! let json = to_string(&Address { street: "Main".into(), zip: None }).unwrap();
//! assert!(!json.contains("zip"));
//!
//! let address: Address = from_str(r#"{"country": "NL"}"#).unwrap();
//! assert_eq!(address, Address::default());
//! ```
//!
//! ### Dynamic Values with json! Macro
//!
//! ```rust
//! use serde_jsonkit::{json, JsonValue};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let JsonValue::Object(obj) = data {
//!     assert_eq!(obj.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Error Categories
//!
//! Every [`Error`] belongs to one [`Category`]: `Io` for file and stream
//! failures, `Encode` for values JSON cannot represent (NaN, cyclic data
//! caught by the depth limit), and `Decode` for malformed text or values
//! that do not fit their target type.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`config_file.rs`** - Load, modify and save a configuration file
//! - **`encoding.rs`** - Maps, records and optional nested records
//! - **`decoding.rs`** - Decoding the same shapes, plus error reporting
//! - **`dynamic_values.rs`** - Working with `JsonValue` dynamically
//! - **`custom_options.rs`** - Indentation, compact output and key order
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod records;
pub mod ser;
pub mod store;
pub mod value;

pub use de::Deserializer;
pub use error::{Category, Error, Result};
pub use map::JsonMap;
pub use options::{Indent, JsonOptions};
pub use records::{Config, Window};
pub use ser::{JsonValueSerializer, Serializer};
pub use value::{JsonValue, Number};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io;

/// Serialize any `T: Serialize` to an indented JSON string.
///
/// Uses four spaces per level and no trailing newline.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let json = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
/// ```
///
/// # Errors
///
/// Returns an encode error if the value contains NaN or infinite floats,
/// map keys that are not scalars, or nesting deeper than the depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a single-line JSON string without
/// whitespace.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::to_string_compact;
///
/// let json = to_string_compact(&vec![1, 2, 3]).unwrap();
/// assert_eq!(json, "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_compact<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::compact())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{to_string_with_options, JsonOptions};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = JsonOptions::new().with_tabs();
/// let json = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
/// assert_eq!(json, "{\n\t\"x\": 1,\n\t\"y\": 2\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    serializer.serialize(value)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a `JsonValue`.
///
/// Map keys are sorted, as in text output; struct fields keep declared order.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{to_value, JsonValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: JsonValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<JsonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(JsonValueSerializer::default())
}

/// Serialize any `T: Serialize` as indented JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![true, false]).unwrap();
/// assert_eq!(buffer, b"[\n    true,\n    false\n]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, JsonOptions::default())
}

/// Serialize any `T: Serialize` into a writer with custom options.
///
/// Nothing is written when encoding fails.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: JsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// Unknown object members are skipped. Only whitespace may follow the value.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str(r#"{"x": 1, "y": 2, "z": 3}"#).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a decode error if the input is not well-formed JSON or does not
/// match type `T`. Error messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    let value = T::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// The stream is read to its end before decoding.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(br#"{"x": 1, "y": 2}"#);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an I/O error if reading fails (including invalid UTF-8), or a
/// decode error if the text does not match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::from_slice;
///
/// let numbers: Vec<u8> = from_slice(b"[1, 2, 3]").unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns a decode error if the bytes are not valid UTF-8, not valid JSON,
/// or cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v)
        .map_err(|e| Error::custom(format!("input is not valid UTF-8: {}", e)))?;
    from_str(s)
}

/// Deserialize an instance of type `T` from a `JsonValue`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{from_value, json};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(json!({"x": 1, "y": 2})).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns a decode error if the value does not match type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: JsonValue) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let json = to_string(&point).unwrap();
        let point_back: Point = from_str(&json).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let json = to_string(&alice()).unwrap();
        assert_eq!(
            json,
            "{\n    \"id\": 123,\n    \"name\": \"Alice\",\n    \"active\": true,\n    \"tags\": [\n        \"admin\",\n        \"user\"\n    ]\n}"
        );
        let user_back: User = from_str(&json).unwrap();
        assert_eq!(user_back, alice());
    }

    #[test]
    fn test_compact() {
        let json = to_string_compact(&alice()).unwrap();
        assert_eq!(
            json,
            r#"{"id":123,"name":"Alice","active":true,"tags":["admin","user"]}"#
        );
        let user_back: User = from_str(&json).unwrap();
        assert_eq!(user_back, alice());
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            JsonValue::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&JsonValue::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&JsonValue::Number(Number::Integer(2))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_from_value_roundtrip() {
        let value = to_value(&alice()).unwrap();
        let user: User = from_value(value).unwrap();
        assert_eq!(user, alice());
    }

    #[test]
    fn test_map_keys_sorted() {
        let mut fruit = HashMap::new();
        fruit.insert("pear", 3);
        fruit.insert("apple", 5);
        fruit.insert("banana", 1);

        let json = to_string(&fruit).unwrap();
        assert_eq!(
            json,
            "{\n    \"apple\": 5,\n    \"banana\": 1,\n    \"pear\": 3\n}"
        );
    }

    #[test]
    fn test_writer_untouched_on_encode_error() {
        let mut buffer = Vec::new();
        let err = to_writer(&mut buffer, &vec![1.0, f64::NAN]).unwrap_err();
        assert!(err.is_encode());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = from_slice::<String>(b"\"\xff\"").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_from_reader() {
        let reader = io::Cursor::new("[1, 2, 3]");
        let numbers: Vec<i64> = from_reader(reader).unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
