//! Dynamic value representation for JSON data.
//!
//! This module provides the [`JsonValue`] enum which represents any JSON
//! document. It is the shape to decode into when the record layout is not
//! known at compile time.
//!
//! ## Core Types
//!
//! - [`JsonValue`]: null, bool, number, string, array or object
//! - [`Number`]: a signed integer, an unsigned integer above `i64::MAX`, or a float
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_jsonkit::{json, JsonValue};
//!
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! let obj = json!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_jsonkit::{from_value, JsonValue};
//!
//! let value = JsonValue::from(42);
//! assert_eq!(value.as_i64(), Some(42));
//! let num: u8 = from_value(value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ### Converting from Rust Types
//!
//! ```rust
//! use serde_jsonkit::{to_value, JsonValue};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value: JsonValue = to_value(&Point { x: 10, y: 20 }).unwrap();
//! if let JsonValue::Object(obj) = value {
//!     assert_eq!(obj.len(), 2);
//! }
//! ```

use crate::ser::write_value;
use crate::{JsonMap, JsonOptions};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any JSON value.
///
/// Objects keep their members in insertion order (see [`JsonMap`]).
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{JsonValue, Number};
///
/// let num = JsonValue::Number(Number::Integer(42));
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(JsonValue::Null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

/// A JSON number.
///
/// Integer literals decode to `Integer` when they fit in `i64` and to
/// `Unsigned` when they only fit in `u64`. Anything else is a `Float`.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::Number;
///
/// assert_eq!(Number::Integer(42).as_i64(), Some(42));
/// assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl Number {
    /// Returns `true` for integer values of either sign.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_) | Number::Unsigned(_))
    }

    /// Converts this number to an `i64` if it is an integer in range, or a
    /// float with no fractional part in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Number;
    ///
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Unsigned(u64::MAX).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Unsigned(u) => i64::try_from(u).ok(),
            Number::Float(f) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`, possibly losing precision.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Unsigned(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Number::Integer(i),
            Err(_) => Number::Unsigned(value),
        }
    }
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::JsonValue;
    ///
    /// assert_eq!(JsonValue::from("hello").as_str(), Some("hello"));
    /// assert_eq!(JsonValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer (or a whole float) in `i64` range, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up a member of an object. Returns `None` for non-objects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::json;
    ///
    /// let config = json!({ "window": { "width": 800 } });
    /// let width = config.get("window").and_then(|w| w.get("width"));
    /// assert_eq!(width.and_then(|w| w.as_i64()), Some(800));
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(Number::Float(_)) => "floating-point number",
            JsonValue::Number(_) => "integer",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

/// Formats the value as compact JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::json;
///
/// let value = json!({ "a": [1, 2], "b": "x" });
/// assert_eq!(value.to_string(), r#"{"a":[1,2],"b":"x"}"#);
/// ```
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        write_value(&mut output, self, &JsonOptions::compact(), 0);
        f.write_str(&output)
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Unsigned(u)) => serializer.serialize_u64(*u),
            JsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                serializer.serialize_newtype_struct(ORDERED_OBJECT, &Members(obj))
            }
        }
    }
}

/// Newtype name that tells [`JsonValueSerializer`](crate::JsonValueSerializer)
/// to keep an object's member order. Other serializers see a plain newtype.
pub(crate) const ORDERED_OBJECT: &str = "$serde_jsonkit::OrderedObject";

struct Members<'a>(&'a JsonMap);

impl Serialize for Members<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::Integer(i64::from(value)))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(value: $ty) -> Self {
                    JsonValue::Number(Number::from(u64::from(value)))
                }
            }
        )*
    };
}

from_signed!(i32 i64);
from_unsigned!(u8 u64);

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::Float(value))
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unsigned_keeps_large_values() {
        assert_eq!(
            JsonValue::from(7u64),
            JsonValue::Number(Number::Integer(7))
        );
        assert_eq!(
            JsonValue::from(u64::MAX),
            JsonValue::Number(Number::Unsigned(u64::MAX))
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(JsonValue::Null.kind(), "null");
        assert_eq!(JsonValue::from(1).kind(), "integer");
        assert_eq!(JsonValue::from(1.5).kind(), "floating-point number");
        assert_eq!(JsonValue::Array(vec![]).kind(), "array");
    }

    #[test]
    fn test_display_is_compact_json() {
        let mut map = JsonMap::new();
        map.insert("name".to_string(), JsonValue::from("a\"b"));
        map.insert("n".to_string(), JsonValue::from(1.5));
        let value = JsonValue::Object(map);
        assert_eq!(value.to_string(), r#"{"name":"a\"b","n":1.5}"#);
    }
}
