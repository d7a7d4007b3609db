//! JSON serialization.
//!
//! Encoding happens in two steps:
//!
//! 1. [`JsonValueSerializer`] turns any `T: Serialize` into a [`JsonValue`]
//!    tree. This is where values JSON cannot hold are rejected (NaN, infinite
//!    floats, non-string map keys, nesting past the depth limit) and where map
//!    keys are sorted.
//! 2. [`Serializer`] writes the tree as text according to [`JsonOptions`].
//!
//! Sorting applies to map types such as `HashMap` and `BTreeMap`. Struct
//! fields keep their declared order, including fields pulled in with
//! `#[serde(flatten)]`, and a [`JsonValue`] object keeps its member order.
//! Fields skipped by serde (for example
//! `#[serde(skip_serializing_if = "Option::is_none")]`) never reach the tree,
//! so they are absent from the output.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_jsonkit::{to_string, to_string_compact};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! assert_eq!(to_string(&data).unwrap(), "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! assert_eq!(to_string_compact(&data).unwrap(), r#"{"x":1,"y":2}"#);
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_jsonkit::{JsonOptions, Serializer};
//!
//! let mut serializer = Serializer::new(JsonOptions::compact());
//! serializer.serialize(&vec![1, 2, 3]).unwrap();
//! assert_eq!(serializer.into_inner(), "[1,2,3]");
//! ```

use crate::value::ORDERED_OBJECT;
use crate::{Error, JsonMap, JsonOptions, JsonValue, Number, Result};
use serde::{ser, Serialize};

/// The JSON text writer.
///
/// Created via [`Serializer::new`]; each call to [`Serializer::serialize`]
/// appends one encoded value to the output.
pub struct Serializer {
    output: String,
    options: JsonOptions,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Encodes `value` and appends the text to the output.
    ///
    /// # Errors
    ///
    /// Returns an encode error if the value cannot be represented as JSON.
    /// Nothing is appended in that case.
    pub fn serialize<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let tree = value.serialize(JsonValueSerializer::new(&self.options))?;
        write_value(&mut self.output, &tree, &self.options, 0);
        Ok(())
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

/// A serde serializer that produces a [`JsonValue`].
///
/// Used by [`to_value`](crate::to_value) and as the first step of every
/// text encoding.
#[derive(Clone, Copy, Debug)]
pub struct JsonValueSerializer {
    depth: usize,
    max_depth: usize,
    sort_map_keys: bool,
}

impl Default for JsonValueSerializer {
    fn default() -> Self {
        JsonValueSerializer::new(&JsonOptions::default())
    }
}

impl JsonValueSerializer {
    #[must_use]
    pub fn new(options: &JsonOptions) -> Self {
        JsonValueSerializer {
            depth: 0,
            max_depth: options.max_depth,
            sort_map_keys: options.sort_map_keys,
        }
    }

    /// Serializer for the members of a container one level down.
    fn nested(self) -> Result<Self> {
        if self.depth >= self.max_depth {
            return Err(Error::encode_depth(self.max_depth));
        }
        Ok(JsonValueSerializer {
            depth: self.depth + 1,
            ..self
        })
    }

    fn value_of<T: Serialize + ?Sized>(self, value: &T) -> Result<JsonValue> {
        value.serialize(self)
    }
}

fn finite(v: f64) -> Result<JsonValue> {
    if v.is_finite() {
        Ok(JsonValue::Number(Number::Float(v)))
    } else {
        Err(Error::unsupported_value(&format!(
            "{} cannot be represented in JSON",
            v
        )))
    }
}

impl ser::Serializer for JsonValueSerializer {
    type Ok = JsonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<JsonValue> {
        Ok(JsonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsonValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<JsonValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<JsonValue> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<JsonValue> {
        if let Ok(i) = i64::try_from(v) {
            Ok(JsonValue::Number(Number::Integer(i)))
        } else if let Ok(u) = u64::try_from(v) {
            Ok(JsonValue::Number(Number::Unsigned(u)))
        } else {
            Err(Error::unsupported_value(&format!(
                "{} is outside the 64-bit integer range",
                v
            )))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<JsonValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<JsonValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<JsonValue> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::from(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<JsonValue> {
        match u64::try_from(v) {
            Ok(u) => self.serialize_u64(u),
            Err(_) => Err(Error::unsupported_value(&format!(
                "{} is outside the 64-bit integer range",
                v
            ))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<JsonValue> {
        if !v.is_finite() {
            return finite(f64::from(v));
        }
        // Widen through the shortest decimal form so 0.1f32 prints as 0.1.
        let widened = v.to_string().parse::<f64>().unwrap_or(f64::from(v));
        finite(widened)
    }

    fn serialize_f64(self, v: f64) -> Result<JsonValue> {
        finite(v)
    }

    fn serialize_char(self, v: char) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonValue> {
        let vec = v.iter().map(|&b| JsonValue::from(b)).collect();
        Ok(JsonValue::Array(vec))
    }

    fn serialize_none(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonValue> {
        Ok(JsonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        if name == ORDERED_OBJECT {
            return value.serialize(JsonValueSerializer {
                sort_map_keys: false,
                ..self
            });
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        let inner = self.nested()?.value_of(value)?;
        let mut map = JsonMap::with_capacity(1);
        map.insert(variant.to_string(), inner);
        Ok(JsonValue::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        SerializeVec::new(self, len.unwrap_or(0), None)
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        SerializeVec::new(self, len, None)
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        SerializeVec::new(self, len, None)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        SerializeVec::new(self, len, Some(variant))
    }

    // Map types report their length up front. Records with flattened fields
    // come through here with no length and keep their field order.
    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        let sort = self.sort_map_keys && len.is_some();
        SerializeMap::new(self, len.unwrap_or(0), None, sort)
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        SerializeMap::new(self, len, None, false)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeMap> {
        SerializeMap::new(self, len, Some(variant), false)
    }
}

/// Wraps `value` as `{"variant": value}` for data-carrying enum variants.
fn tagged(variant: Option<&'static str>, value: JsonValue) -> JsonValue {
    match variant {
        Some(name) => {
            let mut map = JsonMap::with_capacity(1);
            map.insert(name.to_string(), value);
            JsonValue::Object(map)
        }
        None => value,
    }
}

pub struct SerializeVec {
    ser: JsonValueSerializer,
    vec: Vec<JsonValue>,
    variant: Option<&'static str>,
}

impl SerializeVec {
    fn new(
        parent: JsonValueSerializer,
        len: usize,
        variant: Option<&'static str>,
    ) -> Result<Self> {
        let mut ser = parent.nested()?;
        if variant.is_some() {
            ser = ser.nested()?;
        }
        Ok(SerializeVec {
            ser,
            vec: Vec::with_capacity(len),
            variant,
        })
    }

    fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.vec.push(self.ser.value_of(value)?);
        Ok(())
    }

    fn finish(self) -> JsonValue {
        tagged(self.variant, JsonValue::Array(self.vec))
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

pub struct SerializeMap {
    ser: JsonValueSerializer,
    map: JsonMap,
    current_key: Option<String>,
    variant: Option<&'static str>,
    sort: bool,
}

impl SerializeMap {
    fn new(
        parent: JsonValueSerializer,
        len: usize,
        variant: Option<&'static str>,
        sort: bool,
    ) -> Result<Self> {
        let mut ser = parent.nested()?;
        if variant.is_some() {
            ser = ser.nested()?;
        }
        Ok(SerializeMap {
            ser,
            map: JsonMap::with_capacity(len),
            current_key: None,
            variant,
            sort,
        })
    }

    fn field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        let value = self.ser.value_of(value)?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn finish(mut self) -> JsonValue {
        if self.sort {
            self.map.sort_keys();
        }
        tagged(self.variant, JsonValue::Object(self.map))
    }
}

/// Converts a serialized map key into the string used as the member name.
fn key_string(key: JsonValue) -> Result<String> {
    match key {
        JsonValue::String(s) => Ok(s),
        JsonValue::Number(n) if n.is_integer() => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        other => Err(Error::unsupported_type(&format!(
            "map key must be a string, integer or boolean, found {}",
            other.kind()
        ))),
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_string(self.ser.value_of(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::Encode("serialize_value called without serialize_key".into()))?;
        let value = self.ser.value_of(value)?;
        self.map.insert(key, value);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<JsonValue> {
        Ok(self.finish())
    }
}

fn write_indent(output: &mut String, options: &JsonOptions, level: usize) {
    let unit = options.indent.unit();
    for _ in 0..level {
        output.push_str(&unit);
    }
}

/// Writes `value` as JSON text. `level` is the nesting level of `value`
/// itself; nested members are indented one level deeper.
pub(crate) fn write_value(
    output: &mut String,
    value: &JsonValue,
    options: &JsonOptions,
    level: usize,
) {
    match value {
        JsonValue::Null => output.push_str("null"),
        JsonValue::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        JsonValue::Number(n) => output.push_str(&n.to_string()),
        JsonValue::String(s) => write_string(output, s, options),
        JsonValue::Array(arr) => write_array(output, arr, options, level),
        JsonValue::Object(obj) => write_object(output, obj, options, level),
    }
}

fn write_array(output: &mut String, arr: &[JsonValue], options: &JsonOptions, level: usize) {
    if arr.is_empty() {
        output.push_str("[]");
        return;
    }

    output.push('[');
    for (i, element) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        if options.pretty {
            output.push('\n');
            write_indent(output, options, level + 1);
        }
        write_value(output, element, options, level + 1);
    }
    if options.pretty {
        output.push('\n');
        write_indent(output, options, level);
    }
    output.push(']');
}

fn write_object(output: &mut String, obj: &JsonMap, options: &JsonOptions, level: usize) {
    if obj.is_empty() {
        output.push_str("{}");
        return;
    }

    output.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        if options.pretty {
            output.push('\n');
            write_indent(output, options, level + 1);
        }
        write_string(output, key, options);
        output.push(':');
        if options.pretty {
            output.push(' ');
        }
        write_value(output, value, options, level + 1);
    }
    if options.pretty {
        output.push('\n');
        write_indent(output, options, level);
    }
    output.push('}');
}

fn write_string(output: &mut String, s: &str, options: &JsonOptions) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            '<' | '>' | '&' if options.escape_html => {
                output.push_str(&format!("\\u{:04x}", ch as u32));
            }
            c if (c as u32) < 0x20 => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => output.push(ch),
        }
    }
    output.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut serializer = Serializer::new(JsonOptions::default());
        serializer.serialize(value)?;
        Ok(serializer.into_inner())
    }

    #[derive(Serialize)]
    struct Window {
        width: i32,
        height: i32,
    }

    #[test]
    fn test_nested_struct_indentation() {
        #[derive(Serialize)]
        struct Outer {
            name: &'static str,
            window: Window,
        }

        let outer = Outer {
            name: "main",
            window: Window {
                width: 800,
                height: 600,
            },
        };
        let expected = "{\n    \"name\": \"main\",\n    \"window\": {\n        \"width\": 800,\n        \"height\": 600\n    }\n}";
        assert_eq!(encode(&outer).unwrap(), expected);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode(&Vec::<i32>::new()).unwrap(), "[]");
        assert_eq!(encode(&HashMap::<String, i32>::new()).unwrap(), "{}");
    }

    #[test]
    fn test_map_keys_sorted_struct_fields_not() {
        let mut map = HashMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        assert_eq!(
            encode(&map).unwrap(),
            "{\n    \"alpha\": 2,\n    \"zeta\": 1\n}"
        );

        #[derive(Serialize)]
        struct Unsorted {
            zeta: i32,
            alpha: i32,
        }
        let json = encode(&Unsorted { zeta: 1, alpha: 2 }).unwrap();
        assert!(json.find("zeta").unwrap() < json.find("alpha").unwrap());
    }

    #[test]
    fn test_flattened_fields_keep_declared_order() {
        #[derive(Serialize)]
        struct Inner {
            zeta: i32,
            alpha: i32,
        }

        #[derive(Serialize)]
        struct Outer {
            name: &'static str,
            #[serde(flatten)]
            inner: Inner,
            id: i32,
        }

        let outer = Outer {
            name: "n",
            inner: Inner { zeta: 1, alpha: 2 },
            id: 3,
        };
        let options = JsonOptions::compact();
        let mut ser = Serializer::new(options);
        ser.serialize(&outer).unwrap();
        assert_eq!(ser.into_inner(), r#"{"name":"n","zeta":1,"alpha":2,"id":3}"#);
    }

    #[test]
    fn test_value_objects_keep_member_order() {
        let mut window = JsonMap::new();
        window.insert("width".to_string(), JsonValue::from(800));
        window.insert("height".to_string(), JsonValue::from(600));
        let mut root = JsonMap::new();
        root.insert("timeout".to_string(), JsonValue::from(30));
        root.insert("window".to_string(), JsonValue::Object(window));
        let value = JsonValue::Object(root);

        let mut ser = Serializer::new(JsonOptions::compact());
        ser.serialize(&value).unwrap();
        let text = ser.into_inner();
        assert_eq!(text, r#"{"timeout":30,"window":{"width":800,"height":600}}"#);
        assert_eq!(text, value.to_string());

        let mut map = HashMap::new();
        map.insert("zeta", value.clone());
        map.insert("alpha", JsonValue::Null);
        let json = encode(&map).unwrap();
        assert!(json.find("alpha").unwrap() < json.find("zeta").unwrap());
        assert!(json.find("timeout").unwrap() < json.find("window").unwrap());
    }

    #[test]
    fn test_integer_map_keys_become_strings() {
        let mut map = HashMap::new();
        map.insert(2u32, "two");
        let json = encode(&map).unwrap();
        assert_eq!(json, "{\n    \"2\": \"two\"\n}");
    }

    #[test]
    fn test_non_scalar_map_key_rejected() {
        let mut map = HashMap::new();
        map.insert(vec![1], 1);
        let err = encode(&map).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
        assert!(err.is_encode());
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        assert!(matches!(
            encode(&f64::NAN).unwrap_err(),
            Error::UnsupportedValue(_)
        ));
        assert!(encode(&f32::INFINITY).unwrap_err().is_encode());
        assert!(encode(&vec![1.0, f64::NEG_INFINITY]).unwrap_err().is_encode());
    }

    #[test]
    fn test_float_formatting() {
        assert_eq!(encode(&30.0f32).unwrap(), "30");
        assert_eq!(encode(&0.1f32).unwrap(), "0.1");
        assert_eq!(encode(&2.5f64).unwrap(), "2.5");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(encode("a\"b\\c\nd").unwrap(), r#""a\"b\\c\nd""#);
        assert_eq!(encode("\u{1}").unwrap(), r#""\u0001""#);
        assert_eq!(encode("<a&b>").unwrap(), "\"<a&b>\"");

        let mut serializer = Serializer::new(JsonOptions::new().with_escape_html(true));
        serializer.serialize("<a&b>").unwrap();
        assert_eq!(serializer.into_inner(), r#""\u003ca\u0026b\u003e""#);
    }

    #[test]
    fn test_enum_representations() {
        #[derive(Serialize)]
        enum Shape {
            Empty,
            Circle(u32),
            Point(i32, i32),
            Rect { w: u32, h: u32 },
        }

        let compact = JsonOptions::compact();
        let to = |s: &Shape| {
            let mut ser = Serializer::new(compact.clone());
            ser.serialize(s).unwrap();
            ser.into_inner()
        };
        assert_eq!(to(&Shape::Empty), r#""Empty""#);
        assert_eq!(to(&Shape::Circle(3)), r#"{"Circle":3}"#);
        assert_eq!(to(&Shape::Point(1, -2)), r#"{"Point":[1,-2]}"#);
        assert_eq!(to(&Shape::Rect { w: 2, h: 4 }), r#"{"Rect":{"w":2,"h":4}}"#);
    }

    #[test]
    fn test_depth_limit() {
        #[derive(Serialize)]
        struct Node {
            next: Option<Box<Node>>,
        }

        let mut node = Node { next: None };
        for _ in 0..10 {
            node = Node {
                next: Some(Box::new(node)),
            };
        }

        let options = JsonOptions::new().with_max_depth(5);
        let mut serializer = Serializer::new(options);
        let err = serializer.serialize(&node).unwrap_err();
        assert!(matches!(err, Error::DepthLimit { limit: 5, .. }));
        assert!(err.is_encode());

        assert!(encode(&node).is_ok());
    }

    #[test]
    fn test_tab_indentation() {
        let mut serializer = Serializer::new(JsonOptions::new().with_tabs());
        serializer.serialize(&vec![1, 2]).unwrap();
        assert_eq!(serializer.into_inner(), "[\n\t1,\n\t2\n]");
    }
}
