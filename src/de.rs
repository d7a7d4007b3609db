//! JSON deserialization.
//!
//! This module provides the [`Deserializer`] that parses JSON text directly
//! into Rust values implementing `Deserialize`, and a `Deserializer`
//! implementation for [`JsonValue`] used by [`from_value`](crate::from_value).
//!
//! ## Overview
//!
//! - **Single pass**: values are parsed as the target type asks for them
//! - **Strict types**: a string where an integer is expected, a float literal
//!   for an integer field, or a literal that overflows its target type is an
//!   error, never a silent coercion
//! - **Forward compatible**: object members the target type does not know
//!   are parsed and skipped
//! - **Error reporting**: 1-based line and column for every decode error
//!
//! Missing members are reported by serde as "missing field" errors unless
//! the type opts into defaults with `#[serde(default)]`.
//!
//! ## Usage
//!
//! ```rust
//! use serde_jsonkit::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq, Default)]
//! #[serde(default)]
//! struct Data { x: i32, y: i32 }
//!
//! let data: Data = from_str(r#"{"x": 1, "extra": [true]}"#).unwrap();
//! assert_eq!(data, Data { x: 1, y: 0 });
//! ```

use crate::options::DEFAULT_MAX_DEPTH;
use crate::{Error, JsonMap, JsonValue, Number, Result};
use serde::de::value::{CowStrDeserializer, StringDeserializer};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};
use std::borrow::Cow;
use std::str::FromStr;

/// The JSON deserializer.
///
/// Parses JSON text into Rust values implementing `Deserialize`.
/// Created via [`Deserializer::from_str`].
pub struct Deserializer<'de> {
    input: &'de str,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Deserializer {
            input,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth of arrays and objects.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Checks that only whitespace follows the value that was parsed.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if anything else remains.
    pub fn end(&mut self) -> Result<()> {
        match self.peek_token() {
            None => Ok(()),
            Some(_) => Err(self.syntax("trailing characters after the JSON value", None)),
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Some(byte)
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_byte() {
            self.position += 1;
        }
    }

    /// Skips whitespace and returns the first byte of the next token.
    fn peek_token(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.peek_byte()
    }

    /// 1-based line and column of a byte offset.
    fn line_col(&self, pos: usize) -> (usize, usize) {
        let mut pos = pos.min(self.input.len());
        while !self.input.is_char_boundary(pos) {
            pos -= 1;
        }
        let before = &self.input[..pos];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..].chars().count() + 1;
        (line, col)
    }

    fn line_text(&self, pos: usize) -> &'de str {
        let input = self.input;
        let pos = pos.min(input.len());
        let start = input.as_bytes()[..pos]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = input.as_bytes()[pos..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(input.len(), |i| pos + i);
        input[start..end].trim_end_matches('\r')
    }

    fn syntax_at(&self, pos: usize, msg: &str, hint: Option<&str>) -> Error {
        let (line, col) = self.line_col(pos);
        Error::syntax_with_context(line, col, msg, self.line_text(pos), hint)
    }

    fn syntax(&self, msg: &str, hint: Option<&str>) -> Error {
        self.syntax_at(self.position, msg, hint)
    }

    fn eof(&self, expected: &str) -> Error {
        let (line, col) = self.line_col(self.input.len());
        Error::unexpected_eof(line, col, expected)
    }

    fn fix_position(&self, err: Error) -> Error {
        let (line, col) = self.line_col(self.position);
        err.at(line, col)
    }

    fn follows_comma(&self) -> bool {
        self.input.as_bytes()[..self.position.min(self.input.len())]
            .iter()
            .rev()
            .find(|b| !b.is_ascii_whitespace())
            == Some(&b',')
    }

    fn expected_value(&self) -> Error {
        let hint = match self.peek_byte() {
            Some(b'\'') => Some("JSON strings use double quotes"),
            Some(b) if b.is_ascii_alphabetic() => Some("Strings must be enclosed in double quotes"),
            Some(b']' | b'}') if self.follows_comma() => Some("Remove the trailing comma"),
            _ => None,
        };
        self.syntax("expected value", hint)
    }

    /// Error for a token that cannot start a value of the `expected` kind.
    fn invalid_type(&mut self, expected: &str) -> Error {
        let found = match self.peek_token() {
            None => return self.eof(expected),
            Some(b'"') => "string",
            Some(b't' | b'f') => "boolean",
            Some(b'n') => "null",
            Some(b'{') => "object",
            Some(b'[') => "array",
            Some(b'-' | b'0'..=b'9') => "number",
            Some(_) => return self.expected_value(),
        };
        let (line, col) = self.line_col(self.position);
        Error::type_mismatch(line, col, expected, found)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            let (line, col) = self.line_col(self.position);
            return Err(Error::decode_depth(self.max_depth, line, col));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_ident(&mut self, ident: &str) -> Result<()> {
        if self.input[self.position..].starts_with(ident) {
            self.position += ident.len();
            Ok(())
        } else {
            Err(self.expected_value())
        }
    }

    fn parse_bool(&mut self) -> Result<bool> {
        match self.peek_token() {
            Some(b't') => self.parse_ident("true").map(|_| true),
            Some(b'f') => self.parse_ident("false").map(|_| false),
            _ => Err(self.invalid_type("boolean")),
        }
    }

    /// Parses a string starting at the opening quote. Borrows from the input
    /// unless the string contains escapes.
    fn parse_string(&mut self) -> Result<Cow<'de, str>> {
        let input = self.input;
        self.position += 1;
        let mut owned: Option<String> = None;
        let mut chunk_start = self.position;

        loop {
            match self.peek_byte() {
                None => return Err(self.eof("closing '\"'")),
                Some(b'"') => {
                    let tail = &input[chunk_start..self.position];
                    self.position += 1;
                    return Ok(match owned {
                        Some(mut s) => {
                            s.push_str(tail);
                            Cow::Owned(s)
                        }
                        None => Cow::Borrowed(tail),
                    });
                }
                Some(b'\\') => {
                    let buf = owned.get_or_insert_with(String::new);
                    buf.push_str(&input[chunk_start..self.position]);
                    self.position += 1;
                    let ch = self.parse_escape()?;
                    buf.push(ch);
                    chunk_start = self.position;
                }
                Some(b) if b < 0x20 => {
                    return Err(self.syntax(
                        "control character in string",
                        Some("Escape it, for example as \\n or \\u0009"),
                    ));
                }
                Some(_) => self.position += 1,
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        let start = self.position - 1;
        let ch = match self.next_byte() {
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{0008}',
            Some(b'f') => '\u{000C}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                let first = self.parse_hex4()?;
                let code = if (0xD800..0xDC00).contains(&first) {
                    if !self.input[self.position..].starts_with("\\u") {
                        return Err(self.syntax_at(start, "unpaired surrogate in unicode escape", None));
                    }
                    self.position += 2;
                    let second = self.parse_hex4()?;
                    if !(0xDC00..0xE000).contains(&second) {
                        return Err(self.syntax_at(start, "unpaired surrogate in unicode escape", None));
                    }
                    0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
                } else {
                    first
                };
                return char::from_u32(code)
                    .ok_or_else(|| self.syntax_at(start, "invalid unicode code point", None));
            }
            Some(_) => return Err(self.syntax_at(start, "invalid escape sequence", None)),
            None => return Err(self.eof("escape sequence")),
        };
        Ok(ch)
    }

    fn parse_hex4(&mut self) -> Result<u32> {
        let digits = self
            .input
            .get(self.position..self.position + 4)
            .filter(|d| d.bytes().all(|b| b.is_ascii_hexdigit()));
        match digits {
            Some(d) => {
                self.position += 4;
                u32::from_str_radix(d, 16)
                    .map_err(|_| self.syntax("invalid hex in unicode escape", None))
            }
            None => Err(self.syntax(
                "invalid unicode escape sequence (expected 4 hex digits)",
                None,
            )),
        }
    }

    /// Scans a number literal. Returns its text and whether it has a
    /// fraction or exponent.
    fn scan_number(&mut self) -> Result<(&'de str, bool)> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.position;
        let mut pos = start;
        let mut is_float = false;

        if bytes.get(pos) == Some(&b'-') {
            pos += 1;
        }
        match bytes.get(pos) {
            Some(b'0') => pos += 1,
            Some(b'1'..=b'9') => {
                while let Some(b'0'..=b'9') = bytes.get(pos) {
                    pos += 1;
                }
            }
            _ => return Err(self.syntax_at(pos, "invalid number", None)),
        }
        if bytes.get(pos) == Some(&b'.') {
            is_float = true;
            pos += 1;
            if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                return Err(self.syntax_at(pos, "expected digit after decimal point", None));
            }
            while let Some(b'0'..=b'9') = bytes.get(pos) {
                pos += 1;
            }
        }
        if let Some(b'e' | b'E') = bytes.get(pos) {
            is_float = true;
            pos += 1;
            if let Some(b'+' | b'-') = bytes.get(pos) {
                pos += 1;
            }
            if !matches!(bytes.get(pos), Some(b'0'..=b'9')) {
                return Err(self.syntax_at(pos, "expected digit in exponent", None));
            }
            while let Some(b'0'..=b'9') = bytes.get(pos) {
                pos += 1;
            }
        }

        self.position = pos;
        Ok((&input[start..pos], is_float))
    }

    fn parse_integer<T: FromStr>(&mut self, target: &str) -> Result<T> {
        match self.peek_token() {
            Some(b'-' | b'0'..=b'9') => {}
            _ => return Err(self.invalid_type("integer")),
        }
        let start = self.position;
        let (text, is_float) = self.scan_number()?;
        if is_float {
            let (line, col) = self.line_col(start);
            return Err(Error::type_mismatch(
                line,
                col,
                "integer",
                "floating-point number",
            ));
        }
        text.parse::<T>().map_err(|_| {
            let (line, col) = self.line_col(start);
            Error::out_of_range(line, col, text, target)
        })
    }

    fn parse_float<T: FromStr + Into<f64> + Copy>(&mut self, target: &str) -> Result<T> {
        match self.peek_token() {
            Some(b'-' | b'0'..=b'9') => {}
            _ => return Err(self.invalid_type("number")),
        }
        let start = self.position;
        let (text, _) = self.scan_number()?;
        match text.parse::<T>() {
            Ok(v) if Into::<f64>::into(v).is_finite() => Ok(v),
            _ => {
                let (line, col) = self.line_col(start);
                Err(Error::out_of_range(line, col, text, target))
            }
        }
    }

    fn visit_number<V>(&mut self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let start = self.position;
        let (text, is_float) = self.scan_number()?;
        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return visitor.visit_i64(i);
            }
            if let Ok(u) = text.parse::<u64>() {
                return visitor.visit_u64(u);
            }
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => visitor.visit_f64(f),
            _ => {
                let (line, col) = self.line_col(start);
                Err(Error::out_of_range(line, col, text, "f64"))
            }
        }
    }

    fn expect_colon(&mut self) -> Result<()> {
        match self.peek_token() {
            Some(b':') => {
                self.position += 1;
                Ok(())
            }
            Some(_) => Err(self.syntax("expected ':' after object key", None)),
            None => Err(self.eof("':'")),
        }
    }

    fn end_array(&mut self) -> Result<()> {
        match self.peek_token() {
            Some(b']') => {
                self.position += 1;
                Ok(())
            }
            Some(b',') => Err(self.syntax("array has more elements than expected", None)),
            Some(_) => Err(self.syntax("expected ',' or ']' after array element", None)),
            None => Err(self.eof("']'")),
        }
    }

    fn end_object(&mut self) -> Result<()> {
        match self.peek_token() {
            Some(b'}') => {
                self.position += 1;
                Ok(())
            }
            Some(_) => Err(self.syntax("expected ',' or '}' after object member", None)),
            None => Err(self.eof("'}'")),
        }
    }
}

macro_rules! deserialize_integer {
    ($($method:ident => $visit:ident: $ty:ty,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let value = self.parse_integer::<$ty>(stringify!($ty))?;
                visitor.$visit(value).map_err(|e| self.fix_position(e))
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let result = match self.peek_token() {
            None => return Err(self.eof("a JSON value")),
            Some(b'n') => {
                self.parse_ident("null")?;
                visitor.visit_unit()
            }
            Some(b't' | b'f') => {
                let b = self.parse_bool()?;
                visitor.visit_bool(b)
            }
            Some(b'"') => match self.parse_string()? {
                Cow::Borrowed(s) => visitor.visit_borrowed_str(s),
                Cow::Owned(s) => visitor.visit_string(s),
            },
            Some(b'-' | b'0'..=b'9') => self.visit_number(visitor),
            Some(b'[') => return self.deserialize_seq(visitor),
            Some(b'{') => return self.deserialize_map(visitor),
            Some(_) => return Err(self.expected_value()),
        };
        result.map_err(|e| self.fix_position(e))
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse_bool()?;
        visitor.visit_bool(value).map_err(|e| self.fix_position(e))
    }

    deserialize_integer! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_f32<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse_float::<f32>("f32")?;
        visitor.visit_f32(value).map_err(|e| self.fix_position(e))
    }

    fn deserialize_f64<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let value = self.parse_float::<f64>("f64")?;
        visitor.visit_f64(value).map_err(|e| self.fix_position(e))
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.peek_token() != Some(b'"') {
            return Err(self.invalid_type("string"));
        }
        let result = match self.parse_string()? {
            Cow::Borrowed(s) => visitor.visit_borrowed_str(s),
            Cow::Owned(s) => visitor.visit_string(s),
        };
        result.map_err(|e| self.fix_position(e))
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_bytes<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_any(visitor)
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_any(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.peek_token() == Some(b'n') {
            self.parse_ident("null")?;
            visitor.visit_none().map_err(|e| self.fix_position(e))
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.peek_token() != Some(b'n') {
            return Err(self.invalid_type("null"));
        }
        self.parse_ident("null")?;
        visitor.visit_unit().map_err(|e| self.fix_position(e))
    }

    fn deserialize_unit_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_unit(visitor)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.peek_token() != Some(b'[') {
            return Err(self.invalid_type("array"));
        }
        self.enter()?;
        self.position += 1;
        let result = visitor.visit_seq(ArrayAccess::new(&mut *self));
        let value = result.map_err(|e| self.fix_position(e))?;
        self.leave();
        self.end_array()?;
        Ok(value)
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        if self.peek_token() != Some(b'{') {
            return Err(self.invalid_type("object"));
        }
        self.enter()?;
        self.position += 1;
        let result = visitor.visit_map(ObjectAccess::new(&mut *self));
        let value = result.map_err(|e| self.fix_position(e))?;
        self.leave();
        self.end_object()?;
        Ok(value)
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.peek_token() {
            Some(b'"') => {
                let name = self.parse_string()?;
                let variant: CowStrDeserializer<'de, Error> = name.into_deserializer();
                visitor
                    .visit_enum(variant)
                    .map_err(|e| self.fix_position(e))
            }
            Some(b'{') => {
                self.enter()?;
                self.position += 1;
                let result = visitor.visit_enum(VariantAccess { de: &mut *self });
                let value = result.map_err(|e| self.fix_position(e))?;
                self.leave();
                match self.peek_token() {
                    Some(b'}') => {
                        self.position += 1;
                        Ok(value)
                    }
                    Some(_) => Err(self.syntax(
                        "expected '}' after enum variant",
                        Some("An enum object holds exactly one member"),
                    )),
                    None => Err(self.eof("'}'")),
                }
            }
            _ => Err(self.invalid_type("string or object")),
        }
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_str(visitor)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_any(visitor)
    }
}

struct ArrayAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    first: bool,
}

impl<'a, 'de> ArrayAccess<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>) -> Self {
        ArrayAccess { de, first: true }
    }
}

impl<'de, 'a> de::SeqAccess<'de> for ArrayAccess<'a, 'de> {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.de.peek_token() {
            Some(b']') => return Ok(None),
            Some(b',') if !self.first => {
                let comma = self.de.position;
                self.de.position += 1;
                if self.de.peek_token() == Some(b']') {
                    return Err(self.de.syntax_at(
                        comma,
                        "trailing comma in array",
                        Some("Remove the trailing comma"),
                    ));
                }
            }
            Some(_) if self.first => self.first = false,
            Some(_) => {
                return Err(self
                    .de
                    .syntax("expected ',' or ']' after array element", None))
            }
            None => return Err(self.de.eof("',' or ']'")),
        }
        seed.deserialize(&mut *self.de).map(Some)
    }
}

struct ObjectAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
    first: bool,
}

impl<'a, 'de> ObjectAccess<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>) -> Self {
        ObjectAccess { de, first: true }
    }
}

impl<'de, 'a> de::MapAccess<'de> for ObjectAccess<'a, 'de> {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.de.peek_token() {
            Some(b'}') => return Ok(None),
            Some(b',') if !self.first => {
                let comma = self.de.position;
                self.de.position += 1;
                if self.de.peek_token() == Some(b'}') {
                    return Err(self.de.syntax_at(
                        comma,
                        "trailing comma in object",
                        Some("Remove the trailing comma"),
                    ));
                }
            }
            Some(_) if self.first => self.first = false,
            Some(_) => {
                return Err(self
                    .de
                    .syntax("expected ',' or '}' after object member", None))
            }
            None => return Err(self.de.eof("',' or '}'")),
        }

        match self.de.peek_byte() {
            Some(b'"') => {}
            Some(b'\'') => {
                return Err(self
                    .de
                    .syntax("expected string key", Some("JSON strings use double quotes")))
            }
            Some(_) => {
                return Err(self.de.syntax(
                    "expected string key",
                    Some("Object keys must be quoted strings"),
                ))
            }
            None => return Err(self.de.eof("object key")),
        }

        let key = self.de.parse_string()?;
        seed.deserialize(MapKey { key }).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        self.de.expect_colon()?;
        seed.deserialize(&mut *self.de)
    }
}

struct VariantAccess<'a, 'de> {
    de: &'a mut Deserializer<'de>,
}

impl<'de, 'a> de::EnumAccess<'de> for VariantAccess<'a, 'de> {
    type Error = Error;
    type Variant = Self;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self)>
    where
        V: de::DeserializeSeed<'de>,
    {
        if self.de.peek_token() != Some(b'"') {
            return Err(self.de.syntax("expected enum variant name", None));
        }
        let variant = seed.deserialize(&mut *self.de)?;
        self.de.expect_colon()?;
        Ok((variant, self))
    }
}

impl<'de, 'a> de::VariantAccess<'de> for VariantAccess<'a, 'de> {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        de::Deserialize::deserialize(self.de)
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.de)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(self.de, visitor)
    }

    fn struct_variant<V>(self, fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        de::Deserializer::deserialize_struct(self.de, "", fields, visitor)
    }
}

/// Deserializer for object member names. Names are always strings in the
/// text; integer and boolean map keys are parsed out of them.
struct MapKey<'de> {
    key: Cow<'de, str>,
}

macro_rules! deserialize_key_integer {
    ($($method:ident => $visit:ident: $ty:ty,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value>
            where
                V: de::Visitor<'de>,
            {
                let value = self.key.parse::<$ty>().map_err(|_| {
                    Error::custom(format!(
                        "invalid {} map key {:?}",
                        stringify!($ty),
                        self.key
                    ))
                })?;
                visitor.$visit(value)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for MapKey<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.key {
            Cow::Borrowed(s) => visitor.visit_borrowed_str(s),
            Cow::Owned(s) => visitor.visit_string(s),
        }
    }

    deserialize_key_integer! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match &*self.key {
            "true" => visitor.visit_bool(true),
            "false" => visitor.visit_bool(false),
            other => Err(Error::custom(format!("invalid bool map key {:?}", other))),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let variant: CowStrDeserializer<'de, Error> = self.key.into_deserializer();
        visitor.visit_enum(variant)
    }

    forward_to_deserialize_any! {
        f32 f64 char str string bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<JsonValue>,
}

impl SeqDeserializer {
    fn new(vec: Vec<JsonValue>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(value).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, JsonValue>,
    value: Option<JsonValue>,
}

impl MapDeserializer {
    fn new(map: JsonMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(MapKey {
                    key: Cow::Owned(key),
                })
                .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(value),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: JsonValue,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(MapKey {
            key: Cow::Owned(self.variant),
        })?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: JsonValue,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            JsonValue::Null => Ok(()),
            other => Err(Error::custom(format!(
                "expected unit variant, found {}",
                other.kind()
            ))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(self.value)
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            JsonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            other => Err(Error::custom(format!(
                "expected tuple variant, found {}",
                other.kind()
            ))),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            JsonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
            other => Err(Error::custom(format!(
                "expected struct variant, found {}",
                other.kind()
            ))),
        }
    }
}

impl<'de> de::Deserializer<'de> for JsonValue {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            JsonValue::Null => visitor.visit_unit(),
            JsonValue::Bool(b) => visitor.visit_bool(b),
            JsonValue::Number(Number::Integer(i)) => visitor.visit_i64(i),
            JsonValue::Number(Number::Unsigned(u)) => visitor.visit_u64(u),
            JsonValue::Number(Number::Float(f)) => visitor.visit_f64(f),
            JsonValue::String(s) => visitor.visit_string(s),
            JsonValue::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            JsonValue::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            JsonValue::Null => visitor.visit_none(),
            other => visitor.visit_some(other),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self {
            JsonValue::String(s) => {
                let variant: StringDeserializer<Error> = s.into_deserializer();
                visitor.visit_enum(variant)
            }
            JsonValue::Object(obj) if obj.len() == 1 => {
                let mut iter = obj.into_iter();
                match iter.next() {
                    Some((variant, value)) => {
                        visitor.visit_enum(EnumDeserializer { variant, value })
                    }
                    None => Err(Error::custom("expected enum variant")),
                }
            }
            other => Err(Error::custom(format!(
                "expected enum, found {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
