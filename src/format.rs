//! JSON text format produced and accepted by this library
//!
//! This module documents the exact layout of encoded text and the rules the
//! decoder applies. It contains no code.
//!
//! # Encoding
//!
//! ## Layout
//!
//! The default layout indents each nesting level by four spaces, writes
//! `": "` between a label and its value, and ends without a trailing
//! newline:
//!
//! ```text
//! {
//!     "timeout": 30,
//!     "window": {
//!         "width": 800,
//!         "height": 600
//!     },
//!     "tags": [
//!         "a",
//!         "b"
//!     ],
//!     "empty": {}
//! }
//! ```
//!
//! **Rules**:
//! - Empty objects and arrays are written as `{}` and `[]`
//! - Struct fields keep their declared order, flattened fields included
//! - [`JsonValue`](crate::JsonValue) objects keep their member order
//! - Entries of map types are sorted by key (byte order) unless
//!   [`JsonOptions::with_sort_map_keys`](crate::JsonOptions::with_sort_map_keys)
//!   turns it off
//! - Compact output ([`JsonOptions::compact`](crate::JsonOptions::compact))
//!   drops all whitespace: `{"x":1,"y":[1,2]}`
//!
//! ## Values
//!
//! | Rust | JSON | Example |
//! |------|------|---------|
//! | `()`, `None`, unit struct | `null` | `null` |
//! | `bool` | `true` / `false` | `true` |
//! | integers | decimal digits | `-42` |
//! | `f32`, `f64` | shortest round-trip decimal | `0.1`, `30`, `2.5` |
//! | `String`, `&str`, `char` | quoted string | `"hi"` |
//! | `Vec<T>`, tuples, slices | array | `[1, 2]` |
//! | structs, maps | object | `{"x": 1}` |
//! | unit variant | string | `"Red"` |
//! | newtype, tuple, struct variant | single-member object | `{"Rgb": [1, 2, 3]}` |
//!
//! `Option` fields are written as `null` when `None`, unless the field is
//! annotated `#[serde(skip_serializing_if = "Option::is_none")]`, in which
//! case the label is left out.
//!
//! ## Strings
//!
//! `"` and `\` are escaped with a backslash. `\n`, `\r`, `\t`, `\b` and `\f`
//! use their short escapes; other control characters are written as
//! `\u00XX`. With HTML escaping enabled, `<`, `>` and `&` become `\u003c`,
//! `\u003e` and `\u0026`. All other characters, including non-ASCII, are
//! written as-is in UTF-8.
//!
//! ## Map keys
//!
//! Object labels are always strings. String and `char` keys are used
//! directly, integer and `bool` keys are written as their decimal or
//! `true`/`false` text. Any other key type is an encode error.
//!
//! ## Encode errors
//!
//! - NaN and infinite floats
//! - Map keys that are not scalars
//! - Nesting deeper than the depth limit (128 by default). Cyclic data
//!   built through shared pointers shows up as this error.
//!
//! # Decoding
//!
//! Input must be a single JSON value (RFC 8259) surrounded by optional
//! whitespace.
//!
//! **Rules**:
//! - Members whose label is not a field of the target struct are skipped
//! - Missing members are an error unless the struct or field has
//!   `#[serde(default)]`, which fills in the `Default` value
//! - Integer fields accept only integer literals; `1.0` and `1e2` are type
//!   mismatches
//! - A literal that does not fit the target type (`300` for `u8`, `1e400`
//!   for `f64`) is an out-of-range error
//! - `null` is accepted only by `Option`, `()` and `JsonValue`
//! - Integer map keys are parsed from the member name
//! - Nesting is limited to 128 levels
//!
//! Not accepted: comments, trailing commas, single-quoted strings,
//! unquoted keys, `NaN`/`Infinity` literals, leading zeros, lone UTF-16
//! surrogates in `\u` escapes.
//!
//! ## Error positions
//!
//! Decode errors report 1-based line and column numbers, counting columns
//! in characters. Syntax errors also show the offending line and, for the
//! mistakes listed above, a hint:
//!
//! ```text
//! Syntax error at line 3, column 15:
//!     "height": 600,
//! trailing comma in object
//! Help: Remove the trailing comma
//! ```
