//! Configuration options for JSON encoding.
//!
//! This module provides types to customize the encoded text:
//!
//! - [`JsonOptions`]: Main configuration struct
//! - [`Indent`]: Choice of indentation unit (spaces or tabs)
//!
//! The defaults produce the indented form used for configuration files:
//! four spaces per level, `": "` after each label, map keys sorted.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonkit::{to_string_with_options, JsonOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let options = JsonOptions::new().with_indent(2);
//! let json = to_string_with_options(&data, options).unwrap();
//! assert_eq!(json, "{\n  \"x\": 1,\n  \"y\": 2\n}");
//!
//! let json = to_string_with_options(&data, JsonOptions::compact()).unwrap();
//! assert_eq!(json, r#"{"x":1,"y":2}"#);
//! ```

/// Indentation unit for one nesting level.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::Indent;
///
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// assert_eq!(Indent::Tab.unit(), "\t");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tab,
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(4)
    }
}

impl Indent {
    /// Returns the text written once per nesting level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Spaces(n) => " ".repeat(*n),
            Indent::Tab => "\t".to_string(),
        }
    }
}

/// Default nesting limit for encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for JSON encoding.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{Indent, JsonOptions};
///
/// // Indented, four spaces per level
/// let options = JsonOptions::new();
/// assert_eq!(options.indent, Indent::Spaces(4));
///
/// // Single line, no whitespace
/// let options = JsonOptions::compact();
/// assert!(!options.pretty);
///
/// // Custom configuration
/// let options = JsonOptions::new()
///     .with_tabs()
///     .with_sort_map_keys(false)
///     .with_escape_html(true);
/// ```
#[derive(Clone, Debug)]
pub struct JsonOptions {
    pub indent: Indent,
    pub pretty: bool,
    pub sort_map_keys: bool,
    pub escape_html: bool,
    pub max_depth: usize,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: Indent::default(),
            pretty: true,
            sort_map_keys: true,
            escape_html: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl JsonOptions {
    /// Creates default options (indented, 4-space indent, sorted map keys).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert!(options.pretty);
    /// assert!(options.sort_map_keys);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for single-line output without whitespace.
    #[must_use]
    pub fn compact() -> Self {
        JsonOptions {
            pretty: false,
            ..Default::default()
        }
    }

    /// Sets the indentation to `width` spaces per level.
    ///
    /// Only affects indented output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::{Indent, JsonOptions};
    ///
    /// let options = JsonOptions::new().with_indent(2);
    /// assert_eq!(options.indent, Indent::Spaces(2));
    /// ```
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Indent::Spaces(width);
        self
    }

    /// Indents with one tab per level.
    #[must_use]
    pub fn with_tabs(mut self) -> Self {
        self.indent = Indent::Tab;
        self
    }

    /// Controls whether map entries are written in sorted key order.
    ///
    /// Struct fields always keep their declared order.
    #[must_use]
    pub fn with_sort_map_keys(mut self, sort: bool) -> Self {
        self.sort_map_keys = sort;
        self
    }

    /// Controls whether `<`, `>` and `&` inside strings are written as
    /// `\u003c`, `\u003e` and `\u0026`.
    #[must_use]
    pub fn with_escape_html(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Sets the maximum nesting depth accepted while encoding.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
