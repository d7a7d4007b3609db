//! Error types for JSON encoding, decoding and file storage.
//!
//! Every failure the crate can report is a variant of [`Error`]. Variants fall
//! into three categories (see [`Category`]):
//!
//! - **Encode**: the value cannot be represented as JSON (NaN, infinite
//!   floats, non-string map keys, nesting past the depth limit)
//! - **Decode**: the text is malformed, or a value does not fit the target
//!   type (type mismatch, numeric overflow, missing required field)
//! - **I/O**: reading or writing a file or stream failed
//!
//! Decode errors carry 1-based line and column numbers. Syntax errors also
//! show the offending line and, for common mistakes, a hint.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonkit::{from_str, Category, Error};
//!
//! let result: Result<Vec<i32>, Error> = from_str("[1, 2,]");
//! let err = result.unwrap_err();
//! assert_eq!(err.category(), Category::Decode);
//! assert!(err.to_string().contains("line 1"));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding, decoding,
/// loading or saving JSON.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {msg}")]
    Io { kind: io::ErrorKind, msg: String },

    /// Malformed JSON text
    #[error("Syntax error at line {line}, column {col}:\n{context}\n{msg}{suggestion}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
        context: String,
        suggestion: String,
    },

    /// A well-formed value of the wrong type for the target field
    #[error("Type mismatch at line {line}, column {col}: expected {expected}, found {found}")]
    TypeMismatch {
        line: usize,
        col: usize,
        expected: String,
        found: String,
    },

    /// A numeric literal that does not fit the target type
    #[error("Number out of range at line {line}, column {col}: {literal} does not fit in {target}")]
    OutOfRange {
        line: usize,
        col: usize,
        literal: String,
        target: String,
    },

    /// Input ended in the middle of a value
    #[error("Unexpected end of input at line {line}, column {col}\nExpected: {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Nesting deeper than the configured limit
    #[error("Nesting exceeds the depth limit of {limit}{}", location(.line, .col))]
    DepthLimit {
        limit: usize,
        line: usize,
        col: usize,
        encoding: bool,
    },

    /// A value JSON cannot represent, such as NaN
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// A type JSON cannot represent, such as a map with array keys
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Error raised by a `Serialize` implementation
    #[error("Encode error: {0}")]
    Encode(String),

    /// Error raised by a `Deserialize` implementation
    #[error("Decode error{}: {msg}", location(.line, .col))]
    Decode { line: usize, col: usize, msg: String },
}

/// Broad classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Reading or writing failed.
    Io,
    /// The value cannot be represented as JSON.
    Encode,
    /// The text is malformed or does not match the requested type.
    Decode,
}

fn location(line: &usize, col: &usize) -> String {
    if *line == 0 {
        String::new()
    } else {
        format!(" at line {}, column {}", line, col)
    }
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Error;
    ///
    /// let err = Error::syntax(10, 5, "expected ':'");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: String::new(),
            suggestion: String::new(),
        }
    }

    /// Creates a syntax error that shows the offending line and an optional hint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Error;
    ///
    /// let err = Error::syntax_with_context(
    ///     1,
    ///     9,
    ///     "expected value",
    ///     "{\"a\": 1,}",
    ///     Some("Remove the trailing comma"),
    /// );
    /// assert!(err.to_string().contains("Help:"));
    /// ```
    pub fn syntax_with_context(
        line: usize,
        col: usize,
        msg: &str,
        context: &str,
        suggestion: Option<&str>,
    ) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
            context: context.to_string(),
            suggestion: suggestion
                .map(|s| format!("\nHelp: {}", s))
                .unwrap_or_default(),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Error;
    ///
    /// let err = Error::type_mismatch(5, 10, "integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(line: usize, col: usize, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            line,
            col,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an error for a numeric literal that overflows its target type.
    pub fn out_of_range(line: usize, col: usize, literal: &str, target: &str) -> Self {
        Error::OutOfRange {
            line,
            col,
            literal: literal.to_string(),
            target: target.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a depth-limit error raised while encoding.
    pub fn encode_depth(limit: usize) -> Self {
        Error::DepthLimit {
            limit,
            line: 0,
            col: 0,
            encoding: true,
        }
    }

    /// Creates a depth-limit error raised while decoding.
    pub fn decode_depth(limit: usize, line: usize, col: usize) -> Self {
        Error::DepthLimit {
            limit,
            line,
            col,
            encoding: false,
        }
    }

    /// Creates an error for a value that has no JSON representation.
    pub fn unsupported_value(msg: &str) -> Self {
        Error::UnsupportedValue(msg.to_string())
    }

    /// Creates an error for a type that has no JSON representation.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a decode error with a display message and no position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Decode {
            line: 0,
            col: 0,
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error from an [`io::Error`].
    pub fn io(err: &io::Error) -> Self {
        Error::Io {
            kind: err.kind(),
            msg: err.to_string(),
        }
    }

    /// Creates an I/O error that names the file involved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonkit::Error;
    /// use std::io;
    ///
    /// let cause = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
    /// let err = Error::io_at("config.json", &cause);
    /// assert!(err.to_string().contains("config.json"));
    /// ```
    pub fn io_at(path: impl AsRef<std::path::Path>, err: &io::Error) -> Self {
        Error::Io {
            kind: err.kind(),
            msg: format!("{}: {}", path.as_ref().display(), err),
        }
    }

    /// Returns the broad category of this error.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Error::Io { .. } => Category::Io,
            Error::UnsupportedValue(_) | Error::UnsupportedType(_) | Error::Encode(_) => {
                Category::Encode
            }
            Error::DepthLimit { encoding: true, .. } => Category::Encode,
            Error::Syntax { .. }
            | Error::TypeMismatch { .. }
            | Error::OutOfRange { .. }
            | Error::UnexpectedEof { .. }
            | Error::DepthLimit { .. }
            | Error::Decode { .. } => Category::Decode,
        }
    }

    /// Returns `true` if reading or writing failed.
    #[must_use]
    pub fn is_io(&self) -> bool {
        self.category() == Category::Io
    }

    /// Returns `true` if the value could not be encoded.
    #[must_use]
    pub fn is_encode(&self) -> bool {
        self.category() == Category::Encode
    }

    /// Returns `true` if the text could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        self.category() == Category::Decode
    }

    /// Returns the [`io::ErrorKind`] of an I/O error.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Io { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns the 1-based line and column where decoding failed, when known.
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. }
            | Error::TypeMismatch { line, col, .. }
            | Error::OutOfRange { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::DepthLimit { line, col, .. }
            | Error::Decode { line, col, .. } => {
                if *line == 0 {
                    None
                } else {
                    Some((*line, *col))
                }
            }
            _ => None,
        }
    }

    /// Attaches a position to a decode error raised without one.
    pub(crate) fn at(self, line: usize, col: usize) -> Self {
        match self {
            Error::Decode { line: 0, msg, .. } => Error::Decode { line, col, msg },
            other => other,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(&err)
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Encode(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Decode {
            line: 0,
            col: 0,
            msg: msg.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
