//! Record types of the application configuration file.
//!
//! ```json
//! {
//!     "timeout": 30,
//!     "pluginsPath": "usr/bin/plugins/",
//!     "window": {
//!         "width": 800,
//!         "height": 600,
//!         "x": 0,
//!         "y": 0
//!     }
//! }
//! ```
//!
//! Every field falls back to its zero value when its label is missing, and
//! labels that are not listed here are ignored.

use serde::{Deserialize, Serialize};

/// Top-level configuration record.
///
/// # Examples
///
/// ```rust
/// use serde_jsonkit::{from_str, Config};
///
/// let config: Config = from_str(r#"{"timeout": 30, "window": {"width": 800}}"#).unwrap();
/// assert_eq!(config.timeout, 30.0);
/// assert_eq!(config.window.width, 800);
/// assert!(config.plugins_path.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub timeout: f32,
    pub plugins_path: String,
    pub window: Window,
}

/// Window geometry in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Window {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}
