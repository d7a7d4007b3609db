//! Whole-file loading and saving through the JSON codec.
//!
//! [`load`] reads a file and decodes it; [`save`] encodes a value and writes
//! it, creating or truncating the file. New files get mode `0o666` filtered
//! by the process umask. Writes are not atomic: a failure part way through
//! can leave a partially written file.
//!
//! Codec errors pass through unchanged; file system failures become
//! [`Error::Io`] naming the path.
//!
//! ```no_run
//! use serde_jsonkit::{store, Config};
//!
//! let mut config: Config = store::load("config.json")?;
//! config.plugins_path = "usr/bin/plugins/".to_string();
//! store::save("config.json", &config)?;
//! # Ok::<(), serde_jsonkit::Error>(())
//! ```

use crate::{from_str, to_string_with_options, Error, JsonOptions, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads the file at `path` and decodes it into `T`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, or is not
/// valid UTF-8, and any decode error from [`from_str`].
pub fn load<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to read file");
        Error::io_at(path, &e)
    })?;

    match from_str(&text) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), bytes = text.len(), "Loaded file");
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to decode file");
            Err(e)
        }
    }
}

/// Encodes `value` with the default indented layout and writes it to `path`.
///
/// # Errors
///
/// Returns any encode error (the file is not touched), or [`Error::Io`] if
/// the file cannot be created or written.
pub fn save<T, P>(path: P, value: &T) -> Result<()>
where
    T: ?Sized + Serialize,
    P: AsRef<Path>,
{
    save_with_options(path, value, JsonOptions::default())
}

/// Like [`save`], with explicit encoding options.
///
/// # Errors
///
/// Same as [`save`].
pub fn save_with_options<T, P>(path: P, value: &T, options: JsonOptions) -> Result<()>
where
    T: ?Sized + Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = to_string_with_options(value, options).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to encode value");
        e
    })?;

    fs::write(path, &text).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to write file");
        Error::io_at(path, &e)
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "Saved file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Config};
    use std::collections::BTreeMap;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.timeout = 30.0;
        config.window.width = 800;
        save(&path, &config).unwrap();

        let loaded: Config = load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        save(&path, &vec![1, 2]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[\n    1,\n    2\n]");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load::<Config, _>(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.category(), Category::Io);
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = load::<Config, _>(&path).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_load_malformed_is_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"timeout\": 30,,}").unwrap();

        let err = load::<Config, _>(&path).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_save_encode_error_leaves_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nan.json");

        let mut config = Config::default();
        config.timeout = f32::NAN;
        let err = save(&path, &config).unwrap_err();
        assert!(err.is_encode());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.json");
        let err = save(&path, &Config::default()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_save_with_options() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("compact.json");
        let mut map = BTreeMap::new();
        map.insert("b", 2);
        map.insert("a", 1);

        save_with_options(&path, &map, JsonOptions::compact()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"a":1,"b":2}"#);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_is_not_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("mode.json");
        save(&path, &Config::default()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
