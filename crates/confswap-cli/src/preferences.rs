//! Persisted format selections.
//!
//! The converter remembers the last explicitly chosen source and target
//! format tags, so repeat invocations can omit `--from`/`--to`. Stored as
//! a small JSON file in the per-user config directory. A missing or
//! unreadable file is treated as empty, never as an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PREFERENCES_FILE: &str = "preferences.json";

/// Last-used source and target format tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_format: Option<String>,
}

impl Preferences {
    /// Loads preferences from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!("ignoring unreadable preferences file: {}", e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Writes preferences to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, body)
    }

    /// Returns the per-user preferences path, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "confswap")
            .map(|dirs| dirs.config_dir().join(PREFERENCES_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            left_format: Some("properties".to_string()),
            right_format: Some("yaml".to_string()),
        };
        prefs.save(&path).unwrap();

        assert_eq!(Preferences::load(&path), prefs);
    }

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Preferences::load(&dir.path().join("absent.json"));

        assert_eq!(loaded, Preferences::default());
    }

    #[test]
    fn test_corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        assert_eq!(Preferences::load(&path), Preferences::default());
    }

    #[test]
    fn test_partial_file_keeps_known_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"left_format": "idea"}"#).unwrap();

        let loaded = Preferences::load(&path);
        assert_eq!(loaded.left_format.as_deref(), Some("idea"));
        assert_eq!(loaded.right_format, None);
    }
}
