// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This module handles transient application state that should persist across
//! sessions but is not user-configurable (unlike preferences in
//! `settings.toml`): the diary to reopen and the last folder an image was
//! picked from.
//!
//! The state file lives next to the diary storage in the app data directory
//! (see [`paths::get_app_data_dir`]); `load_from()`/`save_to()` accept an
//! explicit directory for tests and portable setups.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Identifier of the diary that was last saved or opened.
    #[serde(default)]
    pub last_diary_id: Option<String>,

    /// Last directory an image was picked from.
    /// Used as the starting folder of the image picker.
    #[serde(default)]
    pub last_image_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). The warning is an i18n
    /// key that can be surfaced through a notification.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), error = %err, "state file is unreadable");
                        (
                            Self::default(),
                            Some("notification-state-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning key if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }

    /// Sets the last image directory from a picked file path.
    ///
    /// Paths without a parent (e.g. a filesystem root) leave it unchanged.
    pub fn set_last_image_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_image_directory = Some(parent.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_last_diary() {
        let state = AppState::default();
        assert!(state.last_diary_id.is_none());
        assert!(state.last_image_directory.is_none());
    }

    #[test]
    fn set_last_image_directory_extracts_parent() {
        let mut state = AppState::default();
        state.set_last_image_directory_from_file(Path::new("/home/user/photos/beach.jpg"));
        assert_eq!(
            state.last_image_directory,
            Some(PathBuf::from("/home/user/photos"))
        );
    }

    #[test]
    fn set_last_image_directory_ignores_root() {
        let mut state = AppState::default();
        state.set_last_image_directory_from_file(Path::new("/"));
        assert!(state.last_image_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let original = AppState {
            last_diary_id: Some("abc123XYZ_".to_string()),
            last_image_directory: Some(PathBuf::from("/test/images")),
        };

        let save_result = original.save_to(Some(base_dir.clone()));
        assert!(save_result.is_none(), "save should succeed");
        assert!(base_dir.join(STATE_FILE).exists(), "state file should exist");

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("create temp dir");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn load_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let state = AppState {
            last_diary_id: Some("diary".to_string()),
            last_image_directory: None,
        };

        assert!(state.save_to(Some(nested_dir.clone())).is_none());
        assert!(nested_dir.join(STATE_FILE).exists());
    }
}
