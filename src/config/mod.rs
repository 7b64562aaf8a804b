// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[book]` - Cover title and whether the last diary is reopened at startup
//! - `[editor]` - Defaults for new text boxes and the drawing pen
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `SCRAPBOOK_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use scrapbook::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diary::{
    FontFamily, FontSize, HexColor, TextStyle, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Book-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookConfig {
    /// Title printed on the cover. Falls back to the localized default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_title: Option<String>,

    /// Reopen the last saved or opened diary when no share link is given.
    #[serde(default = "default_reopen_last", skip_serializing_if = "Option::is_none")]
    pub reopen_last: Option<bool>,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            cover_title: None,
            reopen_last: default_reopen_last(),
        }
    }
}

/// Defaults applied when placing new elements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EditorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,

    /// Font size of new text boxes (10 to 36).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Color of new text boxes, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<HexColor>,

    /// Drawing pen color, as `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<HexColor>,

    /// Drawing pen width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
}

impl EditorConfig {
    /// Style given to new text boxes.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        let defaults = TextStyle::default();
        TextStyle {
            color: self.text_color.unwrap_or(defaults.color),
            font_size: self.font_size.map_or(defaults.font_size, FontSize::new),
            font_family: self.font_family.unwrap_or(defaults.font_family),
        }
    }

    #[must_use]
    pub fn stroke_color(&self) -> HexColor {
        self.stroke_color.unwrap_or(DEFAULT_STROKE_COLOR)
    }

    /// Pen width, clamped to the supported range.
    #[must_use]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
            .filter(|w| w.is_finite())
            .unwrap_or(DEFAULT_STROKE_WIDTH)
            .clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub book: BookConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

impl Config {
    #[must_use]
    pub fn reopen_last(&self) -> bool {
        self.book.reopen_last.unwrap_or(true)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_reopen_last() -> Option<bool> {
    Some(true)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config file rejected");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
