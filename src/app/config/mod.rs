// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Initial category, grid layout, and catalog manifest
//!
//! The application only reads this file. Gallery state (query, category,
//! open preview) lives for the session and is never written back.
//!
//! # Examples
//!
//! ```no_run
//! use doc_gallery::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} columns", config.gallery.columns());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::document::CategoryFilter;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
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

/// Gallery layout and content settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Category selected when the gallery opens.
    #[serde(default, deserialize_with = "deserialize_category")]
    pub default_category: CategoryFilter,

    /// Cards per row.
    #[serde(default = "default_columns")]
    pub columns: Option<u16>,

    /// Thumbnail height in logical pixels.
    #[serde(default = "default_thumbnail_height")]
    pub thumbnail_height: Option<f32>,

    /// Catalog manifest used when `--catalog` is not given.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            default_category: CategoryFilter::All,
            columns: default_columns(),
            thumbnail_height: default_thumbnail_height(),
            catalog: None,
        }
    }
}

impl GalleryConfig {
    /// Column count clamped to `MIN_COLUMNS..=MAX_COLUMNS`.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }

    /// Thumbnail height clamped to `MIN_THUMBNAIL_HEIGHT..=MAX_THUMBNAIL_HEIGHT`.
    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        let height = self.thumbnail_height.unwrap_or(DEFAULT_THUMBNAIL_HEIGHT);
        if height.is_finite() {
            height.clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
        } else {
            DEFAULT_THUMBNAIL_HEIGHT
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery layout and content settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_columns() -> Option<u16> {
    Some(DEFAULT_COLUMNS)
}

fn default_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
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

fn deserialize_category<'de, D>(deserializer: D) -> std::result::Result<CategoryFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<CategoryFilter>()
        .map_err(|err| D::Error::custom(format!("invalid default_category: {}", err.0)))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to display.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "invalid configuration, using defaults");
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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, content).expect("write config");
        path
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.default_category, CategoryFilter::All);
        assert_eq!(config.gallery.columns(), DEFAULT_COLUMNS);
        assert_eq!(config.gallery.thumbnail_height(), DEFAULT_THUMBNAIL_HEIGHT);
        assert!(config.gallery.catalog.is_none());
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(
            temp_dir.path(),
            r#"
[general]
language = "fr"
theme_mode = "Dark"

[gallery]
default_category = "offer"
columns = 4
thumbnail_height = 150.0
catalog = "/srv/docs/catalog.toml"
"#,
        );

        let config = load_from_path(&path).expect("config should load");
        assert_eq!(config.general.language, Some("fr".to_string()));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.gallery.default_category, CategoryFilter::Offer);
        assert_eq!(config.gallery.columns(), 4);
        assert_eq!(config.gallery.thumbnail_height(), 150.0);
        assert_eq!(
            config.gallery.catalog,
            Some(PathBuf::from("/srv/docs/catalog.toml"))
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[general]\nlanguage = \"en-US\"\n");

        let config = load_from_path(&path).expect("config should load");
        assert_eq!(config.general.language, Some("en-US".to_string()));
        assert_eq!(config.gallery, GalleryConfig::default());
    }

    #[test]
    fn out_of_range_layout_values_are_clamped() {
        let gallery = GalleryConfig {
            columns: Some(0),
            thumbnail_height: Some(10_000.0),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.columns(), MIN_COLUMNS);
        assert_eq!(gallery.thumbnail_height(), MAX_THUMBNAIL_HEIGHT);

        let gallery = GalleryConfig {
            columns: Some(99),
            thumbnail_height: Some(f32::NAN),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.columns(), MAX_COLUMNS);
        assert_eq!(gallery.thumbnail_height(), DEFAULT_THUMBNAIL_HEIGHT);
    }

    #[test]
    fn invalid_category_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "[gallery]\ndefault_category = \"diploma\"\n");

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(message.contains("default_category")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_config(temp_dir.path(), "not = valid = toml");

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_config(temp_dir.path(), "[general]\ntheme_mode = \"sepia\"\n");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }
}
