// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[loader]` - Memory cache limits and HTTP settings of the image engine
//! - `[viewer]` - Fullscreen viewer gesture tuning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_IMAGE_LOADER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_image_loader::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// Image engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Maximum number of decoded images kept in memory.
    #[serde(
        default = "default_cache_max_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_max_images: Option<usize>,

    /// Memory budget for decoded images, in megabytes.
    #[serde(default = "default_cache_max_mb", skip_serializing_if = "Option::is_none")]
    pub cache_max_mb: Option<u32>,

    /// HTTP request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u32>,

    /// User agent sent with image requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            cache_max_images: default_cache_max_images(),
            cache_max_mb: default_cache_max_mb(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: None,
        }
    }
}

/// Fullscreen viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Maximum delay between the two taps of a double tap, in milliseconds.
    #[serde(
        default = "default_double_tap_window_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_window_ms: Option<u64>,

    /// Zoom factor applied per mouse-wheel line.
    #[serde(
        default = "default_wheel_zoom_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub wheel_zoom_step: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: default_double_tap_window_ms(),
            wheel_zoom_step: default_wheel_zoom_step(),
        }
    }
}

impl ViewerConfig {
    /// Double-tap window, clamped to the supported range.
    #[must_use]
    pub fn double_tap_window(&self) -> Duration {
        let ms = self
            .double_tap_window_ms
            .unwrap_or(DEFAULT_DOUBLE_TAP_WINDOW_MS)
            .clamp(MIN_DOUBLE_TAP_WINDOW_MS, MAX_DOUBLE_TAP_WINDOW_MS);
        Duration::from_millis(ms)
    }

    /// Wheel zoom factor, clamped to the supported range. Non-finite values
    /// (TOML accepts `nan` and `inf`) fall back to the default.
    #[must_use]
    pub fn wheel_zoom_step(&self) -> f32 {
        self.wheel_zoom_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_WHEEL_ZOOM_STEP)
            .clamp(MIN_WHEEL_ZOOM_STEP, MAX_WHEEL_ZOOM_STEP)
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
    pub loader: LoaderConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_cache_max_images() -> Option<usize> {
    Some(DEFAULT_CACHE_MAX_IMAGES)
}

fn default_cache_max_mb() -> Option<u32> {
    Some(DEFAULT_CACHE_MAX_MB)
}

fn default_request_timeout_secs() -> Option<u32> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_double_tap_window_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
}

fn default_wheel_zoom_step() -> Option<f32> {
    Some(DEFAULT_WHEEL_ZOOM_STEP)
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
/// default config with a warning i18n key explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
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
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            loader: LoaderConfig {
                cache_max_images: Some(12),
                cache_max_mb: Some(16),
                request_timeout_secs: Some(5),
                user_agent: Some("test-agent".into()),
            },
            viewer: ViewerConfig {
                double_tap_window_ms: Some(250),
                wheel_zoom_step: Some(1.25),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = [valid").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.loader.cache_max_images, Some(DEFAULT_CACHE_MAX_IMAGES));
        assert_eq!(config.loader.cache_max_mb, Some(DEFAULT_CACHE_MAX_MB));
        assert_eq!(
            config.viewer.double_tap_window_ms,
            Some(DEFAULT_DOUBLE_TAP_WINDOW_MS)
        );
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.loader, LoaderConfig::default());
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"LIGHT\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result: std::result::Result<Config, _> =
            toml::from_str("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn viewer_values_are_clamped() {
        let viewer = ViewerConfig {
            double_tap_window_ms: Some(10),
            wheel_zoom_step: Some(50.0),
        };
        assert_eq!(
            viewer.double_tap_window(),
            Duration::from_millis(MIN_DOUBLE_TAP_WINDOW_MS)
        );
        assert_eq!(viewer.wheel_zoom_step(), MAX_WHEEL_ZOOM_STEP);
    }

    #[test]
    fn non_finite_wheel_step_uses_default() {
        for raw in ["nan", "inf", "-inf"] {
            let config: Config = toml::from_str(&format!("[viewer]\nwheel_zoom_step = {raw}\n"))
                .expect("parse");
            assert!(config.viewer.wheel_zoom_step.is_some_and(|step| !step.is_finite()));
            assert_eq!(config.viewer.wheel_zoom_step(), DEFAULT_WHEEL_ZOOM_STEP);
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[garbage").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("cfg");
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".into()),
                theme_mode: ThemeMode::System,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &path).expect("save");

        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains("[general]"));
        assert!(content.contains("[loader]"));
        assert!(content.contains("[viewer]"));
    }
}
