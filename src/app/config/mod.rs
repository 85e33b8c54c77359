// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[library]` - Directory the gallery lists
//! - `[gallery]` - Scroll threshold for loading the next page
//! - `[video]` - Playback settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `REEL_PLAY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use reel_play::app::config;
//!
//! let config = config::load();
//! let threshold = config.load_threshold();
//! assert!(threshold > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Media library settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LibraryConfig {
    /// Directory listed by the gallery. Defaults to the platform video folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Distance from the end of the grid, in viewport heights, at which the
    /// next page is requested.
    #[serde(
        default = "default_load_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub load_threshold: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            load_threshold: default_load_threshold(),
        }
    }
}

/// Video playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Start playing as soon as a video is opened.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

impl Config {
    /// Load threshold clamped to the supported range.
    #[must_use]
    pub fn load_threshold(&self) -> f32 {
        clamp_load_threshold(
            self.gallery
                .load_threshold
                .unwrap_or(DEFAULT_LOAD_THRESHOLD),
        )
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.video.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }

    /// Configured library directory, falling back to the platform video folder.
    #[must_use]
    pub fn library_directory(&self) -> Option<PathBuf> {
        self.library.directory.clone().or_else(dirs::video_dir)
    }
}

/// Keeps the threshold inside the supported range; non-finite values fall
/// back to the default.
#[must_use]
pub fn clamp_load_threshold(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_LOAD_THRESHOLD, MAX_LOAD_THRESHOLD)
    } else {
        DEFAULT_LOAD_THRESHOLD
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_load_threshold() -> Option<f32> {
    Some(DEFAULT_LOAD_THRESHOLD)
}

#[allow(clippy::unnecessary_wraps)]
fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// A missing file gives the defaults. A file that cannot be read or parsed
/// is logged and also gives the defaults.
pub fn load() -> Config {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> Config {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Config::default();
    };
    if !path.exists() {
        return Config::default();
    }
    match load_from_path(&path) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "cannot load settings, using defaults"
            );
            Config::default()
        }
    }
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
