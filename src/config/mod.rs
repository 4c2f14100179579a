// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, read from a
//! `settings.toml` file in the user's config directory.
//!
//! The file is optional and read-only at runtime: the player never writes
//! UI state back to it.
//!
//! # Examples
//!
//! ```no_run
//! use iced_reel::config;
//!
//! let config = config::load().unwrap_or_default();
//! println!("hiding controls after {:?}", config.idle_timeout().as_duration());
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::media::Volume;
use crate::ui::state::IdleTimeout;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub idle_hide_secs: Option<u32>,
    #[serde(default)]
    pub initial_volume: Option<f32>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub preview_duration_secs: Option<f64>,
}

impl Config {
    /// Idle-hide delay, clamped to the supported range.
    #[must_use]
    pub fn idle_timeout(&self) -> IdleTimeout {
        self.idle_hide_secs
            .map(IdleTimeout::new)
            .unwrap_or_default()
    }

    /// Volume applied on mount, clamped to `[0, 1]`.
    #[must_use]
    pub fn initial_volume(&self) -> Volume {
        self.initial_volume.map(Volume::new).unwrap_or_default()
    }

    #[must_use]
    pub fn source(&self) -> &str {
        self.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    }

    #[must_use]
    pub fn poster(&self) -> &str {
        self.poster.as_deref().unwrap_or(DEFAULT_POSTER)
    }

    /// Duration reported by the stand-in element; non-finite or negative
    /// values fall back to the default.
    #[must_use]
    pub fn preview_duration_secs(&self) -> f64 {
        self.preview_duration_secs
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .unwrap_or(DEFAULT_PREVIEW_DURATION_SECS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_field() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
language = "fr"
idle_hide_secs = 5
initial_volume = 0.4
source = "file:///tmp/clip.mp4"
poster = "file:///tmp/clip.jpg"
preview_duration_secs = 12.5
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language.as_deref(), Some("fr"));
        assert_eq!(loaded.idle_timeout().value(), 5);
        assert_abs_diff_eq!(loaded.initial_volume().value(), 0.4);
        assert_eq!(loaded.source(), "file:///tmp/clip.mp4");
        assert_eq!(loaded.poster(), "file:///tmp/clip.jpg");
        assert_abs_diff_eq!(loaded.preview_duration_secs(), 12.5);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn load_from_path_errors_on_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let config = Config {
            idle_hide_secs: Some(600),
            initial_volume: Some(3.0),
            preview_duration_secs: Some(f64::NAN),
            ..Config::default()
        };
        assert_eq!(config.idle_timeout().value(), MAX_IDLE_HIDE_SECS);
        assert_abs_diff_eq!(config.initial_volume().value(), MAX_VOLUME);
        assert_abs_diff_eq!(
            config.preview_duration_secs(),
            DEFAULT_PREVIEW_DURATION_SECS
        );
    }

    #[test]
    fn default_config_uses_sample_media() {
        let config = Config::default();
        assert_eq!(config.source(), DEFAULT_SOURCE);
        assert_eq!(config.poster(), DEFAULT_POSTER);
        assert_eq!(config.idle_timeout().value(), DEFAULT_IDLE_HIDE_SECS);
    }
}
