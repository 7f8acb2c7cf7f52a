// SPDX-License-Identifier: MPL-2.0
//! This module handles the notification system's configuration, including
//! loading and saving user preferences to a `settings.toml` file.
//!
//! All fields are optional in the file; [`Config::resolve`] fills unset or
//! out-of-range values from [`defaults`] so a partial or invalid file never
//! prevents the provider from starting.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.max_notifications = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve into the provider's validated runtime configuration
//! let provider_config = config.resolve();
//! assert_eq!(provider_config.max_notifications, 3);
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notifications::{AutoDismiss, Position, ProviderConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Keyword accepted in the `default_duration` field for notifications
/// that never auto-dismiss.
const PERSISTENT_KEYWORD: &str = "persistent";

/// Duration setting as written in the configuration file: either a number
/// of milliseconds or the keyword `"persistent"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationSetting {
    Millis(u64),
    Named(String),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub max_notifications: Option<usize>,
    #[serde(default)]
    pub default_duration: Option<DurationSetting>,
    #[serde(default)]
    pub default_position: Option<String>,
}

impl Config {
    /// Resolves the file-backed settings into a validated [`ProviderConfig`].
    ///
    /// Unset fields, a zero or oversized `max_notifications`, unknown
    /// position names, and unknown duration keywords all fall back to the
    /// defaults rather than failing.
    #[must_use]
    pub fn resolve(&self) -> ProviderConfig {
        let mut resolved = ProviderConfig::default();

        if let Some(max) = self.max_notifications {
            if max > 0 && max <= defaults::MAX_MAX_NOTIFICATIONS {
                resolved.max_notifications = max;
            }
        }

        match &self.default_duration {
            Some(DurationSetting::Millis(ms)) => {
                resolved.default_duration = AutoDismiss::After(Duration::from_millis(*ms));
            }
            Some(DurationSetting::Named(name)) if name == PERSISTENT_KEYWORD => {
                resolved.default_duration = AutoDismiss::Never;
            }
            // Unknown keyword: keep the default duration.
            Some(DurationSetting::Named(_)) | None => {}
        }

        if let Some(name) = &self.default_position {
            if let Some(position) = Position::from_name(name) {
                resolved.default_position = position;
            }
        }

        resolved
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

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            max_notifications: Some(3),
            default_duration: Some(DurationSetting::Millis(2000)),
            default_position: Some("bottom-left".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.max_notifications, config.max_notifications);
        assert_eq!(loaded.default_duration, config.default_duration);
        assert_eq!(loaded.default_position, config.default_position);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.max_notifications.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config {
            max_notifications: Some(8),
            default_duration: None,
            default_position: None,
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn resolve_uses_defaults_for_unset_fields() {
        let resolved = Config::default().resolve();
        assert_eq!(
            resolved.max_notifications,
            defaults::DEFAULT_MAX_NOTIFICATIONS
        );
        assert_eq!(
            resolved.default_duration,
            AutoDismiss::After(Duration::from_millis(defaults::DEFAULT_DURATION_MS))
        );
        assert_eq!(resolved.default_position, Position::TopRight);
    }

    #[test]
    fn resolve_rejects_zero_max_notifications() {
        let config = Config {
            max_notifications: Some(0),
            ..Config::default()
        };
        assert_eq!(
            config.resolve().max_notifications,
            defaults::DEFAULT_MAX_NOTIFICATIONS
        );
    }

    #[test]
    fn resolve_accepts_persistent_keyword() {
        let config = Config {
            default_duration: Some(DurationSetting::Named("persistent".to_string())),
            ..Config::default()
        };
        assert_eq!(config.resolve().default_duration, AutoDismiss::Never);
    }

    #[test]
    fn resolve_ignores_unknown_duration_keyword() {
        let config = Config {
            default_duration: Some(DurationSetting::Named("forever".to_string())),
            ..Config::default()
        };
        assert_eq!(
            config.resolve().default_duration,
            AutoDismiss::After(Duration::from_millis(defaults::DEFAULT_DURATION_MS))
        );
    }

    #[test]
    fn resolve_falls_back_on_unknown_position() {
        let config = Config {
            default_position: Some("middle-of-nowhere".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve().default_position, Position::TopRight);
    }

    #[test]
    fn resolve_parses_known_position() {
        let config = Config {
            default_position: Some("bottom-center".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve().default_position, Position::BottomCenter);
    }
}
