//! Persisted UI Settings
//!
//! Window dimensions live in a TOML file in the platform config directory.
//! The file is created with defaults on first run; a malformed file is
//! reported by the caller and the defaults are used instead.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};

const SETTINGS_FILE: &str = "shopfront.toml";

/// Persisted UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Main window width in pixels
    pub window_width: f32,
    /// Main window height in pixels
    pub window_height: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl UiSettings {
    /// Parse settings from TOML.
    ///
    /// An empty document yields the defaults; missing fields fall back to
    /// their defaults; parsed dimensions are clamped to the window minimums.
    pub fn from_toml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = toml::from_str(raw)?;
        Ok(settings.clamped())
    }

    /// Serialize settings to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Load settings from the config file, creating it with defaults on
    /// first run.
    pub fn try_load() -> Result<Self> {
        let path = settings_file_path()?;

        if !path.exists() {
            let defaults = Self::default();
            defaults.save()?;
            info!(path = ?path, "Created default settings file");
            return Ok(defaults);
        }

        info!(path = ?path, "Loading settings file");
        let raw = fs::read_to_string(&path)?;
        Self::from_toml(&raw).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })
    }

    /// Write settings to the config file.
    pub fn save(&self) -> Result<()> {
        let path = settings_file_path()?;
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Clamp window dimensions to sane values.
    fn clamped(mut self) -> Self {
        if !self.window_width.is_finite() {
            self.window_width = DEFAULT_WINDOW_WIDTH;
        }
        if !self.window_height.is_finite() {
            self.window_height = DEFAULT_WINDOW_HEIGHT;
        }
        self.window_width = self.window_width.max(MIN_WINDOW_WIDTH);
        self.window_height = self.window_height.max(MIN_WINDOW_HEIGHT);
        self
    }
}

/// Path of the settings file inside the platform config directory
///
/// - **Linux**: `~/.config/shopfront/` or `$XDG_CONFIG_HOME/shopfront/`
/// - **macOS**: `~/Library/Application Support/com.shopfront.shopfront/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\shopfront\shopfront\config\`
fn settings_file_path() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "shopfront", "shopfront") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = UiSettings::from_toml("").expect("empty settings should parse");
        assert_eq!(settings, UiSettings::default());

        let settings = UiSettings::from_toml("   \n  ").expect("blank settings should parse");
        assert_eq!(settings, UiSettings::default());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings =
            UiSettings::from_toml("window_width = 900.0\n").expect("partial settings should parse");
        assert_eq!(settings.window_width, 900.0);
        assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let result = UiSettings::from_toml("window_width = [not a number");
        assert!(result.is_err());
    }

    #[test]
    fn test_dimensions_are_clamped_to_minimums() {
        let settings = UiSettings::from_toml("window_width = 10.0\nwindow_height = -50.0\n")
            .expect("tiny settings should parse");
        assert_eq!(settings.window_width, MIN_WINDOW_WIDTH);
        assert_eq!(settings.window_height, MIN_WINDOW_HEIGHT);
    }

    #[test]
    fn test_non_finite_dimensions_fall_back_to_defaults() {
        let settings = UiSettings::from_toml("window_width = inf\nwindow_height = nan\n")
            .expect("non-finite settings should parse");
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn test_settings_round_trip_through_toml() {
        let settings = UiSettings {
            window_width: 1280.0,
            window_height: 800.0,
        };
        let raw = settings.to_toml().expect("settings should serialize");
        let parsed = UiSettings::from_toml(&raw).expect("serialized settings should parse");
        assert_eq!(parsed, settings);
    }
}
