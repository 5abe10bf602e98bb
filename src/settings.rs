//! Game settings and preferences
//!
//! Loaded from an optional JSON file. Missing keys fall back to defaults.
//! Nothing is ever written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tuning::Tuning;

/// How the paddle is steered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Paddle centers on the pointer every frame
    #[default]
    Pointer,
    /// Left/A and Right/D move the paddle while held
    Keyboard,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Frame loop ===
    /// Frame rate the platform should pace to
    pub target_fps: u32,
    /// Longest frame time handed to the simulation (seconds)
    pub max_frame_dt: f32,

    // === Input ===
    pub control: ControlScheme,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Demo ===
    /// Seed for the autopilot's aiming jitter
    pub autopilot_seed: u64,

    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: 60,
            max_frame_dt: 0.1,

            control: ControlScheme::Pointer,

            show_fps: true,

            autopilot_seed: 0x5eed,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 {
            return Err(ConfigError::invalid("target_fps must be positive"));
        }
        if self.max_frame_dt <= 0.0 {
            return Err(ConfigError::invalid("max_frame_dt must be positive"));
        }
        self.tuning.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial() {
        let settings =
            Settings::from_json(r#"{"control": "Keyboard", "tuning": {"brick_columns": 8}}"#)
                .unwrap();
        assert_eq!(settings.control, ControlScheme::Keyboard);
        assert_eq!(settings.tuning.brick_columns, 8);
        assert_eq!(settings.tuning.brick_rows, 5);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = Settings::from_json(r#"{"tuning": {"brick_rows": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            show_fps: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/nonexistent/brick-breaker.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(
            Settings::load_or_default("/nonexistent/brick-breaker.json"),
            Settings::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("brick-breaker-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"target_fps": 30, "show_fps": false}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.target_fps, 30);
        assert!(!settings.show_fps);
        assert_eq!(settings.tuning, Tuning::default());
        let _ = std::fs::remove_file(&path);
    }
}
