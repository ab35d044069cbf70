//! Game settings and tuning
//!
//! Loaded from an optional JSON file. Missing or invalid files fall back to
//! the defaults in [`crate::consts`] and are never fatal.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Tunable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Physics ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity on landing (must be negative)
    pub bounce_velocity: f32,
    /// Horizontal speed while a direction is held
    pub horizontal_speed: f32,
    pub character_size: f32,

    // === Platform stream ===
    pub platform_width: f32,
    pub platform_height: f32,
    pub min_platform_distance: f32,
    pub max_platform_distance: f32,
    /// Platforms generated before a session starts
    pub initial_platforms: usize,

    // === Camera ===
    pub camera_smoothing: f32,

    // === Session loop ===
    /// Ticks the game over screen is shown before returning to start
    pub game_over_ticks: u32,
    /// Ticks per second when running in real time
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            bounce_velocity: BOUNCE_VELOCITY,
            horizontal_speed: HORIZONTAL_SPEED,
            character_size: CHARACTER_SIZE,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            min_platform_distance: MIN_PLATFORM_DISTANCE,
            max_platform_distance: MAX_PLATFORM_DISTANCE,
            initial_platforms: INITIAL_PLATFORMS,

            camera_smoothing: CAMERA_SMOOTHING,

            game_over_ticks: GAME_OVER_TICKS,
            tick_rate: TICK_RATE,
        }
    }
}

impl Settings {
    /// Check that the settings describe a playable world
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err("screen dimensions must be positive".into());
        }
        if self.platform_width <= 0.0 || self.platform_height <= 0.0 {
            return Err("platform dimensions must be positive".into());
        }
        if self.platform_width > self.screen_width {
            return Err("platform_width exceeds screen_width".into());
        }
        if self.character_size <= 0.0 || self.character_size > self.screen_width {
            return Err("character_size must fit the screen".into());
        }
        if self.min_platform_distance <= 0.0 {
            return Err("min_platform_distance must be positive".into());
        }
        if self.min_platform_distance > self.max_platform_distance {
            return Err("min_platform_distance exceeds max_platform_distance".into());
        }
        if self.bounce_velocity >= 0.0 {
            return Err("bounce_velocity must be negative (upward)".into());
        }
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err("camera_smoothing must be in (0, 1]".into());
        }
        if self.initial_platforms < 2 {
            return Err("initial_platforms must be at least 2".into());
        }
        if self.tick_rate == 0 {
            return Err("tick_rate must be positive".into());
        }
        Ok(())
    }

    /// Read and validate settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigurationMissing {
                path: path.to_path_buf(),
            },
            _ => Error::InvalidConfiguration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        let settings: Settings =
            serde_json::from_str(&json).map_err(|e| Error::InvalidConfiguration {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        settings
            .validate()
            .map_err(|reason| Error::InvalidConfiguration {
                path: path.to_path_buf(),
                reason,
            })?;

        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::error!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Wall-clock duration of one tick
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("frog-jump-settings-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_spacing() {
        let settings = Settings {
            min_platform_distance: 300.0,
            max_platform_distance: 200.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_degenerate_spacing() {
        let settings = Settings {
            min_platform_distance: 150.0,
            max_platform_distance: 150.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_upward_gravity_bounce() {
        let settings = Settings {
            bounce_velocity: 15.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_configuration_missing() {
        let dir = scratch_dir("missing");
        let err = Settings::from_file(&dir.join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { .. }));
        assert_eq!(Settings::load(Some(&dir.join("nope.json"))), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "gravity": 0.8, "initial_platforms": 8 }"#).unwrap();

        let settings = Settings::load(Some(&path));
        assert_eq!(settings.gravity, 0.8);
        assert_eq!(settings.initial_platforms, 8);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = scratch_dir("invalid");
        let path = dir.join("settings.json");
        std::fs::write(&path, r#"{ "camera_smoothing": 2.0 }"#).unwrap();
        assert!(matches!(
            Settings::from_file(&path),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert_eq!(Settings::load(Some(&path)), Settings::default());

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load(Some(&path)), Settings::default());
    }

    #[test]
    fn test_full_file_overrides_every_field() {
        let dir = scratch_dir("full");
        let path = dir.join("settings.json");
        let settings = Settings {
            horizontal_speed: 7.0,
            initial_platforms: 4,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&settings).unwrap()).unwrap();
        assert_eq!(Settings::load(Some(&path)), settings);
    }
}
