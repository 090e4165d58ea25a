//! Game settings
//!
//! Settings are plain data with serde support so games can ship a TOML
//! file next to the binary. Validation runs before the engine builds its
//! viewport, so bad dimensions fail at startup rather than mid-frame.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file could not be read
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be parsed
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A window dimension was zero
    #[error("window dimensions must be positive: {width}x{height}")]
    ZeroDimension {
        /// The rejected width
        width: u32,
        /// The rejected height
        height: u32,
    },

    /// The tick rate was zero, negative, or not finite
    #[error("tick rate must be a positive number of ticks per second: {0}")]
    InvalidTickRate(f64),
}

/// The basic settings used for a game
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Window title
    pub title: String,

    /// Viewport width in pixels
    pub width: u32,

    /// Viewport height in pixels
    pub height: u32,

    /// Fixed tick rate in ticks per second
    pub tick_rate: f64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            title: "Ember2D Game".to_string(),
            width: 800,
            height: 600,
            tick_rate: 60.0,
        }
    }
}

impl GameSettings {
    /// Load and validate settings from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: GameSettings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    /// Returns the first violated invariant: positive dimensions,
    /// positive finite tick rate.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 || self.height == 0 {
            return Err(SettingsError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(SettingsError::InvalidTickRate(self.tick_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let settings = GameSettings {
            width: 0,
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_bad_tick_rate_rejected() {
        for rate in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let settings = GameSettings {
                tick_rate: rate,
                ..GameSettings::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(SettingsError::InvalidTickRate(_))
            ));
        }
    }

    #[test]
    fn test_parse_from_toml() {
        let settings: GameSettings =
            toml::from_str("title = \"Pong\"\nwidth = 1024\nheight = 768\ntick_rate = 120.0\n")
                .unwrap();
        assert_eq!(settings.title, "Pong");
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.height, 768);
        assert!((settings.tick_rate - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: GameSettings = toml::from_str("title = \"Pong\"\n").unwrap();
        assert_eq!(settings.width, 800);
        assert_eq!(settings.height, 600);
    }
}
