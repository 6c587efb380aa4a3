//! TOML configuration for a [`PieTimerButton`](crate::widget::widgets::PieTimerButton).
//!
//! Colors are written as `#RRGGBB` or `#RRGGBBAA` hex strings.
//!
//! ```toml
//! background = "#80808000"
//! fill = "#FF0000"
//! cycle_duration_ms = 2500
//! sweep_easing = "ease-out"
//! width = 450
//! height = 450
//! label = "Start"
//! ```

use std::path::{Path, PathBuf};

use pietimer_render::{Color, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widget::animation::Easing;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML text is malformed or has fields of the wrong type.
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A color field is not a valid hex color.
    #[error("invalid color for `{field}`: {value:?}")]
    InvalidColor { field: &'static str, value: String },

    /// The cycle duration is zero.
    #[error("cycle duration must be greater than zero, got {0} ms")]
    InvalidDuration(u64),

    /// Width or height is zero.
    #[error("invalid widget size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Construction parameters for a pie timer button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieTimerConfig {
    /// Background color as a hex string.
    pub background: String,
    /// Pie fill color as a hex string.
    pub fill: String,
    /// Length of one sweep plus fade, in milliseconds.
    pub cycle_duration_ms: u64,
    /// Curve of the sweep: `linear`, `ease-in`, `ease-out` or `ease-in-out`.
    pub sweep_easing: Easing,
    pub width: u32,
    pub height: u32,
    /// Text shown while the button is idle.
    pub label: String,
}

impl Default for PieTimerConfig {
    fn default() -> Self {
        Self {
            background: "#80808000".to_owned(),
            fill: "#FF0000".to_owned(),
            cycle_duration_ms: 5000,
            sweep_easing: Easing::Linear,
            width: 450,
            height: 450,
            label: String::new(),
        }
    }
}

impl PieTimerConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(target: "pietimer::config", path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Render the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the configuration to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> ConfigResult<()> {
        self.background_color()?;
        self.fill_color()?;
        if self.cycle_duration_ms == 0 {
            return Err(ConfigError::InvalidDuration(self.cycle_duration_ms));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// The parsed background color.
    pub fn background_color(&self) -> ConfigResult<Color> {
        parse_color("background", &self.background)
    }

    /// The parsed fill color.
    pub fn fill_color(&self) -> ConfigResult<Color> {
        parse_color("fill", &self.fill)
    }

    /// The configured widget size.
    pub fn size(&self) -> Size {
        Size::from((self.width, self.height))
    }
}

fn parse_color(field: &'static str, value: &str) -> ConfigResult<Color> {
    Color::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PieTimerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.fill_color().unwrap(), Color::RED);
        assert_eq!(config.background_color().unwrap().alpha(), 0.0);
        assert_eq!(config.size(), Size::new(450.0, 450.0));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = PieTimerConfig::from_toml_str("cycle_duration_ms = 2500\n").unwrap();
        assert_eq!(config.cycle_duration_ms, 2500);
        assert_eq!(config.fill, "#FF0000");
        assert_eq!(config.width, 450);
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = PieTimerConfig::from_toml_str("cycle_duration_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDuration(0)));
    }

    #[test]
    fn test_rejects_negative_duration_at_parse() {
        let err = PieTimerConfig::from_toml_str("cycle_duration_ms = -5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_accepts_largest_toml_duration() {
        let config =
            PieTimerConfig::from_toml_str("cycle_duration_ms = 9223372036854775807").unwrap();
        assert_eq!(config.cycle_duration_ms, i64::MAX as u64);
    }

    #[test]
    fn test_parses_sweep_easing() {
        let config = PieTimerConfig::from_toml_str("sweep_easing = \"ease-in-out\"").unwrap();
        assert_eq!(config.sweep_easing, Easing::EaseInOut);
        assert_eq!(PieTimerConfig::default().sweep_easing, Easing::Linear);

        let err = PieTimerConfig::from_toml_str("sweep_easing = \"bounce\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = PieTimerConfig::from_toml_str("fill = \"red\"").unwrap_err();
        match err {
            ConfigError::InvalidColor { field, value } => {
                assert_eq!(field, "fill");
                assert_eq!(value, "red");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = PieTimerConfig::from_toml_str("width = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSize { width: 0, height: 450 }));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(PieTimerConfig::from_toml_str("colour = \"#FFFFFF\"").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pietimer.toml");
        let config = PieTimerConfig {
            label: "Brew".to_owned(),
            cycle_duration_ms: 1200,
            sweep_easing: Easing::EaseOut,
            ..PieTimerConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(PieTimerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PieTimerConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
