//! Configuration for ShapeKit
//!
//! Configuration is organized into logical sections:
//! - Display settings (number formatting)
//! - Console settings (menu behaviour)
//! - Logging settings (default log level)
//!
//! Files may be TOML or JSON. Every section and key is optional; missing
//! values fall back to their defaults. Shapes themselves are never stored.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SHAPEKIT_CONFIG";

/// Largest useful number of significant digits for an `f64`.
const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Number formatting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Significant digits for areas and perimeters
    pub significant_digits: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            significant_digits: 6,
        }
    }
}

/// Console behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Print the full menu before every choice prompt
    pub show_menu: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self { show_menu: true }
    }
}

/// Log level selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level used when `RUST_LOG` does not say otherwise
    pub level: LogLevel,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplaySettings,
    pub console: ConsoleSettings,
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| SettingsError::LoadError {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Default config file location (`<config dir>/shapekit/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapekit").join("config.toml"))
    }

    /// Load the config named by `SHAPEKIT_CONFIG`, else the default file if
    /// it exists, else the built-in defaults.
    pub fn load_or_default() -> SettingsResult<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        Self::load_or_default_from(explicit.as_deref(), Self::default_path().as_deref())
    }

    /// An explicit path must exist; the fallback path is optional.
    pub fn load_or_default_from(
        explicit: Option<&Path>,
        fallback: Option<&Path>,
    ) -> SettingsResult<Self> {
        if let Some(path) = explicit {
            tracing::info!(path = %path.display(), "loading config");
            return Self::load_from_file(path);
        }
        match fallback {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading config");
                Self::load_from_file(path)
            }
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let digits = self.display.significant_digits;
        if digits == 0 || digits > MAX_SIGNIFICANT_DIGITS {
            return Err(ConfigError::ValueOutOfRange {
                key: "display.significant_digits".to_string(),
                value: digits.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.display.significant_digits, 6);
        assert!(config.console.show_menu);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_digits_range() {
        let mut config = Config::new();
        config.display.significant_digits = 0;
        assert!(config.validate().is_err());
        config.display.significant_digits = 18;
        assert!(config.validate().is_err());
        config.display.significant_digits = 17;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[console]\nshow_menu = false\n").unwrap();
        assert!(!config.console.show_menu);
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_log_level_names() {
        let config: Config =
            toml::from_str("[logging]\nlevel = \"debug\"\njson = true\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.logging.json);
        assert_eq!(LogLevel::Trace.to_string(), "trace");
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = Config::default_path() {
            assert!(path.ends_with("shapekit/config.toml"));
        }
    }
}
