//! ShapeKit Settings Crate
//!
//! Handles application configuration: display precision, console behaviour
//! and logging defaults.

pub mod config;
pub mod error;

pub use config::{Config, ConsoleSettings, DisplaySettings, LogLevel, LoggingSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
