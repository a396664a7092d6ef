//! # ShapeKit
//!
//! An interactive console for creating, inspecting and transforming 2D
//! shapes on an integer grid.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Points, scaling arithmetic, number formatting, errors
//! 2. **shapekit-designer** - Rectangle, Square, Circle, Triangle and the shape list
//! 3. **shapekit-settings** - TOML/JSON configuration
//! 4. **shapekit-ui** - Menu-driven console over any reader and writer
//! 5. **shapekit** - Main binary that wires stdin/stdout to the console

pub use shapekit_core::{format_real, Point, ScaleMode, ShapeError, ShapeResult};
pub use shapekit_designer::{
    Circle, Rectangle, Shape, ShapeGeometry, ShapeList, ShapeType, Square, Triangle,
};
pub use shapekit_settings::{Config, LogLevel, LoggingSettings};
pub use shapekit_ui::{Console, ConsoleOptions, MenuChoice};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

fn level_directive(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

/// Initialize logging from the `[logging]` config section
///
/// Log lines go to stderr so they never mix with the console transcript.
/// `RUST_LOG` directives are honoured alongside the configured level.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::from_default_env().add_directive(level_directive(settings.level).into());

    if settings.json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
