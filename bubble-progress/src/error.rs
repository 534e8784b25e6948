//! Error types.

use thiserror::Error;

/// Errors surfaced by the widget's public entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("percentage {value} not between 0 and 100")]
    InvalidArgument { value: i32 },
}

/// Errors while loading or validating a [`crate::WidgetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("failed to encode png: {0}")]
    Png(String),
}
