// error.rs - Error types for the chart core

use std::path::PathBuf;

use thiserror::Error;

use crate::geometry::{MAX_DIMENSION, MIN_DIMENSION};

/// Errors raised by grid and color operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// A resize asked for a width or height outside the allowed range.
    #[error(
        "grid size must be between {min} and {max} (requested {width}x{height})",
        min = MIN_DIMENSION,
        max = MAX_DIMENSION
    )]
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A drawing size (cell size, border multiplier, line width) is out of
    /// the range the renderer can rasterize.
    #[error("invalid {field}: {value}")]
    InvalidStyle {
        field: &'static str,
        value: String,
    },

    /// A color string was not of the form `#rrggbb`.
    #[error("invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

/// Result alias for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(#[from] ChartError),
}
