//! Error types for the statlab binary

use std::path::PathBuf;

use thiserror::Error;

use statlab_stats::StatsError;
use statlab_viz::VizError;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file could not be parsed
    #[error("Invalid configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Config could not be written back out
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// File read or write failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Model parameters rejected
    #[error("{0}")]
    Stats(#[from] StatsError),

    /// Rendering failed
    #[error("{0}")]
    Viz(#[from] VizError),
}

/// Result type alias for CLI operations
pub type AppResult<T> = Result<T, AppError>;
