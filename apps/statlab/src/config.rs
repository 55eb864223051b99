//! Configuration for the statlab binary
//!
//! Default model parameters, figure settings and the chart palette. Values
//! come from (highest priority first) command-line flags, the file given with
//! `--config`, `<config dir>/statlab/config.toml`, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use statlab_stats::ModelParams;
use statlab_viz::{FigureOptions, Palette, DEFAULT_TICK_LABEL_LIMIT};

use crate::error::{AppError, AppResult};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatlabConfig {
    /// Default model parameters
    pub model: ModelParams,
    /// Figure settings
    pub figure: FigureConfig,
    /// Chart colours
    pub palette: Palette,
}

/// Figure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// Label every outcome while the trial count is at most this
    pub tick_label_limit: u64,
    /// Heading of HTML reports
    pub report_title: String,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            tick_label_limit: DEFAULT_TICK_LABEL_LIMIT,
            report_title: "Binomial Distribution".to_string(),
        }
    }
}

impl StatlabConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit path, else the standard location, else defaults
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading configuration from {:?}", path);
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading configuration from {:?}", path);
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        self.model.validate()?;
        Ok(())
    }

    /// Styling handed to the chart builders
    pub fn figure_options(&self) -> FigureOptions {
        FigureOptions {
            palette: self.palette.clone(),
            tick_label_limit: self.figure.tick_label_limit,
        }
    }
}

/// `<config dir>/statlab/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("statlab").join("config.toml"))
}
