//! Configuration file loading for the solver.
//!
//! Settings come from a TOML file, `etude.toml` in the current directory by
//! default. Command-line flags take precedence over anything set here.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SolverConfig {
    /// Helpmate solutions to collect; 0 collects all. Defaults to 1.
    #[serde(default = "default_num_solutions")]
    pub num_solutions: usize,
    /// Output format. Defaults to text.
    #[serde(default)]
    pub format: OutputFormat,
    /// Tracing filter used when `RUST_LOG` is unset. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_num_solutions() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            num_solutions: default_num_solutions(),
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl SolverConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`Self::config_path()`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, or
    /// [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = std::fs::read_to_string(&path)
            .map_err(|source| ConfigError::ReadError { path, source })?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration file path, `etude.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("etude.toml")
    }
}
