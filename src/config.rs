//! Configuration management for the address book driver.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How the driver prints the contents of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Contact name: ..., phones: ...` line per record
    #[default]
    Text,
    /// Pretty-printed JSON object keyed by name
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be 'text' or 'json', got: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for the address book driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Output format for book listings (default: text)
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: "text")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_vars()
    }

    /// Load configuration from a specific env file, then the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFile` if the file cannot be read or parsed,
    /// or `ConfigError::InvalidValue` for an unusable value.
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_vars()
    }

    fn from_vars() -> ConfigResult<Self> {
        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => "info".to_string(),
        };

        let output_format = match env::var("ADDRESS_BOOK_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config {
            log_level,
            output_format,
        })
    }

    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            })
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            output_format: OutputFormat::Text,
        }
    }
}
