// Rust guideline compliant 2026-02-06

//! Configuration management for the ETA printer.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Stream the status line is printed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
}

/// Configuration for progress display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the processed items, shown next to the speed.
    #[serde(default)]
    pub element_name: Option<String>,

    /// Stream receiving the status line.
    #[serde(default)]
    pub output: OutputTarget,

    /// Log level for diagnostics (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Default log level.
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            element_name: None,
            output: OutputTarget::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `path`, when given and present
    /// 3. Environment variables with `ETAPRINTER_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&content)?
            }
            _ => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML for this schema.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid config file: {}", e)))
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ETAPRINTER_ELEMENT_NAME` - Item name shown next to the speed
    /// - `ETAPRINTER_OUTPUT` - Output stream (stdout/stderr)
    /// - `ETAPRINTER_LOG_LEVEL` - Log level (error/warn/info/debug)
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ETAPRINTER_ELEMENT_NAME") {
            self.element_name = (!val.is_empty()).then_some(val);
        }

        if let Ok(val) = std::env::var("ETAPRINTER_OUTPUT") {
            self.output = match val.as_str() {
                "stdout" => OutputTarget::Stdout,
                "stderr" => OutputTarget::Stderr,
                _ => {
                    return Err(Error::Config(
                        "ETAPRINTER_OUTPUT must be stdout or stderr".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("ETAPRINTER_LOG_LEVEL") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is unknown or the element name is blank.
    pub fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" => {}
            other => {
                return Err(Error::Config(format!(
                    "log_level must be error, warn, info, or debug, got '{}'",
                    other
                )))
            }
        }

        if let Some(name) = &self.element_name {
            if name.trim().is_empty() {
                return Err(Error::Config("element_name cannot be blank".to_string()));
            }
        }

        Ok(())
    }
}
