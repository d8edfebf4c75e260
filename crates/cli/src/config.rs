//! Configuration for the timehash command line tool
//!
//! Layering, lowest priority first: built-in defaults, an optional TOML file
//! (`--config` or `TIMEHASH_CONFIG`), environment overrides, then flags.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use timehash::{DEFAULT_PRECISION, MAX_PRECISION};

pub const CONFIG_PATH_VAR: &str = "TIMEHASH_CONFIG";
pub const PRECISION_VAR: &str = "TIMEHASH_PRECISION";
pub const OUTPUT_VAR: &str = "TIMEHASH_OUTPUT";
pub const LOG_LEVEL_VAR: &str = "TIMEHASH_LOG_LEVEL";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// How log lines are laid out on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Precision used by `encode` when no `--precision` flag is given
    pub precision: usize,
    /// Result rendering
    pub output: OutputFormat,
    /// Fallback filter when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl CliConfig {
    /// Resolve the configuration from an explicit path, `TIMEHASH_CONFIG`, and
    /// the environment.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_VAR).map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file; missing keys keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PRECISION_VAR) {
            if let Ok(parsed) = value.trim().parse::<usize>() {
                self.precision = parsed;
            }
        }

        if let Some(value) = lookup(OUTPUT_VAR) {
            if let Some(parsed) = OutputFormat::parse(&value) {
                self.output = parsed;
            }
        }

        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.log_level = trimmed.to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(ConfigError::Invalid(format!(
                "precision must be between 1 and {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty".into()));
        }
        Ok(())
    }
}
