//! Library half of the `timehash` command line tool: configuration,
//! command handlers and output rendering.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{CliConfig, ConfigError, LogFormat, OutputFormat};
pub use output::Report;
