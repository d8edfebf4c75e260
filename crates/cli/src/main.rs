//! Timehash Command Line Interface
//!
//! Encode instants into timehashes, decode them back, and walk between
//! neighboring windows.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timehash_cli::{commands, CliConfig, LogFormat, OutputFormat, Report};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "timehash")]
#[command(about = "Variable-precision time-window hashes", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (falls back to TIMEHASH_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode epoch seconds (default: now) into a timehash
    Encode {
        /// Epoch seconds, fractional allowed
        #[arg(allow_hyphen_values = true)]
        timestamp: Option<f64>,
        /// Number of characters in the hash
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// Encode an RFC 3339 date-time into a timehash
    EncodeDate {
        /// e.g. 2016-05-27T06:55:57Z
        datetime: String,
        /// Number of characters in the hash
        #[arg(short, long)]
        precision: Option<usize>,
    },
    /// Decode a timehash into its centre and error bound
    Decode { hash: String },
    /// Hash of the preceding window
    Before { hash: String },
    /// Hash of the following window
    After { hash: String },
    /// Hashes of the preceding and following windows
    Neighbors { hash: String },
    /// Preceding, given and following hashes
    Expand { hash: String },
    /// Hash a number of windows away (negative moves back)
    Shift {
        hash: String,
        #[arg(allow_hyphen_values = true)]
        steps: i64,
    },
    /// Every hash from START through END
    Span {
        start: String,
        end: String,
        /// Refuse spans with more windows than this
        #[arg(long, default_value_t = 10_000)]
        limit: u64,
    },
    /// Error and window width for each precision
    Windows,
    /// Check whether a string is a well-formed timehash
    Validate { hash: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if cli.json {
        config.output = OutputFormat::Json;
    }
    init_logging(&config);

    let report = run(cli.command, &config)?;
    println!("{}", report.render(config.output)?);

    if let Report::Validation { valid: false, .. } = report {
        std::process::exit(1);
    }
    Ok(())
}

fn run(command: Commands, config: &CliConfig) -> Result<Report> {
    match command {
        Commands::Encode {
            timestamp,
            precision,
        } => commands::encode(timestamp, precision.unwrap_or(config.precision)),
        Commands::EncodeDate {
            datetime,
            precision,
        } => commands::encode_date(&datetime, precision.unwrap_or(config.precision)),
        Commands::Decode { hash } => commands::decode(&hash),
        Commands::Before { hash } => commands::before(&hash),
        Commands::After { hash } => commands::after(&hash),
        Commands::Neighbors { hash } => commands::neighbors(&hash),
        Commands::Expand { hash } => commands::expand(&hash),
        Commands::Shift { hash, steps } => commands::shift(&hash, steps),
        Commands::Span { start, end, limit } => commands::span(&start, &end, limit),
        Commands::Windows => Ok(commands::windows()),
        Commands::Validate { hash } => Ok(commands::validate(&hash)),
    }
}

fn init_logging(config: &CliConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
