//! Result rendering for the command line tool.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use timehash::PrecisionRow;

use crate::config::OutputFormat;

/// Outcome of one command, printable as text or JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Encoded {
        hash: String,
        timestamp: f64,
        precision: usize,
    },
    Decoded {
        hash: String,
        center: f64,
        error: f64,
        start: f64,
        end: f64,
        utc: Option<DateTime<Utc>>,
    },
    Hashes {
        label: String,
        hashes: Vec<String>,
    },
    Validation {
        hash: String,
        valid: bool,
        reason: Option<String>,
    },
    Windows {
        rows: Vec<PrecisionRow>,
    },
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        match self {
            Report::Encoded { hash, .. } => hash.clone(),
            Report::Decoded {
                hash,
                center,
                error,
                start,
                end,
                utc,
            } => {
                let mut out = String::new();
                let _ = writeln!(out, "hash:   {hash}");
                let _ = writeln!(out, "center: {center:.6}");
                let _ = writeln!(out, "error:  +/- {error:.6} s");
                let _ = writeln!(out, "window: [{start:.6}, {end:.6}]");
                if let Some(utc) = utc {
                    let _ = write!(
                        out,
                        "utc:    {}",
                        utc.to_rfc3339_opts(SecondsFormat::Micros, true)
                    );
                }
                out.trim_end().to_string()
            }
            Report::Hashes { hashes, .. } => hashes.join("\n"),
            Report::Validation { hash, valid, reason } => match (valid, reason) {
                (true, _) => format!("{hash}: valid"),
                (false, Some(reason)) => format!("{hash}: invalid ({reason})"),
                (false, None) => format!("{hash}: invalid"),
            },
            Report::Windows { rows } => {
                let mut out = String::from("precision        +/- error (s)           window (s)");
                for row in rows {
                    let _ = write!(
                        out,
                        "\n{:>9} {:>20.9} {:>20.9}",
                        row.precision, row.error_seconds, row.window_seconds
                    );
                }
                out
            }
        }
    }
}
