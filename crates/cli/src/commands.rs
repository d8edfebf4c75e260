//! Command handlers. Each one maps library calls onto a [`Report`].

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::output::Report;

pub fn encode(timestamp: Option<f64>, precision: usize) -> Result<Report> {
    let timestamp = match timestamp {
        Some(t) => t,
        None => {
            let now = Utc::now();
            debug!(%now, "no timestamp given, encoding the current time");
            now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) * 1e-9
        }
    };
    let hash = timehash::encode(timestamp, precision)
        .with_context(|| format!("failed to encode {timestamp}"))?;
    Ok(Report::Encoded {
        hash,
        timestamp,
        precision,
    })
}

pub fn encode_date(input: &str, precision: usize) -> Result<Report> {
    let instant = DateTime::parse_from_rfc3339(input.trim())
        .with_context(|| format!("'{input}' is not an RFC 3339 date-time"))?
        .with_timezone(&Utc);
    let hash = timehash::encode_datetime(&instant, precision)?;
    Ok(Report::Encoded {
        hash,
        timestamp: instant.timestamp() as f64
            + f64::from(instant.timestamp_subsec_nanos()) * 1e-9,
        precision,
    })
}

pub fn decode(hash: &str) -> Result<Report> {
    let parsed = timehash::TimeHash::parse(hash)
        .with_context(|| format!("failed to decode '{hash}'"))?;
    Ok(Report::Decoded {
        hash: parsed.to_string(),
        center: parsed.center(),
        error: parsed.error(),
        start: parsed.start(),
        end: parsed.end(),
        utc: parsed.to_datetime().ok(),
    })
}

pub fn before(hash: &str) -> Result<Report> {
    let previous = timehash::before(hash)?;
    Ok(hashes("before", vec![previous]))
}

pub fn after(hash: &str) -> Result<Report> {
    let next = timehash::after(hash)?;
    Ok(hashes("after", vec![next]))
}

pub fn neighbors(hash: &str) -> Result<Report> {
    Ok(hashes("neighbors", timehash::neighbors(hash)?.to_vec()))
}

pub fn expand(hash: &str) -> Result<Report> {
    Ok(hashes("expand", timehash::expand(hash)?.to_vec()))
}

pub fn shift(hash: &str, steps: i64) -> Result<Report> {
    let moved = timehash::shift(hash, steps)?;
    Ok(hashes("shift", vec![moved]))
}

/// Hashes between `start` and `end`, refusing spans longer than `limit`.
pub fn span(start: &str, end: &str, limit: u64) -> Result<Report> {
    let span = timehash::span(start, end)?;
    if span.remaining() > limit {
        anyhow::bail!(
            "span {start}..{end} covers {} windows, above the limit of {limit}",
            span.remaining()
        );
    }
    info!(start, end, windows = span.remaining(), "listing span");
    Ok(hashes("span", span.collect()))
}

pub fn validate(hash: &str) -> Report {
    match timehash::alphabet::digits(hash) {
        Ok(_) => Report::Validation {
            hash: hash.to_string(),
            valid: true,
            reason: None,
        },
        Err(err) => Report::Validation {
            hash: hash.to_string(),
            valid: false,
            reason: Some(err.to_string()),
        },
    }
}

pub fn windows() -> Report {
    Report::Windows {
        rows: timehash::precision_table(),
    }
}

fn hashes(label: &str, hashes: Vec<String>) -> Report {
    Report::Hashes {
        label: label.to_string(),
        hashes,
    }
}
