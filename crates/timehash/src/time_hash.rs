//! A validated hash together with the window it denotes.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{Result, TimeHashError};
use crate::navigator;

/// A parsed timehash with its decoded centre and half-width cached.
///
/// Serializes as the bare hash string. Ordering follows the window centres,
/// which are distinct for every hash of every precision, so it agrees with
/// equality on the string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeHash {
    code: String,
    center: f64,
    error: f64,
}

impl TimeHash {
    pub fn parse(hash: &str) -> Result<Self> {
        let (center, error) = codec::decode_exactly(hash)?;
        Ok(Self {
            code: hash.to_owned(),
            center,
            error,
        })
    }

    pub fn from_timestamp(timestamp: f64, precision: usize) -> Result<Self> {
        Self::parse(&codec::encode(timestamp, precision)?)
    }

    pub fn from_datetime(instant: &DateTime<Utc>, precision: usize) -> Result<Self> {
        Self::parse(&codec::encode_datetime(instant, precision)?)
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn precision(&self) -> usize {
        self.code.len()
    }

    /// Centre of the window in epoch seconds.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Half-width of the window in seconds.
    pub fn error(&self) -> f64 {
        self.error
    }

    pub fn start(&self) -> f64 {
        self.center - self.error
    }

    pub fn end(&self) -> f64 {
        self.center + self.error
    }

    pub fn contains(&self, timestamp: f64) -> bool {
        timestamp >= self.start() && timestamp <= self.end()
    }

    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        codec::decode_datetime(&self.code)
    }

    pub fn before(&self) -> Result<Self> {
        Self::parse(&navigator::before(&self.code)?)
    }

    pub fn after(&self) -> Result<Self> {
        Self::parse(&navigator::after(&self.code)?)
    }

    pub fn neighbors(&self) -> Result<[Self; 2]> {
        Ok([self.before()?, self.after()?])
    }

    pub fn expand(&self) -> Result<[Self; 3]> {
        Ok([self.before()?, self.clone(), self.after()?])
    }

    /// The window `steps` positions away; negative values move backwards.
    pub fn shift(&self, steps: i64) -> Result<Self> {
        Self::parse(&navigator::shift(&self.code, steps)?)
    }
}

impl PartialEq for TimeHash {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for TimeHash {}

impl Hash for TimeHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for TimeHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.center.total_cmp(&other.center)
    }
}

impl fmt::Display for TimeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for TimeHash {
    type Err = TimeHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeHash {
    type Error = TimeHashError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeHash> for String {
    fn from(value: TimeHash) -> Self {
        value.code
    }
}

impl AsRef<str> for TimeHash {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_caches_the_decoded_window() {
        let th: TimeHash = "af1cef0".parse().unwrap();
        let (center, error) = codec::decode_exactly("af1cef0").unwrap();
        assert_eq!(th.center(), center);
        assert_eq!(th.error(), error);
        assert_eq!(th.precision(), 7);
        assert_eq!(th.end() - th.start(), 2.0 * error);
        assert!(th.contains(center));
        assert!(!th.contains(th.end() + 1.0));
        assert_eq!(th.to_string(), "af1cef0");
    }

    #[test]
    fn parse_rejects_invalid_hashes() {
        assert!(matches!(
            "af1g".parse::<TimeHash>(),
            Err(TimeHashError::InvalidCharacter { .. })
        ));
        assert!(matches!(
            TimeHash::parse(""),
            Err(TimeHashError::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn ordering_follows_time_across_precisions() {
        let mut hashes: Vec<TimeHash> = ["b", "a0", "af", "0", "a", "f"]
            .iter()
            .map(|h| h.parse().unwrap())
            .collect();
        hashes.sort();
        let order: Vec<&str> = hashes.iter().map(TimeHash::as_str).collect();
        assert_eq!(order, ["0", "a0", "a", "af", "b", "f"]);
    }

    #[test]
    fn navigation_returns_adjacent_windows() {
        let th = TimeHash::parse("add0c").unwrap();
        let [previous, next] = th.neighbors().unwrap();
        assert_eq!(previous.end(), th.start());
        assert_eq!(next.start(), th.end());
        assert_eq!(th.shift(-1).unwrap(), previous);
        assert_eq!(th.shift(1).unwrap(), next);
        assert_eq!(th.expand().unwrap()[1], th);
    }

    #[test]
    fn serde_uses_the_bare_string() {
        let th = TimeHash::from_timestamp(1_516_933_969.4, 10).unwrap();
        let json = serde_json::to_string(&th).unwrap();
        assert_eq!(json, format!("\"{th}\""));

        let back: TimeHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, th);
        assert!(serde_json::from_str::<TimeHash>("\"xyz\"").is_err());
    }
}
