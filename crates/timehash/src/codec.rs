//! Interval codec: timestamp to timehash and back by recursive bisection.
//!
//! Encode and decode walk the same [`TimeDomain`] with the same
//! `TimeDomain::bisect` step, so a decoded hash always lands in the
//! sub-interval that produced it. Each character carries three bisections,
//! most significant bit first.
//!
//! Up to [`MAX_PRECISION`](crate::MAX_PRECISION) characters every window
//! edge and every window centre is an exact `f64`, so a decoded value is
//! never more than the reported error away from any instant it encodes.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::alphabet::{self, check_precision};
use crate::domain::TimeDomain;
use crate::error::{Result, TimeHashError};

const BIT_MASKS: [u8; 3] = [4, 2, 1];

/// Encode `timestamp` (epoch seconds) into a hash of `precision` characters.
///
/// A timestamp exactly on a bisection midpoint falls into the lower half.
/// Finite timestamps outside the domain saturate to the all-`0` or all-`f`
/// hash.
pub fn encode(timestamp: f64, precision: usize) -> Result<String> {
    check_precision(precision)?;
    if !timestamp.is_finite() {
        return Err(TimeHashError::InvalidTimestamp { value: timestamp });
    }

    let mut domain = TimeDomain::STANDARD;
    if !domain.contains(timestamp) {
        debug!(timestamp, "timestamp outside the hash domain, saturating");
    }

    let mut hash = String::with_capacity(precision);
    for _ in 0..precision {
        let mut digit = 0u8;
        for mask in BIT_MASKS {
            let upper = timestamp > domain.midpoint();
            if upper {
                digit |= mask;
            }
            domain.bisect(upper);
        }
        hash.push(alphabet::symbol(digit));
    }
    Ok(hash)
}

/// Decode `hash` into the centre of its window and the window's half-width.
pub fn decode_exactly(hash: &str) -> Result<(f64, f64)> {
    let domain = window_bounds(hash)?;
    Ok((domain.midpoint(), domain.width() / 2.0))
}

/// Decode `hash` into the centre of its window, dropping the error bound.
pub fn decode(hash: &str) -> Result<f64> {
    decode_exactly(hash).map(|(value, _)| value)
}

/// The closed sub-interval of the domain that `hash` denotes.
pub fn window_bounds(hash: &str) -> Result<TimeDomain> {
    let mut domain = TimeDomain::STANDARD;
    for digit in alphabet::digits(hash)? {
        for mask in BIT_MASKS {
            domain.bisect(digit & mask != 0);
        }
    }
    Ok(domain)
}

/// Encode a UTC instant, keeping sub-second precision.
pub fn encode_datetime(instant: &DateTime<Utc>, precision: usize) -> Result<String> {
    let seconds =
        instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    encode(seconds, precision)
}

/// Decode `hash` into the UTC instant at the centre of its window.
pub fn decode_datetime(hash: &str) -> Result<DateTime<Utc>> {
    let value = decode(hash)?;
    let secs = value.floor();
    let nanos = (((value - secs) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(secs as i64, nanos)
        .ok_or(TimeHashError::InvalidTimestamp { value })
}
