//! The bounded span of epoch seconds that every timehash subdivides.

use serde::{Deserialize, Serialize};

use crate::alphabet::RADIX;
use crate::MAX_PRECISION;

/// 1970-01-01T00:00:00Z in epoch seconds.
pub const DOMAIN_START: f64 = 0.0;

/// 2098-01-01T00:00:00Z in epoch seconds.
pub const DOMAIN_END: f64 = 4_039_372_800.0;

/// A closed interval of epoch seconds bisected by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeDomain {
    pub lower: f64,
    pub upper: f64,
}

impl TimeDomain {
    /// The domain shared by encode and decode. Hash strings are only
    /// interoperable between implementations that agree on these bounds.
    pub const STANDARD: TimeDomain = TimeDomain {
        lower: DOMAIN_START,
        upper: DOMAIN_END,
    };

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.lower && t <= self.upper
    }

    /// Half-width of a window at `precision`: `width / 2^(3p + 1)`.
    pub fn error(&self, precision: usize) -> f64 {
        self.window(precision) / 2.0
    }

    /// Full width of a window at `precision`: `width / 8^p`.
    pub fn window(&self, precision: usize) -> f64 {
        self.width() / f64::from(RADIX).powi(precision as i32)
    }

    /// Smallest precision whose windows are no wider than `seconds`,
    /// clamped to the supported range.
    pub fn precision_for_window(&self, seconds: f64) -> usize {
        (1..=MAX_PRECISION)
            .find(|&p| self.window(p) <= seconds)
            .unwrap_or(MAX_PRECISION)
    }

    /// Narrow to the lower or upper half.
    pub(crate) fn bisect(&mut self, upper_half: bool) {
        let mid = self.midpoint();
        if upper_half {
            self.lower = mid;
        } else {
            self.upper = mid;
        }
    }
}

impl Default for TimeDomain {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One row of the precision table: how much time a hash of this length pins
/// down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionRow {
    pub precision: usize,
    pub error_seconds: f64,
    pub window_seconds: f64,
}

/// Error and window widths for every supported precision.
pub fn precision_table() -> Vec<PrecisionRow> {
    let domain = TimeDomain::STANDARD;
    (1..=MAX_PRECISION)
        .map(|precision| PrecisionRow {
            precision,
            error_seconds: domain.error(precision),
            window_seconds: domain.window(precision),
        })
        .collect()
}
