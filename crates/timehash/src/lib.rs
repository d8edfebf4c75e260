//! Timehash Library
//!
//! Encodes an instant into a short string whose length sets its precision,
//! the way a geohash does for a point on a map. Each character narrows the
//! window by a factor of eight.
//!
//! # Features
//! - Encode/decode between epoch seconds and hashes of 1 to 10 characters
//! - Exact error bound for every decoded hash
//! - Neighbor navigation by base-8 carry propagation, no float round trip
//! - Explicit errors at the domain edges
//! - `TimeHash` value type with serde support
//!
//! # Stable constants
//! Hashes interoperate only between implementations sharing the alphabet
//! `01abcdef` and the domain `[0, 4_039_372_800]` epoch seconds
//! (1970-01-01 to 2098-01-01 UTC).
//!
//! | precision | ± error |
//! |-----------|---------|
//! | 1 | 8 years |
//! | 4 | 5.707 days |
//! | 7 | 16.05 minutes |
//! | 10 | 1.88098 seconds |
//!
//! ```
//! let hash = timehash::encode(1_464_332_157.2, 7).unwrap();
//! assert_eq!(hash, "af1cef0");
//! assert_eq!(timehash::after(&hash).unwrap(), "af1cef1");
//! ```

pub mod alphabet;
pub mod codec;
pub mod counter;
pub mod domain;
pub mod error;
pub mod navigator;
pub mod time_hash;

/// Longest supported hash.
///
/// The domain width is `986175 · 2^12`, so a bisection point at depth `d`
/// needs about `20 + d` significant bits. At 10 characters the window edges
/// (depth 30) and the decoded centre (depth 31) are still exact in `f64`;
/// from 12 characters on, edges round and decoded values can leave their
/// own window.
pub const MAX_PRECISION: usize = 10;

/// Precision used when callers do not pick one (±1.88098 s).
pub const DEFAULT_PRECISION: usize = 10;

pub use alphabet::{validate, ALPHABET, HIGH_SYMBOL, LOW_SYMBOL};
pub use codec::{decode, decode_datetime, decode_exactly, encode, encode_datetime, window_bounds};
pub use counter::HashCounter;
pub use domain::{precision_table, PrecisionRow, TimeDomain, DOMAIN_END, DOMAIN_START};
pub use error::{Result, TimeHashError};
pub use navigator::{after, before, expand, neighbors, shift, span, Span};
pub use time_hash::TimeHash;
