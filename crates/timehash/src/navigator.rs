//! Hash navigator: adjacent windows without going through timestamps.
//!
//! Stepping works on the [`HashCounter`] digits, so it never picks up the
//! floating-point drift a decode, add, re-encode cycle would.

use tracing::{debug, trace};

use crate::counter::{Edge, HashCounter};
use crate::error::{Result, TimeHashError};

fn edge_error(edge: Edge, hash: &str) -> TimeHashError {
    debug!(hash, ?edge, "navigation ran past the domain edge");
    match edge {
        Edge::Lower => TimeHashError::DomainUnderflow { hash: hash.into() },
        Edge::Upper => TimeHashError::DomainOverflow { hash: hash.into() },
    }
}

/// Hash of the window immediately preceding `hash`, same precision.
pub fn before(hash: &str) -> Result<String> {
    let mut counter = HashCounter::parse(hash)?;
    counter.decrement().map_err(|edge| edge_error(edge, hash))?;
    Ok(counter.render())
}

/// Hash of the window immediately following `hash`, same precision.
pub fn after(hash: &str) -> Result<String> {
    let mut counter = HashCounter::parse(hash)?;
    counter.increment().map_err(|edge| edge_error(edge, hash))?;
    Ok(counter.render())
}

/// `[before(hash), after(hash)]`.
pub fn neighbors(hash: &str) -> Result<[String; 2]> {
    Ok([before(hash)?, after(hash)?])
}

/// `[before(hash), hash, after(hash)]`.
pub fn expand(hash: &str) -> Result<[String; 3]> {
    let [previous, next] = neighbors(hash)?;
    Ok([previous, hash.to_owned(), next])
}

/// Hash `steps` windows away from `hash`; negative values move back in time.
pub fn shift(hash: &str, steps: i64) -> Result<String> {
    let mut counter = HashCounter::parse(hash)?;
    counter
        .offset(steps)
        .map_err(|edge| edge_error(edge, hash))?;
    Ok(counter.render())
}

/// Every hash from `start` through `end` inclusive, in time order.
pub fn span(start: &str, end: &str) -> Result<Span> {
    let first = HashCounter::parse(start)?;
    let last = HashCounter::parse(end)?;

    if first.precision() != last.precision() {
        return Err(TimeHashError::PrecisionMismatch {
            left: start.into(),
            right: end.into(),
        });
    }
    if first.index() > last.index() {
        return Err(TimeHashError::InvalidRange {
            start: start.into(),
            end: end.into(),
        });
    }

    let remaining = last.index() - first.index() + 1;
    trace!(start, end, remaining, "built window span");
    Ok(Span {
        next: Some(first),
        remaining,
    })
}

/// Lazy iterator returned by [`span`].
#[derive(Debug, Clone)]
pub struct Span {
    next: Option<HashCounter>,
    remaining: u64,
}

impl Span {
    /// Number of hashes not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Iterator for Span {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            let mut following = current.clone();
            if following.increment().is_ok() {
                self.next = Some(following);
            }
        }
        Some(current.render())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
