//! Fixed-radix counter view of a timehash.
//!
//! A hash of length `p` is a `p`-digit base-8 number, most significant digit
//! first, and consecutive windows are consecutive values. Moving between
//! windows is plain carry/borrow arithmetic on the digits; symbols only
//! appear when converting to and from strings.

use crate::alphabet::{self, RADIX};
use crate::error::Result;

const TOP_DIGIT: u8 = RADIX - 1;

/// Which end of the domain an arithmetic step ran past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashCounter {
    digits: Vec<u8>,
}

impl HashCounter {
    pub fn parse(hash: &str) -> Result<Self> {
        Ok(Self {
            digits: alphabet::digits(hash)?,
        })
    }

    /// Counter with the given index among all windows of `precision`.
    /// Indices past the last window wrap, callers bound them first.
    pub fn from_index(mut index: u64, precision: usize) -> Self {
        let mut digits = vec![0u8; precision];
        for slot in digits.iter_mut().rev() {
            *slot = (index % u64::from(RADIX)) as u8;
            index /= u64::from(RADIX);
        }
        Self { digits }
    }

    pub fn render(&self) -> String {
        alphabet::render(&self.digits)
    }

    pub fn precision(&self) -> usize {
        self.digits.len()
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Position of this window among all windows of the same precision.
    pub fn index(&self) -> u64 {
        self.digits
            .iter()
            .fold(0u64, |acc, &d| acc * u64::from(RADIX) + u64::from(d))
    }

    /// Step to the following window: bump the rightmost digit below 7 and
    /// reset everything after it to 0.
    pub fn increment(&mut self) -> std::result::Result<(), Edge> {
        let pivot = self
            .digits
            .iter()
            .rposition(|&d| d < TOP_DIGIT)
            .ok_or(Edge::Upper)?;
        self.digits[pivot] += 1;
        self.digits[pivot + 1..].fill(0);
        Ok(())
    }

    /// Step to the preceding window: drop the rightmost digit above 0 and
    /// reset everything after it to 7.
    pub fn decrement(&mut self) -> std::result::Result<(), Edge> {
        let pivot = self
            .digits
            .iter()
            .rposition(|&d| d > 0)
            .ok_or(Edge::Lower)?;
        self.digits[pivot] -= 1;
        self.digits[pivot + 1..].fill(TOP_DIGIT);
        Ok(())
    }

    /// Move `steps` windows, forwards for positive values. Leaves the counter
    /// untouched when the move would leave the domain.
    pub fn offset(&mut self, steps: i64) -> std::result::Result<(), Edge> {
        let mut magnitude = steps.unsigned_abs();
        let mut digits = self.digits.clone();
        let mut carry = 0u8;

        for slot in digits.iter_mut().rev() {
            let step = (magnitude % u64::from(RADIX)) as u8;
            magnitude /= u64::from(RADIX);

            if steps >= 0 {
                let sum = *slot + step + carry;
                *slot = sum % RADIX;
                carry = sum / RADIX;
            } else {
                let owed = step + carry;
                if *slot >= owed {
                    *slot -= owed;
                    carry = 0;
                } else {
                    *slot = *slot + RADIX - owed;
                    carry = 1;
                }
            }
        }

        if carry != 0 || magnitude != 0 {
            return Err(if steps >= 0 { Edge::Upper } else { Edge::Lower });
        }
        self.digits = digits;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(hash: &str) -> HashCounter {
        HashCounter::parse(hash).unwrap()
    }

    #[test]
    fn increment_carries_through_top_digits() {
        let mut c = counter("a0ff");
        c.increment().unwrap();
        assert_eq!(c.render(), "a100");

        let mut c = counter("abcd");
        c.increment().unwrap();
        assert_eq!(c.render(), "abce");
    }

    #[test]
    fn decrement_borrows_through_zero_digits() {
        let mut c = counter("a100");
        c.decrement().unwrap();
        assert_eq!(c.render(), "a0ff");

        let mut c = counter("1");
        c.decrement().unwrap();
        assert_eq!(c.render(), "0");
    }

    #[test]
    fn edges_are_reported_and_leave_the_counter_intact() {
        let mut c = counter("fff");
        assert_eq!(c.increment(), Err(Edge::Upper));
        assert_eq!(c.render(), "fff");

        let mut c = counter("000");
        assert_eq!(c.decrement(), Err(Edge::Lower));
        assert_eq!(c.render(), "000");
    }

    #[test]
    fn index_round_trips_through_from_index() {
        let c = counter("a0f1");
        assert_eq!(c.index(), 2 * 512 + 7 * 8 + 1);
        assert_eq!(HashCounter::from_index(c.index(), 4), c);
        assert_eq!(counter("ffff").index(), 8u64.pow(4) - 1);
    }

    #[test]
    fn offset_matches_repeated_steps() {
        let start = counter("0e");
        for steps in -20i64..=20 {
            let mut jumped = start.clone();
            let mut walked = start.clone();
            let jump = jumped.offset(steps);
            let walk = (0..steps.unsigned_abs()).try_for_each(|_| {
                if steps > 0 {
                    walked.increment()
                } else {
                    walked.decrement()
                }
            });
            assert_eq!(jump, walk, "steps {steps}");
            if jump.is_ok() {
                assert_eq!(jumped, walked, "steps {steps}");
            }
        }
    }

    #[test]
    fn offset_past_an_edge_fails_without_moving() {
        let mut c = counter("fe");
        assert_eq!(c.offset(1), Ok(()));
        assert_eq!(c.render(), "ff");
        assert_eq!(c.offset(1), Err(Edge::Upper));
        assert_eq!(c.offset(-64), Err(Edge::Lower));
        assert_eq!(c.offset(-63), Ok(()));
        assert_eq!(c.render(), "00");
        assert_eq!(c.offset(i64::MAX), Err(Edge::Upper));
        assert_eq!(c.offset(i64::MIN), Err(Edge::Lower));
        assert_eq!(c.render(), "00");
    }
}
