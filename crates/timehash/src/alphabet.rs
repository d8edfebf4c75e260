//! The eight-symbol timehash alphabet.
//!
//! Each symbol carries a 3-bit digit. Symbol order is digit order, so hashes
//! of equal length compare lexicographically the same way their windows
//! compare in time. The alphabet is part of the interoperability contract
//! and never changes.

use once_cell::sync::Lazy;

use crate::error::{Result, TimeHashError};
use crate::MAX_PRECISION;

/// Symbols in digit order: `ALPHABET[d]` encodes the 3-bit digit `d`.
pub const ALPHABET: [u8; 8] = *b"01abcdef";

/// Digit radix of a timehash character.
pub const RADIX: u8 = 8;

/// Symbol for digit 0, the carry-reset value of `after`.
pub const LOW_SYMBOL: char = '0';

/// Symbol for digit 7, the borrow-reset value of `before`.
pub const HIGH_SYMBOL: char = 'f';

/// Byte to digit lookup, `None` for bytes outside the alphabet.
static DECODE_TABLE: Lazy<[Option<u8>; 256]> = Lazy::new(|| {
    let mut table = [None; 256];
    for (digit, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = Some(digit as u8);
    }
    table
});

/// Per-symbol `(predecessor, successor)`; the boundary symbols have no
/// neighbor on their outer side.
static NEIGHBOR_TABLE: Lazy<[(Option<char>, Option<char>); 8]> = Lazy::new(|| {
    let mut table = [(None, None); 8];
    for (digit, entry) in table.iter_mut().enumerate() {
        let before = digit.checked_sub(1).map(|d| ALPHABET[d] as char);
        let after = ALPHABET.get(digit + 1).map(|&s| s as char);
        *entry = (before, after);
    }
    table
});

/// Symbol for a digit in `0..8`.
///
/// # Panics
/// Panics if `digit >= 8`; digits are produced internally and always fit.
pub fn symbol(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}

/// Digit value of `symbol`, or `None` if it is not part of the alphabet.
pub fn try_digit(symbol: char) -> Option<u8> {
    if symbol.is_ascii() {
        DECODE_TABLE[symbol as usize]
    } else {
        None
    }
}

/// Digit value of the symbol found at `position` of a hash.
pub fn digit(symbol: char, position: usize) -> Result<u8> {
    try_digit(symbol).ok_or(TimeHashError::InvalidCharacter {
        character: symbol,
        position,
    })
}

/// The next greater symbol, `None` for [`HIGH_SYMBOL`] or foreign input.
pub fn successor(symbol: char) -> Option<char> {
    try_digit(symbol).and_then(|d| NEIGHBOR_TABLE[d as usize].1)
}

/// The next lesser symbol, `None` for [`LOW_SYMBOL`] or foreign input.
pub fn predecessor(symbol: char) -> Option<char> {
    try_digit(symbol).and_then(|d| NEIGHBOR_TABLE[d as usize].0)
}

/// Decode every character of `hash` into its digit, checking the length
/// against the supported precision range first.
pub fn digits(hash: &str) -> Result<Vec<u8>> {
    check_precision(hash.chars().count())?;
    hash.chars()
        .enumerate()
        .map(|(position, c)| digit(c, position))
        .collect()
}

/// Render digits back into a hash string.
pub fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| symbol(d)).collect()
}

/// Whether `hash` is a well-formed timehash.
pub fn validate(hash: &str) -> bool {
    digits(hash).is_ok()
}

pub(crate) fn check_precision(precision: usize) -> Result<()> {
    if (1..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(TimeHashError::InvalidPrecision { precision })
    }
}
