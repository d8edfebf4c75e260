//! Error types for timehash encoding, decoding and navigation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeHashError {
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid precision {precision}: expected 1..={max}", max = crate::MAX_PRECISION)]
    InvalidPrecision { precision: usize },

    #[error("Invalid timestamp {value}: must be finite")]
    InvalidTimestamp { value: f64 },

    #[error("No window precedes {hash}: already at the lower edge of the domain")]
    DomainUnderflow { hash: String },

    #[error("No window follows {hash}: already at the upper edge of the domain")]
    DomainOverflow { hash: String },

    #[error("Precision mismatch: {left} has {} characters, {right} has {}", .left.len(), .right.len())]
    PrecisionMismatch { left: String, right: String },

    #[error("Invalid range: {start} comes after {end}")]
    InvalidRange { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, TimeHashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = TimeHashError::InvalidCharacter {
            character: 'z',
            position: 3,
        };
        assert_eq!(err.to_string(), "Invalid character 'z' at position 3");

        let err = TimeHashError::InvalidPrecision { precision: 0 };
        assert_eq!(err.to_string(), "Invalid precision 0: expected 1..=10");

        let err = TimeHashError::PrecisionMismatch {
            left: "ab".into(),
            right: "abc".into(),
        };
        assert_eq!(
            err.to_string(),
            "Precision mismatch: ab has 2 characters, abc has 3"
        );
    }
}
