//! Error types for identifier parsing.

use thiserror::Error;

/// Errors that can occur when parsing an identifier from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("identifier cannot be empty")]
    Empty,

    /// The input has the wrong length for the requested form.
    #[error("invalid identifier length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input is not a canonical hyphenated UUID.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// The input is not a valid Crockford base32 ULID.
    #[error("invalid ULID: {0}")]
    InvalidUlid(String),

    /// The input contains a character outside the expected alphabet.
    #[error("invalid character {ch:?} at position {index}")]
    InvalidChar { ch: char, index: usize },

    /// The encoded value does not fit in 128 bits.
    #[error("encoded value exceeds 128 bits")]
    Overflow,
}

impl IdError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if the input had the right shape but an out-of-range value.
    pub fn is_overflow(&self) -> bool {
        matches!(self, IdError::Overflow)
    }
}
