//! Error types for identifier normalization.

use thiserror::Error;

/// Errors that can occur when encoding or decoding identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The requested output format is not one of the recognized values.
    #[error("The \"{format}\" format is not valid.")]
    InvalidFormat { format: String },

    /// The input text does not parse as the requested identifier type.
    #[error("{message}")]
    NotNormalizable { message: String },

    /// The value handed to the normalizer is not a UUID or ULID.
    #[error("value is not a UUID or ULID")]
    UnsupportedValue,

    /// The requested target type is not an identifier type.
    #[error("cannot denormalize into unsupported type '{type_name}'")]
    UnsupportedType { type_name: String },
}

impl CodecError {
    /// Returns true if this error reflects misconfiguration or misuse rather
    /// than bad input data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CodecError::InvalidFormat { .. }
                | CodecError::UnsupportedValue
                | CodecError::UnsupportedType { .. }
        )
    }

    /// Returns true if this error reflects input text that failed validation.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CodecError::NotNormalizable { .. })
    }
}
