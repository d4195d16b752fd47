//! Normalizer configuration.
//!
//! The default output format is read from `UIDNORM_NORMALIZATION_FORMAT` and
//! validated when the configuration is built.

use serde::{Deserialize, Serialize};

use crate::{CodecError, NormalizationFormat};

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "UIDNORM_NORMALIZATION_FORMAT";

/// Normalizer-wide defaults, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    pub uid_normalization_format: NormalizationFormat,
}

impl NormalizerConfig {
    pub fn new(uid_normalization_format: NormalizationFormat) -> Self {
        Self {
            uid_normalization_format,
        }
    }

    /// Reads the default format from `UIDNORM_NORMALIZATION_FORMAT`.
    ///
    /// Unset means canonical. An unrecognized value fails here rather than on
    /// the first encode.
    pub fn from_env() -> Result<Self, CodecError> {
        Self::from_env_value(std::env::var(FORMAT_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, CodecError> {
        let uid_normalization_format = match value {
            Some(raw) => raw.trim().parse()?,
            None => NormalizationFormat::default(),
        };

        Ok(Self {
            uid_normalization_format,
        })
    }
}
