//! Output formats for identifier normalization.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Context and configuration key selecting the output format.
pub const NORMALIZATION_FORMAT_KEY: &str = "uid_normalization_format";

/// The text form `encode` produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationFormat {
    /// The identifier's own default rendering.
    #[default]
    #[serde(rename = "canonical")]
    Canonical,
    /// 22 base58 characters.
    #[serde(rename = "base_58")]
    Base58,
    /// 26 uppercase Crockford base32 characters.
    #[serde(rename = "base_32")]
    Base32,
    /// Hyphenated lowercase hex of the raw bits.
    #[serde(rename = "rfc_4122")]
    Rfc4122,
}

impl NormalizationFormat {
    pub const ALL: [NormalizationFormat; 4] = [
        NormalizationFormat::Canonical,
        NormalizationFormat::Base58,
        NormalizationFormat::Base32,
        NormalizationFormat::Rfc4122,
    ];

    /// Returns the configuration value for this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NormalizationFormat::Canonical => "canonical",
            NormalizationFormat::Base58 => "base_58",
            NormalizationFormat::Base32 => "base_32",
            NormalizationFormat::Rfc4122 => "rfc_4122",
        }
    }
}

impl std::fmt::Display for NormalizationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationFormat {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| CodecError::InvalidFormat {
                format: s.to_string(),
            })
    }
}
