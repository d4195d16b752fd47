//! Per-call options.

use serde::{Deserialize, Serialize};

use crate::NormalizationFormat;

/// Options for a single encode or decode call.
///
/// Deserializes from a framework context mapping; keys other than the two
/// below are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Output format for this call, overriding the normalizer's default.
    ///
    /// Kept as raw text: an unrecognized value is reported when it is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid_normalization_format: Option<String>,

    /// Collect decode failures into a result instead of returning an error.
    pub collect_invariant_violations: bool,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format from a raw configuration value.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.uid_normalization_format = Some(format.into());
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_normalization_format(self, format: NormalizationFormat) -> Self {
        self.with_format(format.as_str())
    }

    /// Requests accumulating decode results.
    #[must_use]
    pub fn collecting(mut self) -> Self {
        self.collect_invariant_violations = true;
        self
    }
}
