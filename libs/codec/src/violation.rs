//! Collected decode failures.
//!
//! When a caller opts into accumulating mode, a failed decode is reported as
//! data instead of an error: each failure becomes an [`InvariantViolation`]
//! filed under the path of the field that failed, and the whole outcome is a
//! [`DenormalizationResult`]. A scalar decode only ever files under the empty
//! path.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use uidnorm_id::IdError;

/// Violations keyed by field path.
pub type ViolationsByPath = BTreeMap<String, Vec<InvariantViolation>>;

/// One recorded reason a decode attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvariantViolation {
    subject: String,
    message: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_cause"
    )]
    cause: Option<IdError>,
}

impl InvariantViolation {
    pub fn new(subject: impl Into<String>, message: impl Into<String>, cause: Option<IdError>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            cause,
        }
    }

    /// The input that failed.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The parse error behind this violation, if any.
    pub fn cause(&self) -> Option<&IdError> {
        self.cause.as_ref()
    }
}

fn serialize_cause<S>(cause: &Option<IdError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match cause {
        Some(err) => serializer.collect_str(err),
        None => serializer.serialize_none(),
    }
}

/// Outcome of an accumulating decode: a value or the violations, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenormalizationResult<T> {
    outcome: Result<T, ViolationsByPath>,
}

impl<T> DenormalizationResult<T> {
    pub fn success(value: T) -> Self {
        Self { outcome: Ok(value) }
    }

    /// Builds a failed result. `violations` must not be empty.
    pub fn failure(violations: ViolationsByPath) -> Self {
        debug_assert!(
            violations.values().any(|v| !v.is_empty()),
            "a failed result needs at least one violation"
        );
        Self {
            outcome: Err(violations),
        }
    }

    /// Builds a failed result holding a single violation under `path`.
    pub fn single_failure(path: impl Into<String>, violation: InvariantViolation) -> Self {
        Self::failure(BTreeMap::from([(path.into(), vec![violation])]))
    }

    pub fn is_successful(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The decoded value, if the decode succeeded.
    pub fn value(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn into_value(self) -> Option<T> {
        self.outcome.ok()
    }

    /// The violations by path, if the decode failed.
    pub fn violations(&self) -> Option<&ViolationsByPath> {
        self.outcome.as_ref().err()
    }

    /// Violation messages by path. Empty when the decode succeeded.
    pub fn violation_messages(&self) -> BTreeMap<String, Vec<String>> {
        self.violations()
            .into_iter()
            .flatten()
            .map(|(path, violations)| {
                let messages = violations.iter().map(|v| v.message.clone()).collect();
                (path.clone(), messages)
            })
            .collect()
    }

    pub fn into_result(self) -> Result<T, ViolationsByPath> {
        self.outcome
    }
}

impl<T> From<DenormalizationResult<T>> for Result<T, ViolationsByPath> {
    fn from(result: DenormalizationResult<T>) -> Self {
        result.outcome
    }
}

impl<T: Serialize> Serialize for DenormalizationResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DenormalizationResult", 2)?;
        state.serialize_field("successful", &self.is_successful())?;
        match &self.outcome {
            Ok(value) => state.serialize_field("value", value)?,
            Err(violations) => state.serialize_field("violations", violations)?,
        }
        state.end()
    }
}
