//! # uidnorm-codec
//!
//! Encodes UUIDs and ULIDs to text in a selectable format and decodes
//! canonical text back into identifiers.
//!
//! ## Formats
//!
//! The output format comes from the call's [`Context`] if it names one,
//! otherwise from the normalizer's [`NormalizerConfig`]:
//!
//! | value       | output                                         |
//! |-------------|------------------------------------------------|
//! | `canonical` | the identifier's own form (hex UUID, base32 ULID) |
//! | `base_58`   | 22 base58 characters                            |
//! | `base_32`   | 26 Crockford base32 characters                  |
//! | `rfc_4122`  | hyphenated hex of the raw bits, even for a ULID |
//!
//! ## Decode errors
//!
//! By default a decode failure is returned as
//! [`CodecError::NotNormalizable`]. With
//! [`Context::collect_invariant_violations`] set, it is returned as a failed
//! [`DenormalizationResult`] instead, so a caller validating many fields can
//! gather every failure before responding.

mod config;
mod context;
mod error;
mod format;
mod normalizer;
mod traits;
mod violation;

pub use config::{NormalizerConfig, FORMAT_ENV};
pub use context::Context;
pub use error::CodecError;
pub use format::{NormalizationFormat, NORMALIZATION_FORMAT_KEY};
pub use normalizer::UidNormalizer;
pub use traits::{CacheableSupports, Denormalized, Denormalizer, Normalizer};
pub use violation::{DenormalizationResult, InvariantViolation, ViolationsByPath};

/// Re-export the identifier library so callers need only one dependency.
pub use uidnorm_id;
