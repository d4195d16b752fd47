//! UUID and ULID normalizer.
//!
//! Encoding is lenient about output: any identifier renders in any of the four
//! formats. Decoding is strict about input: only the target family's canonical
//! text is accepted. Decode failures are either returned as
//! [`CodecError::NotNormalizable`] or, when the caller asks, collected into a
//! [`DenormalizationResult`].

use std::any::Any;

use tracing::{debug, trace};
use uidnorm_id::{AbstractUid, Uid, UidKind, Ulid, Uuid};

use crate::{
    CacheableSupports, CodecError, Context, DenormalizationResult, Denormalized, Denormalizer,
    InvariantViolation, NormalizationFormat, Normalizer, NormalizerConfig,
};

/// Field path violations are filed under. A scalar has only the root.
const ROOT_PATH: &str = "";

/// Encodes identifiers to text and decodes them back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UidNormalizer {
    config: NormalizerConfig,
}

impl UidNormalizer {
    /// Creates a normalizer that encodes to canonical text by default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with `format` as its default output.
    pub fn with_format(format: NormalizationFormat) -> Self {
        Self::with_config(NormalizerConfig::new(format))
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Returns true if `value` is an identifier this normalizer can encode.
    pub fn supports_encode(&self, value: &dyn Any) -> bool {
        value.is::<Uid>() || value.is::<Uuid>() || value.is::<Ulid>()
    }

    /// Renders `value` in the format the context asks for, falling back to the
    /// configured default.
    pub fn encode<T>(&self, value: &T, context: &Context) -> Result<String, CodecError>
    where
        T: AbstractUid + ?Sized,
    {
        let format = self.resolve_format(context)?;
        trace!(%format, kind = %value.kind(), "encoding identifier");

        Ok(match format {
            NormalizationFormat::Canonical => value.to_canonical(),
            NormalizationFormat::Base58 => value.to_base58(),
            NormalizationFormat::Base32 => value.to_base32(),
            NormalizationFormat::Rfc4122 => value.to_rfc4122(),
        })
    }

    fn resolve_format(&self, context: &Context) -> Result<NormalizationFormat, CodecError> {
        match context.uid_normalization_format.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(self.config.uid_normalization_format),
        }
    }

    /// Returns true if `type_name` names an identifier type.
    pub fn supports_decode(&self, type_name: &str) -> bool {
        UidKind::from_type_name(type_name).is_some()
    }

    /// Decodes `text` as `kind`, failing on the first problem.
    pub fn decode(&self, text: &str, kind: UidKind) -> Result<Uid, CodecError> {
        self.decode_collecting(text, kind)
            .into_result()
            .map_err(|_| {
                debug!(%kind, "identifier rejected");
                CodecError::NotNormalizable {
                    message: invalid_data_message(kind),
                }
            })
    }

    /// Decodes `text` as `kind`, reporting failure as a violation under the
    /// root path instead of an error.
    pub fn decode_collecting(&self, text: &str, kind: UidKind) -> DenormalizationResult<Uid> {
        trace!(%kind, "decoding identifier");

        match Uid::parse(text, kind) {
            Ok(uid) => DenormalizationResult::success(uid),
            Err(err) => {
                debug!(%kind, error = %err, "identifier failed to parse");
                let violation = InvariantViolation::new(text, invalid_data_message(kind), Some(err));
                DenormalizationResult::single_failure(ROOT_PATH, violation)
            }
        }
    }

    /// Decodes `text` as `kind` in the mode the context selects.
    pub fn decode_with(
        &self,
        text: &str,
        kind: UidKind,
        context: &Context,
    ) -> Result<Denormalized<Uid>, CodecError> {
        if context.collect_invariant_violations {
            Ok(Denormalized::Result(self.decode_collecting(text, kind)))
        } else {
            self.decode(text, kind).map(Denormalized::Value)
        }
    }
}

fn invalid_data_message(kind: UidKind) -> String {
    format!("The data is not a valid \"{kind}\" string representation.")
}

impl CacheableSupports for UidNormalizer {
    const CACHEABLE_SUPPORTS: bool = true;
}

impl Normalizer for UidNormalizer {
    fn supports_normalization(&self, data: &dyn Any) -> bool {
        self.supports_encode(data)
    }

    fn normalize(&self, data: &dyn Any, context: &Context) -> Result<String, CodecError> {
        if let Some(uid) = data.downcast_ref::<Uid>() {
            self.encode(uid, context)
        } else if let Some(uuid) = data.downcast_ref::<Uuid>() {
            self.encode(uuid, context)
        } else if let Some(ulid) = data.downcast_ref::<Ulid>() {
            self.encode(ulid, context)
        } else {
            Err(CodecError::UnsupportedValue)
        }
    }
}

impl Denormalizer for UidNormalizer {
    type Output = Uid;

    fn supports_denormalization(&self, _data: &str, type_name: &str) -> bool {
        self.supports_decode(type_name)
    }

    fn denormalize(
        &self,
        data: &str,
        type_name: &str,
        context: &Context,
    ) -> Result<Denormalized<Uid>, CodecError> {
        let kind = UidKind::from_type_name(type_name).ok_or_else(|| CodecError::UnsupportedType {
            type_name: type_name.to_string(),
        })?;
        self.decode_with(data, kind, context)
    }
}
