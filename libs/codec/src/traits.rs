//! Seams a serialization framework dispatches through.

use std::any::Any;

use crate::{CodecError, Context, DenormalizationResult};

/// Marks whether a codec's `supports_*` answers depend only on the type asked
/// about, so a framework may cache them per type.
///
/// Implementations whose answers depend on the context or on configuration
/// must set this to `false`.
pub trait CacheableSupports {
    const CACHEABLE_SUPPORTS: bool;
}

/// Turns a value into text.
pub trait Normalizer {
    fn supports_normalization(&self, data: &dyn Any) -> bool;

    fn normalize(&self, data: &dyn Any, context: &Context) -> Result<String, CodecError>;
}

/// Turns text into a value.
pub trait Denormalizer {
    type Output;

    fn supports_denormalization(&self, data: &str, type_name: &str) -> bool;

    fn denormalize(
        &self,
        data: &str,
        type_name: &str,
        context: &Context,
    ) -> Result<Denormalized<Self::Output>, CodecError>;
}

/// What a [`Denormalizer`] returns: a bare value in immediate mode, a
/// [`DenormalizationResult`] when the context asked for collected violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denormalized<T> {
    Value(T),
    Result(DenormalizationResult<T>),
}

impl<T> Denormalized<T> {
    /// Returns the decoded value from either shape, if there is one.
    pub fn into_value(self) -> Option<T> {
        match self {
            Denormalized::Value(value) => Some(value),
            Denormalized::Result(result) => result.into_value(),
        }
    }

    /// Returns the accumulating result, if this is one.
    pub fn as_result(&self) -> Option<&DenormalizationResult<T>> {
        match self {
            Denormalized::Result(result) => Some(result),
            Denormalized::Value(_) => None,
        }
    }
}
