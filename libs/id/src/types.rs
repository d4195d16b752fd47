//! Identifier values and their text renderings.
//!
//! A [`Uid`] is a 128-bit value from one of two families: UUIDs (RFC 4122,
//! variant chosen by the version nibble) or ULIDs. Each family has its own
//! canonical text form; the base58, base32 and RFC 4122 renderings work on the
//! raw 128 bits and so apply to either family.

use std::str::FromStr;

use crate::encoding::{self, BASE32_LEN, RFC4122_LEN};
use crate::{IdError, UidKind, Ulid, Uuid};

// =============================================================================
// Rendering
// =============================================================================

/// Common rendering surface for every identifier type.
pub trait AbstractUid {
    /// Returns the raw 128-bit value.
    fn as_u128(&self) -> u128;

    /// Returns the concrete kind of this value.
    fn kind(&self) -> UidKind;

    /// Renders the identifier in its family's own textual form.
    fn to_canonical(&self) -> String;

    /// Renders the raw bits as 22 base58 characters.
    fn to_base58(&self) -> String {
        encoding::encode_base58(self.as_u128())
    }

    /// Renders the raw bits as 26 uppercase Crockford base32 characters.
    fn to_base32(&self) -> String {
        Ulid(self.as_u128()).to_string()
    }

    /// Renders the raw bits as lowercase hyphenated hex, 8-4-4-4-12.
    fn to_rfc4122(&self) -> String {
        Uuid::from_u128(self.as_u128()).hyphenated().to_string()
    }
}

impl AbstractUid for Uuid {
    fn as_u128(&self) -> u128 {
        Uuid::as_u128(self)
    }

    fn kind(&self) -> UidKind {
        if self.is_nil() {
            UidKind::NilUuid
        } else {
            UidKind::from_uuid_version(self.get_version_num())
        }
    }

    fn to_canonical(&self) -> String {
        self.hyphenated().to_string()
    }
}

impl AbstractUid for Ulid {
    fn as_u128(&self) -> u128 {
        self.0
    }

    fn kind(&self) -> UidKind {
        UidKind::Ulid
    }

    fn to_canonical(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a UUID in canonical hyphenated form.
///
/// Simple, braced and URN forms are rejected.
pub fn parse_uuid(s: &str) -> Result<Uuid, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.len() != RFC4122_LEN {
        return Err(IdError::InvalidLength {
            expected: RFC4122_LEN,
            actual: s.len(),
        });
    }

    Uuid::parse_str(s).map_err(|e| IdError::InvalidUuid(e.to_string()))
}

/// Parses a ULID in canonical Crockford base32 form.
///
/// The value must fit in 128 bits, so the first character is at most `7`.
pub fn parse_ulid(s: &str) -> Result<Ulid, IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.len() != BASE32_LEN {
        return Err(IdError::InvalidLength {
            expected: BASE32_LEN,
            actual: s.len(),
        });
    }

    let ulid = Ulid::from_string(s).map_err(|e| IdError::InvalidUlid(e.to_string()))?;

    // The decoder drops bits above 128 silently.
    if !matches!(s.as_bytes()[0], b'0'..=b'7') {
        return Err(IdError::Overflow);
    }

    Ok(ulid)
}

// =============================================================================
// Uid
// =============================================================================

/// An identifier value from either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Uid {
    Uuid(Uuid),
    Ulid(Ulid),
}

impl Uid {
    /// Parses canonical text as the family `kind` belongs to.
    ///
    /// `Ulid` expects Crockford base32; every other kind expects a hyphenated
    /// UUID of any version.
    pub fn parse(s: &str, kind: UidKind) -> Result<Self, IdError> {
        if kind.is_ulid() {
            parse_ulid(s).map(Uid::Ulid)
        } else {
            parse_uuid(s).map(Uid::Uuid)
        }
    }

    /// Builds a value of `kind`'s family from raw bits.
    #[must_use]
    pub fn from_u128(value: u128, kind: UidKind) -> Self {
        if kind.is_ulid() {
            Uid::Ulid(Ulid(value))
        } else {
            Uid::Uuid(Uuid::from_u128(value))
        }
    }

    /// Reverses [`AbstractUid::to_base58`].
    pub fn from_base58(s: &str, kind: UidKind) -> Result<Self, IdError> {
        encoding::decode_base58(s).map(|v| Self::from_u128(v, kind))
    }

    /// Reverses [`AbstractUid::to_base32`].
    pub fn from_base32(s: &str, kind: UidKind) -> Result<Self, IdError> {
        parse_ulid(s).map(|ulid| Self::from_u128(ulid.0, kind))
    }

    /// Reverses [`AbstractUid::to_rfc4122`].
    pub fn from_rfc4122(s: &str, kind: UidKind) -> Result<Self, IdError> {
        parse_uuid(s).map(|uuid| Self::from_u128(uuid.as_u128(), kind))
    }

    /// Returns true if this is a ULID.
    #[must_use]
    pub const fn is_ulid(&self) -> bool {
        matches!(self, Uid::Ulid(_))
    }
}

impl AbstractUid for Uid {
    fn as_u128(&self) -> u128 {
        match self {
            Uid::Uuid(uuid) => AbstractUid::as_u128(uuid),
            Uid::Ulid(ulid) => ulid.as_u128(),
        }
    }

    fn kind(&self) -> UidKind {
        match self {
            Uid::Uuid(uuid) => uuid.kind(),
            Uid::Ulid(ulid) => ulid.kind(),
        }
    }

    fn to_canonical(&self) -> String {
        match self {
            Uid::Uuid(uuid) => uuid.to_canonical(),
            Uid::Ulid(ulid) => ulid.to_canonical(),
        }
    }
}

impl From<Uuid> for Uid {
    fn from(uuid: Uuid) -> Self {
        Uid::Uuid(uuid)
    }
}

impl From<Ulid> for Uid {
    fn from(ulid: Ulid) -> Self {
        Uid::Ulid(ulid)
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_canonical())
    }
}

impl FromStr for Uid {
    type Err = IdError;

    /// 26 characters parse as a ULID, anything else as a UUID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == BASE32_LEN {
            parse_ulid(s).map(Uid::Ulid)
        } else {
            parse_uuid(s).map(Uid::Uuid)
        }
    }
}

impl serde::Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> serde::Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
