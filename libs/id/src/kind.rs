//! Identifier type selectors.

use serde::{Deserialize, Serialize};

/// Names an identifier type a caller can ask to decode into.
///
/// `AbstractUid` is the family root; every other variant is a concrete kind.
/// The variant name doubles as the type name used in messages and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UidKind {
    AbstractUid,
    Uuid,
    NilUuid,
    UuidV1,
    UuidV3,
    UuidV4,
    UuidV5,
    UuidV6,
    UuidV7,
    Ulid,
}

impl UidKind {
    /// Every recognized kind, family root first.
    pub const ALL: [UidKind; 10] = [
        UidKind::AbstractUid,
        UidKind::Uuid,
        UidKind::NilUuid,
        UidKind::UuidV1,
        UidKind::UuidV3,
        UidKind::UuidV4,
        UidKind::UuidV5,
        UidKind::UuidV6,
        UidKind::UuidV7,
        UidKind::Ulid,
    ];

    /// Returns the type name of this kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            UidKind::AbstractUid => "AbstractUid",
            UidKind::Uuid => "Uuid",
            UidKind::NilUuid => "NilUuid",
            UidKind::UuidV1 => "UuidV1",
            UidKind::UuidV3 => "UuidV3",
            UidKind::UuidV4 => "UuidV4",
            UidKind::UuidV5 => "UuidV5",
            UidKind::UuidV6 => "UuidV6",
            UidKind::UuidV7 => "UuidV7",
            UidKind::Ulid => "Ulid",
        }
    }

    /// Looks a kind up by its type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_name() == name)
    }

    /// Returns true if text for this kind is parsed as a ULID.
    #[must_use]
    pub const fn is_ulid(&self) -> bool {
        matches!(self, UidKind::Ulid)
    }

    /// Returns the kind for a UUID version nibble, `Uuid` when unrecognized.
    #[must_use]
    pub const fn from_uuid_version(version: usize) -> Self {
        match version {
            1 => UidKind::UuidV1,
            3 => UidKind::UuidV3,
            4 => UidKind::UuidV4,
            5 => UidKind::UuidV5,
            6 => UidKind::UuidV6,
            7 => UidKind::UuidV7,
            _ => UidKind::Uuid,
        }
    }
}

impl std::fmt::Display for UidKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}
