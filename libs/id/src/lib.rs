//! # uidnorm-id
//!
//! UUID and ULID value types, canonical parsing, and alternate renderings.
//!
//! ## Families
//!
//! - UUIDs render canonically as lowercase hyphenated hex:
//!   `9b7541de-6f87-11ea-ab3c-9da9a81562fc`
//! - ULIDs render canonically as 26 uppercase Crockford base32 characters:
//!   `01E4BYF64YZ97MDV6RH0HAMN6X`
//!
//! ## Alternate renderings
//!
//! Every identifier is 128 bits, so any of them can also be rendered as:
//! - base58, 22 characters (`LCQS8f2p5SDSiAt9V7ZYnF`)
//! - Crockford base32, 26 characters (`4VEN0XWVW727NAPF4XN6M1ARQW`)
//! - RFC 4122 hyphenated hex, even for a ULID
//!
//! Parsing from text accepts only each family's canonical form. The
//! `Uid::from_base58`/`from_base32`/`from_rfc4122` helpers reverse the
//! alternate renderings explicitly.

mod encoding;
mod error;
mod kind;
mod types;

pub use encoding::{
    decode_base32, decode_base58, encode_base32, encode_base58, BASE32_LEN, BASE58_LEN,
    RFC4122_LEN,
};
pub use error::IdError;
pub use kind::UidKind;
pub use types::*;

/// Re-export the underlying value types for consumers that need them directly.
pub use ulid::Ulid;
pub use uuid::Uuid;
