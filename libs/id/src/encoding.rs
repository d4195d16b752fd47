//! Fixed-width text encodings of raw 128-bit identifier values.
//!
//! Both encodings are big-endian digit strings padded on the left with the
//! alphabet's zero digit, so every value of one family renders to the same
//! width and sorts in numeric order. Base32 is the `ulid` crate's Crockford
//! codec; base58 has no crate behind it.

use crate::{IdError, Ulid};

/// Base58 alphabet (Bitcoin-style, no `0OIl`).
const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Width of a base58 rendering. 58^22 > 2^128.
pub const BASE58_LEN: usize = 22;

/// Width of a Crockford base32 rendering. 26 * 5 = 130 bits.
pub const BASE32_LEN: usize = 26;

/// Width of a hyphenated RFC 4122 rendering.
pub const RFC4122_LEN: usize = 36;

/// Renders `value` as 22 base58 characters.
pub fn encode_base58(value: u128) -> String {
    let mut buf = [BASE58_ALPHABET[0]; BASE58_LEN];
    let mut rest = value;
    for slot in buf.iter_mut().rev() {
        *slot = BASE58_ALPHABET[(rest % 58) as usize];
        rest /= 58;
    }
    buf.iter().map(|&b| char::from(b)).collect()
}

/// Parses a 22-character base58 string back into its 128-bit value.
pub fn decode_base58(s: &str) -> Result<u128, IdError> {
    check_len(s, BASE58_LEN)?;

    let mut acc: u128 = 0;
    for (index, ch) in s.chars().enumerate() {
        let digit = BASE58_ALPHABET
            .iter()
            .position(|&b| char::from(b) == ch)
            .ok_or(IdError::InvalidChar { ch, index })?;
        acc = acc
            .checked_mul(58)
            .and_then(|v| v.checked_add(digit as u128))
            .ok_or(IdError::Overflow)?;
    }
    Ok(acc)
}

/// Renders `value` as 26 uppercase Crockford base32 characters.
pub fn encode_base32(value: u128) -> String {
    Ulid(value).to_string()
}

/// Parses a 26-character Crockford base32 string back into its 128-bit value.
///
/// Lowercase input is accepted. Errors are those of [`crate::parse_ulid`].
pub fn decode_base32(s: &str) -> Result<u128, IdError> {
    crate::parse_ulid(s).map(|ulid| ulid.0)
}

fn check_len(s: &str, expected: usize) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    let actual = s.chars().count();
    if actual != expected {
        return Err(IdError::InvalidLength { expected, actual });
    }
    Ok(())
}
