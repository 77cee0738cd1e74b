//! Render bytes as text over the 32-symbol alphabet `0-9A-V`.
//!
//! The byte stream is read most significant bit first and cut into 5-bit
//! groups; each group selects one symbol. The last group is padded with zero
//! bits.
//!
//! ```
//! use bysquare::alphanumeric::{decode, encode};
//! let encoded = encode(&[0x00, 0x00, 0x48, 0x00]);
//! assert_eq!(encoded, "0004G00");
//! assert_eq!(decode(&encoded).unwrap(), vec![0x00, 0x00, 0x48, 0x00]);
//! ```
//!
//! Padding is not self-delimiting: up to four zero bits may trail the data,
//! and [`decode`] drops any incomplete final byte.

use crate::error::{Error, Result};

pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

const GROUP_BITS: u32 = 5;
const GROUP_MASK: u32 = 0b1_1111;

/// Maps a symbol back onto its 5-bit value.
#[must_use]
pub const fn symbol_value(symbol: char) -> Option<u8> {
    match symbol {
        '0'..='9' => Some(symbol as u8 - b'0'),
        'A'..='V' => Some(symbol as u8 - b'A' + 10),
        _ => None,
    }
}

/// Length of the encoding of `byte_length` bytes.
#[must_use]
pub const fn encoded_length(byte_length: usize) -> usize {
    (byte_length * 8).div_ceil(GROUP_BITS as usize)
}

/// Encodes `data`. Every byte sequence has an encoding.
///
/// # Examples
///
/// ```
/// use bysquare::alphanumeric::encode;
/// assert_eq!(encode(&[]), "");
/// assert_eq!(encode(&[0xff]), "VS");
/// assert_eq!(encode(b"Hello"), "91IMOR3F");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(data: &[u8]) -> String {
    let mut encoded = String::with_capacity(encoded_length(data.len()));
    // Bits not yet emitted sit in the low `pending` bits of `buffer`.
    let mut buffer: u32 = 0;
    let mut pending: u32 = 0;
    for &byte in data {
        buffer = (buffer << 8) | u32::from(byte);
        pending += 8;
        while pending >= GROUP_BITS {
            pending -= GROUP_BITS;
            encoded.push(ALPHABET[((buffer >> pending) & GROUP_MASK) as usize] as char);
        }
        buffer &= (1 << pending) - 1;
    }
    if pending > 0 {
        encoded.push(ALPHABET[((buffer << (GROUP_BITS - pending)) & GROUP_MASK) as usize] as char);
    }
    encoded
}

/// Decodes `encoded`, keeping only complete bytes.
///
/// # Examples
///
/// ```
/// use bysquare::alphanumeric::decode;
/// assert_eq!(decode("VS").unwrap(), vec![0xff]);
/// assert!(decode("vs").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidCharacter`] for a character outside the alphabet.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(encoded.len() * GROUP_BITS as usize / 8);
    let mut buffer: u32 = 0;
    let mut pending: u32 = 0;
    for symbol in encoded.chars() {
        let value = symbol_value(symbol).ok_or(Error::InvalidCharacter(symbol))?;
        buffer = (buffer << GROUP_BITS) | u32::from(value);
        pending += GROUP_BITS;
        if pending >= 8 {
            pending -= 8;
            decoded.push((buffer >> pending) as u8);
            buffer &= (1 << pending) - 1;
        }
    }
    Ok(decoded)
}
