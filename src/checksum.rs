//! CRC32 framing of the tabbed payload: `[crc32: 4B LE][utf-8 text]`.

use crate::error::{Error, Result};

pub const CHECKSUM_LENGTH: usize = 4;

/// Little-endian CRC32 of `tabbed`.
#[must_use]
pub fn checksum(tabbed: &str) -> [u8; CHECKSUM_LENGTH] {
    crate::crc32().checksum(tabbed.as_bytes()).to_le_bytes()
}

/// Prefixes `tabbed` with its checksum.
#[must_use]
pub fn frame(tabbed: &str) -> Vec<u8> {
    let mut framed = Vec::with_capacity(CHECKSUM_LENGTH + tabbed.len());
    framed.extend_from_slice(&checksum(tabbed));
    framed.extend_from_slice(tabbed.as_bytes());
    framed
}

/// Verifies the checksum prefix and returns the text that follows it.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if `framed` can't hold a checksum,
/// [`Error::Checksum`] if the checksum doesn't match and [`Error::Utf8`] if the
/// text isn't UTF-8.
pub fn unframe(framed: &[u8]) -> Result<&str> {
    if framed.len() < CHECKSUM_LENGTH {
        return Err(Error::Truncated {
            required: CHECKSUM_LENGTH,
            actual: framed.len(),
        });
    }
    let (prefix, payload) = framed.split_at(CHECKSUM_LENGTH);
    let mut claimed = [0; CHECKSUM_LENGTH];
    claimed.copy_from_slice(prefix);
    let expected = u32::from_le_bytes(claimed);
    let actual = crate::crc32().checksum(payload);
    if expected != actual {
        return Err(Error::Checksum { expected, actual });
    }
    Ok(core::str::from_utf8(payload)?)
}
