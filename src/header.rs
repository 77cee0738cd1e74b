//! The four-byte preamble of every payload.
//!
//! ```text
//! | Attribute    | Bits | Values | Note
//! |--------------|------|--------|-------------------------------------------
//! | BySquareType | 4    | 0-15   | by square type
//! | Version      | 4    | 0-15   | version of the by square type
//! | DocumentType | 4    | 0-15   | document type within given by square type
//! | Reserved     | 4    | 0-15   | bits reserved for future needs
//! | Length       | 16   | i16 LE | byte length of the checksummed payload
//! ```
//!
//! The length counts the bytes of the checksummed payload before compression.

use crate::error::{Error, Result};

pub const HEADER_LENGTH: usize = 2;
pub const LENGTH_LENGTH: usize = 2;
pub const PREAMBLE_LENGTH: usize = HEADER_LENGTH + LENGTH_LENGTH;

/// The by square type of a payment order.
pub const PAY: u8 = 0;

const NIBBLE_MAX: u8 = 0b1111;

/// The by square header. [`Header::default`] is the version 0 payment order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    by_square_type: u8,
    version: u8,
    document_type: u8,
    reserved: u8,
}

impl Header {
    /// # Errors
    ///
    /// Returns [`Error::HeaderRange`] if any component exceeds 15.
    pub fn new(by_square_type: u8, version: u8, document_type: u8, reserved: u8) -> Result<Self> {
        if let Some(&value) = [by_square_type, version, document_type, reserved]
            .iter()
            .find(|&&nibble| nibble > NIBBLE_MAX)
        {
            return Err(Error::HeaderRange { value });
        }
        Ok(Self {
            by_square_type,
            version,
            document_type,
            reserved,
        })
    }

    #[must_use]
    pub const fn by_square_type(&self) -> u8 {
        self.by_square_type
    }

    #[must_use]
    pub const fn version(&self) -> u8 {
        self.version
    }

    #[must_use]
    pub const fn document_type(&self) -> u8 {
        self.document_type
    }

    #[must_use]
    pub const fn reserved(&self) -> u8 {
        self.reserved
    }

    /// Packs the four nibbles into two bytes, high nibble first.
    ///
    /// ```
    /// use bysquare::Header;
    /// assert_eq!(Header::default().to_bytes(), [0x00, 0x00]);
    /// assert_eq!(Header::new(1, 2, 3, 4).unwrap().to_bytes(), [0x12, 0x34]);
    /// ```
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; HEADER_LENGTH] {
        [
            (self.by_square_type << 4) | self.version,
            (self.document_type << 4) | self.reserved,
        ]
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; HEADER_LENGTH]) -> Self {
        Self {
            by_square_type: bytes[0] >> 4,
            version: bytes[0] & NIBBLE_MAX,
            document_type: bytes[1] >> 4,
            reserved: bytes[1] & NIBBLE_MAX,
        }
    }
}

/// Encodes a payload length as a little-endian signed 16-bit integer.
///
/// # Errors
///
/// Returns [`Error::PayloadTooLarge`] if `length` exceeds `i16::MAX`.
pub fn write_length(length: usize) -> Result<[u8; LENGTH_LENGTH]> {
    i16::try_from(length)
        .map(i16::to_le_bytes)
        .map_err(|_| Error::PayloadTooLarge(length))
}

/// Splits the header and declared length off the front of `bytes`. The
/// declared length isn't checked against the remaining bytes.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if `bytes` is shorter than four bytes.
pub fn read_header(bytes: &[u8]) -> Result<(Header, i16)> {
    match *bytes {
        [first, second, low, high, ..] => Ok((
            Header::from_bytes([first, second]),
            i16::from_le_bytes([low, high]),
        )),
        _ => Err(Error::Truncated {
            required: PREAMBLE_LENGTH,
            actual: bytes.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        assert_eq!(Header::default().to_bytes(), [0x00, 0x00]);
    }

    #[test]
    fn test_header_args() {
        let header = Header::new(0b0000_0001, 0b0000_0010, 0b0000_0011, 0b0000_0100).unwrap();
        assert_eq!(header.to_bytes(), [0b0001_0010, 0b0011_0100]);
    }

    #[test]
    fn test_header_range() {
        for args in [(16, 0, 0, 0), (0, 16, 0, 0), (0, 0, 16, 0), (0, 0, 0, 255)] {
            let err = Header::new(args.0, args.1, args.2, args.3).unwrap_err();
            assert_eq!(err.to_string(), "Header range of values must be <0,15>");
            assert_eq!(err.kind(), crate::ErrorKind::Range);
        }
    }

    #[test]
    fn test_all_nibbles() {
        for a in 0..=15 {
            for b in 0..=15 {
                for c in 0..=15 {
                    for d in 0..=15 {
                        let header = Header::new(a, b, c, d).unwrap();
                        let mut bytes = header.to_bytes().to_vec();
                        bytes.extend_from_slice(&write_length(72).unwrap());
                        let (read, length) = read_header(&bytes).unwrap();
                        assert_eq!(read, header);
                        assert_eq!((read.by_square_type(), read.version()), (a, b));
                        assert_eq!((read.document_type(), read.reserved()), (c, d));
                        assert_eq!(length, 72);
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_length() {
        assert_eq!(write_length(72).unwrap(), [0x48, 0x00]);
        assert_eq!(write_length(0x1234).unwrap(), [0x34, 0x12]);
        assert_eq!(write_length(32767).unwrap(), [0xff, 0x7f]);
        assert!(matches!(
            write_length(32768).unwrap_err(),
            Error::PayloadTooLarge(32768)
        ));
    }

    #[test]
    fn test_read_header() {
        let (header, length) = read_header(&[0x00, 0x00, 0x48, 0x00, 0xff]).unwrap();
        assert_eq!(header, Header::default());
        assert_eq!(length, 72);

        let (_, length) = read_header(&[0x00, 0x00, 0xff, 0xff]).unwrap();
        assert_eq!(length, -1);

        assert!(matches!(
            read_header(&[0x00, 0x00, 0x48]).unwrap_err(),
            Error::Truncated {
                required: 4,
                actual: 3
            }
        ));
    }
}
