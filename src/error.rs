//! Errors returned while generating or parsing a payload.

use crate::field::Field;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value lies outside the range the wire format can carry.
    Range,
    /// The input is malformed.
    Format,
    /// The CRC32 checksum doesn't validate.
    Checksum,
    /// The compression stream failed.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A header nibble is outside `0..=15`.
    #[error("Header range of values must be <0,15>")]
    HeaderRange { value: u8 },

    /// The checksum-framed payload doesn't fit into the signed 16-bit length field.
    #[error("payload of {0} bytes exceeds the maximum of 32767")]
    PayloadTooLarge(usize),

    /// The tabbed string doesn't have one token per slot.
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A numeric field holds something that isn't a number.
    #[error("invalid value {value:?} for field {field}")]
    InvalidValue { field: Field, value: String },

    /// The alphanumeric string contains a character outside `0-9A-V`.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// Not enough bytes for the structure being read.
    #[error("input too short: need at least {required} bytes, got {actual}")]
    Truncated { required: usize, actual: usize },

    /// The decompressed payload doesn't match the length declared in the header.
    #[error("length mismatch: header says {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The header declares a negative payload length.
    #[error("invalid declared length {0}")]
    InvalidLength(i16),

    /// The header names a by square type this crate has no field table for.
    #[error("unsupported by square type {0}")]
    UnsupportedType(u8),

    /// The checksummed payload isn't UTF-8 text.
    #[error("payload is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    /// The CRC32 checksum doesn't validate.
    #[error("invalid checksum: expected {expected:#010x}, got {actual:#010x}")]
    Checksum { expected: u32, actual: u32 },

    /// The LZMA encoder reported an error.
    #[error("compression error: {0}")]
    Compression(#[from] liblzma::stream::Error),

    /// The LZMA decoder rejected the payload.
    #[error("decompression error: {0}")]
    Decompression(liblzma::stream::Error),

    /// The LZMA stream ended before its end marker.
    #[error("compressed payload ended unexpectedly")]
    UnexpectedEnd,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::HeaderRange { .. } | Self::PayloadTooLarge(_) => ErrorKind::Range,
            Self::FieldCount { .. }
            | Self::InvalidValue { .. }
            | Self::InvalidCharacter(_)
            | Self::Truncated { .. }
            | Self::LengthMismatch { .. }
            | Self::InvalidLength(_)
            | Self::UnsupportedType(_)
            | Self::Utf8(_)
            | Self::Decompression(_)
            | Self::UnexpectedEnd => ErrorKind::Format,
            Self::Checksum { .. } => ErrorKind::Checksum,
            Self::Compression(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
