//! The full pipeline between a [`Model`] and its alphanumeric payload.
//!
//! ```text
//! [header: 2B][length: 2B LE] + lzma1([crc32: 4B LE][tabbed string])
//! ```
//! rendered with [`alphanumeric::encode`].

use crate::alphanumeric;
use crate::checksum::{self, CHECKSUM_LENGTH};
use crate::compression;
use crate::error::{Error, Result};
use crate::field::SLOT_COUNT;
use crate::header::{self, Header, PREAMBLE_LENGTH};
use crate::model::Model;
use crate::tabbed;

/// Smallest possible checksummed payload: a checksum and the separators of
/// an empty document.
pub const MIN_PAYLOAD_LENGTH: usize = CHECKSUM_LENGTH + SLOT_COUNT - 1;

/// Encodes `model` as a version 0 payment order.
///
/// # Examples
///
/// ```
/// let model = bysquare::Model {
///     iban: Some("SK9611000000002918599669".into()),
///     amount: Some(100.0),
///     currency_code: Some("EUR".into()),
///     variable_symbol: Some("123".into()),
///     payments: Some(1),
///     payment_options: Some(1),
///     bank_accounts: Some(1),
///     ..bysquare::Model::default()
/// };
/// let encoded = bysquare::generate(&model).unwrap();
/// assert!(encoded.starts_with("0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2A"));
/// assert_eq!(bysquare::parse(&encoded).unwrap(), model);
/// ```
///
/// # Errors
///
/// Fails if the compressor reports an error or the payload outgrows the
/// 16-bit length field.
pub fn generate(model: &Model) -> Result<String> {
    generate_with(model, Header::default())
}

/// Encodes `model` behind a caller-chosen header.
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] unless the header names a payment
/// order, plus the errors of [`generate`].
pub fn generate_with(model: &Model, header: Header) -> Result<String> {
    if header.by_square_type() != header::PAY {
        return Err(Error::UnsupportedType(header.by_square_type()));
    }
    let tabbed = tabbed::serialize(model);
    let framed = checksum::frame(&tabbed);
    let length = header::write_length(framed.len())?;
    let compressed = compression::compress(&framed)?;

    let mut bytes = Vec::with_capacity(PREAMBLE_LENGTH + compressed.len());
    bytes.extend_from_slice(&header.to_bytes());
    bytes.extend_from_slice(&length);
    bytes.extend_from_slice(&compressed);
    let encoded = alphanumeric::encode(&bytes);
    log::debug!(
        "generated {} symbols from {} payload bytes ({} compressed)",
        encoded.len(),
        framed.len(),
        compressed.len()
    );
    Ok(encoded)
}

/// Decodes a payload back into its [`Model`].
///
/// # Errors
///
/// See [`decode`].
pub fn parse(encoded: &str) -> Result<Model> {
    decode(encoded).map(|(_, model)| model)
}

/// Decodes a payload into its header and [`Model`].
///
/// # Errors
///
/// Fails with a format error on characters outside the alphabet, a
/// truncated header, an unsupported by square type, a corrupt LZMA stream, a
/// length mismatch or a malformed tabbed string, and with
/// [`Error::Checksum`] if the checksum doesn't validate.
pub fn decode(encoded: &str) -> Result<(Header, Model)> {
    let bytes = alphanumeric::decode(encoded)?;
    let (header, declared) = header::read_header(&bytes)?;
    log::trace!("read header {header:?} declaring {declared} bytes");
    if header.by_square_type() != header::PAY {
        return Err(Error::UnsupportedType(header.by_square_type()));
    }
    let declared = usize::try_from(declared).map_err(|_| Error::InvalidLength(declared))?;

    let framed = compression::decompress(&bytes[PREAMBLE_LENGTH..], declared)?;
    let tabbed = checksum::unframe(&framed)?;
    let model = tabbed::deserialize(tabbed)?;
    log::debug!(
        "parsed {} symbols into {} fields",
        encoded.len(),
        model.values().count()
    );
    Ok((header, model))
}

/// Cheap check whether `encoded` looks like a payload this crate can parse.
///
/// Only the alphabet, the preamble and the presence of a compressed body are
/// inspected; [`parse`] may still fail on input accepted here.
///
/// ```
/// assert!(!bysquare::detect(""));
/// assert!(!bysquare::detect("0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2Ax"));
/// assert!(bysquare::detect("0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2A"));
/// ```
#[must_use]
pub fn detect(encoded: &str) -> bool {
    if encoded.is_empty() {
        return false;
    }
    let preamble_symbols = alphanumeric::encoded_length(PREAMBLE_LENGTH);
    if let Some(symbol) = encoded
        .chars()
        .find(|&symbol| alphanumeric::symbol_value(symbol).is_none())
    {
        log::debug!("rejected payload: invalid character {symbol:?}");
        return false;
    }
    if encoded.len() <= preamble_symbols {
        log::debug!("rejected payload: {} symbols leave no room for a body", encoded.len());
        return false;
    }
    // All symbols are ASCII past the alphabet check.
    let Ok((header, declared)) = alphanumeric::decode(&encoded[..preamble_symbols])
        .and_then(|bytes| header::read_header(&bytes))
    else {
        return false;
    };
    let plausible = header.by_square_type() == header::PAY
        && usize::try_from(declared).is_ok_and(|declared| declared >= MIN_PAYLOAD_LENGTH);
    if !plausible {
        log::debug!("rejected payload: implausible header {header:?} declaring {declared} bytes");
    }
    plausible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabbed::test_utils::reference_model;

    const REFERENCE: &str = "0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2AE6EGHKR82DKS5NBJ3331VUFQIV0JGMR743UJCKSAKEM9QGVVVOIVH000";

    #[test]
    fn test_generate() {
        assert_eq!(generate(&reference_model()).unwrap(), REFERENCE);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse(REFERENCE).unwrap(), reference_model());
    }

    #[test]
    fn test_decode_header() {
        let (header, _) = decode(REFERENCE).unwrap();
        assert_eq!(header, Header::default());

        let versioned = Header::new(header::PAY, 1, 0, 0).unwrap();
        let encoded = generate_with(&reference_model(), versioned).unwrap();
        assert!(encoded.starts_with("04"));
        assert_eq!(decode(&encoded).unwrap(), (versioned, reference_model()));
    }

    #[test]
    fn test_round_trip() {
        let model = Model {
            invoice_id: Some("2024/0042".into()),
            payments: Some(1),
            payment_options: Some(1),
            amount: Some(1234.56),
            currency_code: Some("EUR".into()),
            payment_due_date: Some("20241231".into()),
            variable_symbol: Some("1234567890".into()),
            constant_symbol: Some("0308".into()),
            specific_symbol: Some("42".into()),
            payment_note: Some("Platba za elektrinu, ďakujem".into()),
            bank_accounts: Some(1),
            iban: Some("SK3112000000198742637541".into()),
            bic: Some("SUBASKBX".into()),
            beneficiary_name: Some("Ján Novák".into()),
            beneficiary_address_line1: Some("Hlavná 1".into()),
            beneficiary_address_line2: Some("811 01 Bratislava".into()),
            ..Model::default()
        };
        let encoded = generate(&model).unwrap();
        assert!(detect(&encoded));
        assert_eq!(parse(&encoded).unwrap(), model);
        assert_eq!(parse(&generate(&Model::default()).unwrap()).unwrap(), Model::default());
    }

    #[test]
    fn test_unsupported_type() {
        let invoice = Header::new(1, 0, 0, 0).unwrap();
        assert!(matches!(
            generate_with(&reference_model(), invoice).unwrap_err(),
            Error::UnsupportedType(1)
        ));

        let mut bytes = alphanumeric::decode(REFERENCE).unwrap();
        bytes[0] = 0x10;
        let encoded = alphanumeric::encode(&bytes);
        assert!(matches!(
            parse(&encoded).unwrap_err(),
            Error::UnsupportedType(1)
        ));
        assert!(!detect(&encoded));
    }

    #[test]
    fn test_payload_too_large() {
        let model = Model {
            payment_note: Some("x".repeat(40_000)),
            ..Model::default()
        };
        let err = generate(&model).unwrap_err();
        assert!(matches!(err, Error::PayloadTooLarge(_)));
        assert_eq!(err.kind(), crate::ErrorKind::Range);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse("").unwrap_err(),
            Error::Truncated { required: 4, actual: 0 }
        ));
        assert!(matches!(
            parse("0004g").unwrap_err(),
            Error::InvalidCharacter('g')
        ));

        let mut bytes = alphanumeric::decode(REFERENCE).unwrap();
        bytes[2] = 0x47;
        assert!(matches!(
            parse(&alphanumeric::encode(&bytes)).unwrap_err(),
            Error::LengthMismatch { expected: 71, .. }
        ));

        bytes[2] = 0xff;
        bytes[3] = 0xff;
        assert!(matches!(
            parse(&alphanumeric::encode(&bytes)).unwrap_err(),
            Error::InvalidLength(-1)
        ));

        let truncated = &REFERENCE[..REFERENCE.len() / 2];
        assert_eq!(parse(truncated).unwrap_err().kind(), crate::ErrorKind::Format);
    }

    #[test]
    fn test_checksum_mismatch() {
        let framed = {
            let mut framed = checksum::frame(&tabbed::serialize(&reference_model()));
            framed[0] ^= 0xff;
            framed
        };
        let mut bytes = Header::default().to_bytes().to_vec();
        bytes.extend_from_slice(&header::write_length(framed.len()).unwrap());
        bytes.extend_from_slice(&compression::compress(&framed).unwrap());
        let err = parse(&alphanumeric::encode(&bytes)).unwrap_err();
        assert!(matches!(err, Error::Checksum { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Checksum);
    }

    #[test]
    fn test_detect() {
        assert!(detect(REFERENCE));
        assert!(!detect(""));
        assert!(!detect(&format!("{REFERENCE}W")));
        assert!(!detect(&REFERENCE.to_lowercase()));
        // an empty document declares 36 bytes
        assert!(detect("00028000"));
        assert!(!detect("00026000"));
        assert!(!detect("000FVVO0"));
        assert!(!detect("2004G000"));
    }

    #[test]
    fn test_detect_needs_body() {
        assert!(!detect("0004G00"));
        assert!(!detect(&REFERENCE[..7]));
        assert!(detect("0004G000"));
        assert!(detect(&REFERENCE[..8]));
    }
}
