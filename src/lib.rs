//! `bysquare` encodes payment orders into the compact alphanumeric payload
//! of the PAY by square standard, ready to be rendered as a QR code, and
//! parses such payloads back.
//!
//! # Generate a payload
//! ```
//! use bysquare::{generate, Model};
//! let model = Model {
//!     iban: Some("SK9611000000002918599669".into()),
//!     amount: Some(100.0),
//!     currency_code: Some("EUR".into()),
//!     variable_symbol: Some("123".into()),
//!     payments: Some(1),
//!     payment_options: Some(1),
//!     bank_accounts: Some(1),
//!     ..Model::default()
//! };
//! let encoded = generate(&model).unwrap();
//! assert_eq!(
//!     encoded,
//!     "0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2AE6EGHKR82DKS5NBJ3331VUFQIV0JGMR743UJCKSAKEM9QGVVVOIVH000"
//! );
//! ```
//!
//! # Parse a scanned payload
//!
//! [`detect`] is a cheap pre-check for scanner output; [`parse`] runs the full
//! validation.
//! ```
//! let scanned = "0004G0005ES17OQ09C98Q7ME34TCR3V71LVKD2AE6EGHKR82DKS5NBJ3331VUFQIV0JGMR743UJCKSAKEM9QGVVVOIVH000";
//! assert!(bysquare::detect(scanned));
//! let model = bysquare::parse(scanned).unwrap();
//! assert_eq!(model.iban.as_deref(), Some("SK9611000000002918599669"));
//! assert_eq!(model.amount, Some(100.0));
//! ```

pub mod alphanumeric;
pub mod checksum;
pub mod compression;
pub mod error;
pub mod field;
pub mod header;
pub mod model;
pub mod payload;
pub mod tabbed;

pub use self::error::{Error, ErrorKind};
pub use self::field::Field;
pub use self::header::Header;
pub use self::model::{Model, Value};
pub use self::payload::{decode, detect, generate, generate_with, parse};

#[must_use]
pub fn crc32() -> crc::Crc<u32> {
    crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC)
}
