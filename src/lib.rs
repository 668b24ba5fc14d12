//! # EPC QR
//!
//! Builds the text payload of an EPC QR Code (the "BCD" record used for SEPA
//! credit transfers), validates it against the limits of the standard and,
//! optionally, hands it to a QR image encoder.
//!
//! ## Core Components Overview
//!
//! - **[`config`]**: [`Configuration`](config::Configuration), the beneficiary data shared by many transfers.
//! - **[`transfer`]**: [`Transfer`](transfer::Transfer), the per-payment data.
//! - **[`record`]**: [`RawRecord`](record::RawRecord), which merges both, validates the amount and renders the payload.
//! - **[`encoder`]**: the [`QrEncoder`](encoder::QrEncoder) boundary and, with the `qr` feature, a PNG implementation.
//! - **[`types`]**: code tables (version, character set, identification code, purpose) and amount parsing.
//!
//! ## Example
//!
//! ```
//! use epc_qr::{
//!     config::Configuration,
//!     payload_text,
//!     transfer::Transfer,
//!     types::{CharacterSet, IdentificationCode, Purpose, Version},
//! };
//!
//! let config = Configuration::new(
//!     Version::V1,
//!     CharacterSet::Utf8,
//!     IdentificationCode::Sct,
//!     "YOURBIC",
//!     "YOURNAME",
//!     "YOURIBAN",
//!     "EUR",
//! );
//! let transfer = Transfer::new(
//!     "123.45",
//!     Some(Purpose::Gdds),
//!     Some("Payment for invoice".to_string()),
//!     None,
//!     None,
//! );
//!
//! let payload = payload_text(&config, &transfer).unwrap();
//! assert_eq!(
//!     payload,
//!     "BCD\n001\n1\nSCT\nYOURBIC\nYOURNAME\nYOURIBAN\nEUR123.45\nGDDS\nPayment for invoice\n\n"
//! );
//! ```
//!
//! ## Limits
//!
//! Only two checks gate a payload: the amount must lie in `0.01..=999999999.99`
//! and the rendered text must not exceed [`MAX_PAYLOAD_SIZE`](record::MAX_PAYLOAD_SIZE)
//! bytes. Field lengths, the BIC requirement of version 001 and IBAN checksums
//! are left to the caller.

pub mod config;
pub mod encoder;
pub mod errors;
pub mod record;
pub mod transfer;
pub mod types;
pub mod validate;

use crate::{
    config::Configuration,
    encoder::{QrEncoder, QrImageConfig},
    errors::{Error, Result},
    record::RawRecord,
    transfer::Transfer,
};

/// Builds and renders the text payload for `transfer`.
pub fn payload_text(config: &Configuration, transfer: &Transfer) -> Result<String> {
    let record = RawRecord::build(config, transfer)?;
    Ok(record.render()?)
}

/// Builds the payload and encodes it as an image with `encoder`.
///
/// ```
/// use std::convert::Infallible;
///
/// use epc_qr::{
///     config::Configuration,
///     encoder::{ErrorCorrection, QrEncoder, QrImageConfig},
///     qr_code_with,
///     transfer::Transfer,
///     types::{CharacterSet, IdentificationCode, Version},
/// };
///
/// struct Echo;
///
/// impl QrEncoder for Echo {
///     type Error = Infallible;
///
///     fn encode(&self, text: &str, _: ErrorCorrection, _: u32) -> Result<Vec<u8>, Infallible> {
///         Ok(text.as_bytes().to_vec())
///     }
/// }
///
/// let config = Configuration::new(
///     Version::V2, CharacterSet::Utf8, IdentificationCode::Sct, "", "Jane", "DE89370400440532013000", "EUR",
/// );
/// let transfer = Transfer::builder().amount("9.99").build();
///
/// let bytes = qr_code_with(&config, &transfer, &Echo, QrImageConfig::default()).unwrap();
/// assert!(bytes.starts_with(b"BCD\n002\n"));
/// ```
pub fn qr_code_with<E: QrEncoder>(
    config: &Configuration,
    transfer: &Transfer,
    encoder: &E,
    image: QrImageConfig,
) -> Result<Vec<u8>> {
    let payload = payload_text(config, transfer)?;
    let bytes = encoder
        .encode(&payload, image.level, image.size)
        .map_err(|err| Error::Encode(Box::new(err)))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Encoded {} byte payload into a {} byte image ({}px, {:?})",
        payload.len(),
        bytes.len(),
        image.size,
        image.level
    );

    Ok(bytes)
}

/// Builds the payload and encodes it as a PNG with the reference image settings.
#[cfg(feature = "qr")]
pub fn qr_code(config: &Configuration, transfer: &Transfer) -> Result<Vec<u8>> {
    qr_code_with(
        config,
        transfer,
        &encoder::PngEncoder,
        QrImageConfig::default(),
    )
}
