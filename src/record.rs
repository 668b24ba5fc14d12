//! The EPC QR Code text record: building it from its inputs and rendering it to text.
//!
//! The record is a fixed, positional list of lines:
//!
//! ```text
//! BCD
//! <version>
//! <character set>
//! <identification code>
//! <bic>
//! <name>
//! <iban>
//! <currency><amount>
//! <purpose>
//! <remittance reference>
//! <remittance text>
//! <information>
//! ```
//!
//! Empty fields still occupy their line, so consumers read by position.

use std::{
    cmp::Ordering,
    fmt::{Display, Write},
};

use crate::{
    config::Configuration,
    errors::{RenderError, ValidationError},
    transfer::Transfer,
    types::{CharacterSet, IdentificationCode, Purpose, Version, parse_amount},
    validate::size_cmp,
};

/// Service tag opening every record.
pub const SERVICE_TAG: &str = "BCD";

/// Largest payload in bytes the standard allows.
pub const MAX_PAYLOAD_SIZE: usize = 331;

/// Number of lines in a rendered record.
pub const LINE_COUNT: usize = 12;

/// One payment merged from a [`Configuration`] and a [`Transfer`], in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord<'a> {
    service_tag: &'static str,
    version: Version,
    character_set: CharacterSet,
    identification_code: IdentificationCode,
    bic: &'a str,
    name: &'a str,
    iban: &'a str,
    amount: String,
    purpose: Option<&'a Purpose>,
    remittance_reference: &'a str,
    remittance_text: &'a str,
    information: &'a str,
}

impl<'a> RawRecord<'a> {
    /// Validates the transfer amount and merges both inputs into a record.
    ///
    /// Only the amount is checked. Every other field is taken as is.
    pub fn build(
        config: &'a Configuration,
        transfer: &'a Transfer,
    ) -> Result<Self, ValidationError> {
        if let Err(err) = parse_amount(transfer.amount()) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Rejected transfer amount: {err}");
            return Err(err);
        }

        Ok(RawRecord {
            service_tag: SERVICE_TAG,
            version: config.version(),
            character_set: config.character_set(),
            identification_code: config.identification_code(),
            bic: config.bic(),
            name: config.name(),
            iban: config.iban(),
            amount: format!("{}{}", config.currency(), transfer.amount()),
            purpose: transfer.purpose(),
            remittance_reference: transfer.remittance_reference().unwrap_or_default(),
            remittance_text: transfer.remittance_text().unwrap_or_default(),
            information: transfer.information().unwrap_or_default(),
        })
    }

    /// Serializes the record and enforces [`MAX_PAYLOAD_SIZE`].
    pub fn render(&self) -> Result<String, RenderError> {
        let mut payload = String::with_capacity(MAX_PAYLOAD_SIZE);
        write!(payload, "{self}")?;

        if size_cmp(payload.as_bytes(), MAX_PAYLOAD_SIZE) == Ordering::Greater {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Payload of {} bytes exceeds the {MAX_PAYLOAD_SIZE} byte limit",
                payload.len()
            );
            return Err(RenderError::PayloadTooLarge {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Rendered EPC payload: {} bytes", payload.len());

        Ok(payload)
    }

    pub fn service_tag(&self) -> &'static str {
        self.service_tag
    }

    /// Currency code followed by the amount, e.g. `EUR123.45`.
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

impl Display for RawRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}\n{}",
            self.service_tag,
            self.version,
            self.character_set,
            self.identification_code,
            self.bic,
            self.name,
            self.iban,
            self.amount,
            self.purpose.map(Purpose::as_str).unwrap_or_default(),
            self.remittance_reference,
            self.remittance_text,
            self.information,
        )
    }
}
