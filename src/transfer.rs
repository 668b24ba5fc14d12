//! Per-payment data: amount, purpose and remittance information.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::Purpose;

/// A single payment request.
///
/// The amount is kept as written and appears verbatim in the payload, so
/// `"5"` and `"5.00"` produce different payloads. Length limits of the text
/// fields (reference 25, text 140, information 70 characters) are not checked;
/// only the total payload size is.
///
/// ```
/// use epc_qr::{transfer::Transfer, types::Purpose};
///
/// let transfer = Transfer::builder()
///     .amount("12.50")
///     .purpose(Purpose::Gdds)
///     .remittance_text("Invoice 2024-117")
///     .build();
///
/// assert_eq!(transfer.amount(), "12.50");
/// assert_eq!(transfer.remittance_reference(), None);
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    #[builder(into)]
    amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    purpose: Option<Purpose>,
    /// Structured creditor reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    remittance_reference: Option<String>,
    /// Unstructured remittance text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    remittance_text: Option<String>,
    /// Beneficiary to originator information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    information: Option<String>,
}

impl Transfer {
    /// Creates a transfer from all of its fields.
    pub fn new(
        amount: impl Into<String>,
        purpose: Option<Purpose>,
        remittance_reference: Option<String>,
        remittance_text: Option<String>,
        information: Option<String>,
    ) -> Self {
        Transfer {
            amount: amount.into(),
            purpose,
            remittance_reference,
            remittance_text,
            information,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn purpose(&self) -> Option<&Purpose> {
        self.purpose.as_ref()
    }

    pub fn remittance_reference(&self) -> Option<&str> {
        self.remittance_reference.as_deref()
    }

    pub fn remittance_text(&self) -> Option<&str> {
        self.remittance_text.as_deref()
    }

    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }
}
