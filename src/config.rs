//! Beneficiary configuration: the static half of every payload.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    types::{CharacterSet, IdentificationCode, Version},
};

/// Identity and bank data of the beneficiary. Rarely changes between transfers.
///
/// Build it once with [`Configuration::new`] or [`Configuration::builder`] and
/// reuse it for every [`Transfer`](crate::transfer::Transfer).
///
/// ```
/// use epc_qr::{
///     config::Configuration,
///     types::{CharacterSet, IdentificationCode, Version},
/// };
///
/// let config = Configuration::builder()
///     .version(Version::V2)
///     .character_set(CharacterSet::Utf8)
///     .identification_code(IdentificationCode::Inst)
///     .bic("")
///     .name("Red Cross")
///     .iban("DE89370400440532013000")
///     .currency("EUR")
///     .build();
///
/// assert_eq!(config.name(), "Red Cross");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    version: Version,
    character_set: CharacterSet,
    identification_code: IdentificationCode,
    /// BIC of the beneficiary bank. Required by version 001, not checked here.
    #[builder(into)]
    bic: String,
    #[builder(into)]
    name: String,
    #[builder(into)]
    iban: String,
    /// ISO 4217 currency code, e.g. `EUR`.
    #[builder(into)]
    currency: String,
}

impl Configuration {
    /// Creates a configuration from all of its fields.
    pub fn new(
        version: Version,
        character_set: CharacterSet,
        identification_code: IdentificationCode,
        bic: impl Into<String>,
        name: impl Into<String>,
        iban: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Configuration {
            version,
            character_set,
            identification_code,
            bic: bic.into(),
            name: name.into(),
            iban: iban.into(),
            currency: currency.into(),
        }
    }

    /// Loads a configuration from its JSON form.
    ///
    /// ```
    /// use epc_qr::{config::Configuration, types::Version};
    ///
    /// let config = Configuration::from_json(r#"{
    ///     "version": "001",
    ///     "characterSet": 1,
    ///     "identificationCode": "SCT",
    ///     "bic": "BFSWDE33BER",
    ///     "name": "Wikimedia Foerdergesellschaft",
    ///     "iban": "DE33100205000001194700",
    ///     "currency": "EUR"
    /// }"#).unwrap();
    ///
    /// assert_eq!(config.version(), Version::V1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    pub fn identification_code(&self) -> IdentificationCode {
        self.identification_code
    }

    pub fn bic(&self) -> &str {
        &self.bic
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}
