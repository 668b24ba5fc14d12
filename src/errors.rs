//! Error types for building, rendering and encoding EPC payloads.

/// Rejections raised while building a [`RawRecord`](crate::record::RawRecord) from its inputs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The transfer amount is not a parseable decimal number.
    #[error("error invalid amount format {amount:?}: {source}")]
    AmountFormatInvalid {
        amount: String,
        #[source]
        source: AmountFormatError,
    },

    /// The transfer amount lies outside `0.01..=999999999.99`.
    #[error("error amount {amount} out of valid range")]
    AmountOutOfRange { amount: String },
}

/// Why an amount string is not a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountFormatError {
    #[error("{0}")]
    Syntax(#[from] std::num::ParseFloatError),

    #[error("not a finite number")]
    NotFinite,
}

/// Failures raised while serializing a record to its text payload.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The serialized payload exceeds the EPC byte ceiling.
    #[error("sepa transfer information too long: {size} bytes, at most {max} allowed")]
    PayloadTooLarge { size: usize, max: usize },

    /// Writing the fields failed. Not expected for a well-formed record.
    #[error("error rendering sepa information: {0}")]
    TemplateRenderFailure(#[from] std::fmt::Error),
}

/// Top-level error, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error creating raw text: {0}")]
    Build(#[from] ValidationError),

    #[error("error rendering raw text: {0}")]
    Render(#[from] RenderError),

    #[error("error rendering qr code: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON configuration could not be loaded.
    #[error("Serde JSON error: {0}")]
    Config(#[from] serde_json::Error),
}

/// A specialized `Result` type for EPC payload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised when a string does not name a known EPC code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported {kind} {value:?}")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub value: String,
}
