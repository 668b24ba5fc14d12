//! Boundary to the QR image encoder.
//!
//! Any barcode library can sit behind [`QrEncoder`]. With the `qr` feature the
//! crate ships [`PngEncoder`], built on `qrcodegen` and `image`.

use bon::Builder;

#[cfg(feature = "qr")]
mod png;

#[cfg(feature = "qr")]
pub use png::*;

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCorrection {
    /// Recovers about 7% of the symbol.
    Low,
    /// Recovers about 15% of the symbol. Recommended by the EPC guidelines.
    #[default]
    Medium,
    /// Recovers about 25% of the symbol.
    Quartile,
    /// Recovers about 30% of the symbol.
    High,
}

/// Image settings handed to the encoder.
///
/// The default, medium error correction at 256 pixels, is the reference configuration.
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrImageConfig {
    #[builder(default)]
    pub level: ErrorCorrection,
    /// Width and height of the image in pixels.
    #[builder(default = QrImageConfig::REFERENCE_SIZE)]
    pub size: u32,
}

impl QrImageConfig {
    pub const REFERENCE_SIZE: u32 = 256;
}

impl Default for QrImageConfig {
    fn default() -> Self {
        QrImageConfig {
            level: ErrorCorrection::default(),
            size: QrImageConfig::REFERENCE_SIZE,
        }
    }
}

/// Turns a text payload into image bytes.
pub trait QrEncoder {
    type Error: std::error::Error + Send + Sync + 'static;

    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        size: u32,
    ) -> Result<Vec<u8>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_config() {
        let config = QrImageConfig::default();
        assert_eq!(config.level, ErrorCorrection::Medium);
        assert_eq!(config.size, 256);
        assert_eq!(QrImageConfig::builder().build(), config);
    }

    #[test]
    fn builder_overrides() {
        let config = QrImageConfig::builder()
            .level(ErrorCorrection::High)
            .size(512)
            .build();
        assert_eq!(config.level, ErrorCorrection::High);
        assert_eq!(config.size, 512);
    }
}
