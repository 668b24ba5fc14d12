use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Luma};
use qrcodegen::{QrCode, QrCodeEcc};

use super::{ErrorCorrection, QrEncoder};

/// Width of the white border around the symbol, in modules.
const QUIET_ZONE: i32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum PngEncodeError {
    #[error("payload does not fit in a QR code: {0}")]
    DataTooLong(#[from] qrcodegen::DataTooLong),

    #[error("image size must be at least one pixel")]
    InvalidSize,

    #[error("PNG encoding error: {0}")]
    Image(#[from] image::ImageError),
}

impl From<ErrorCorrection> for QrCodeEcc {
    fn from(value: ErrorCorrection) -> Self {
        match value {
            ErrorCorrection::Low => QrCodeEcc::Low,
            ErrorCorrection::Medium => QrCodeEcc::Medium,
            ErrorCorrection::Quartile => QrCodeEcc::Quartile,
            ErrorCorrection::High => QrCodeEcc::High,
        }
    }
}

/// Encodes payloads as square grayscale PNG images.
///
/// The symbol, including its quiet zone, is scaled to `size` pixels with
/// nearest-neighbour sampling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl QrEncoder for PngEncoder {
    type Error = PngEncodeError;

    fn encode(
        &self,
        text: &str,
        level: ErrorCorrection,
        size: u32,
    ) -> Result<Vec<u8>, Self::Error> {
        if size == 0 {
            return Err(PngEncodeError::InvalidSize);
        }

        let qr = QrCode::encode_text(text, level.into())?;
        let modules = i64::from(qr.size() + 2 * QUIET_ZONE);
        let to_module =
            |pixel: u32| (i64::from(pixel) * modules / i64::from(size)) as i32 - QUIET_ZONE;

        let img = ImageBuffer::<Luma<u8>, Vec<u8>>::from_fn(size, size, |x, y| {
            if qr.get_module(to_module(x), to_module(y)) {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        });

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
