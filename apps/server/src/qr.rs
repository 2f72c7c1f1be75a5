//! # QR Code Encoder
//!
//! Encodes the stored document's public URL into a scannable PNG.
//!
//! ## Fixed Configuration
//! - Error correction level **M** (15% recovery): enough redundancy for
//!   reliable optical scanning of a short URL without bloating the symbol
//! - Minimum 360×360 px with a quiet zone border
//! - Grayscale PNG output
//!
//! Deterministic: the same URL always yields the same bytes. Payloads that
//! exceed QR capacity fail with [`QrEncodeError`]; nothing is truncated.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

/// Minimum rendered image size in pixels, quiet zone included.
const MIN_DIMENSIONS_PX: u32 = 360;

// =============================================================================
// Errors
// =============================================================================

/// QR encoding failures. Always fatal to the request.
#[derive(Debug, Error)]
pub enum QrEncodeError {
    /// The payload does not fit a QR symbol at the configured error
    /// correction level.
    #[error("QR encoding failed: {0:?}")]
    Encode(qrcode::types::QrError),

    /// PNG serialization of the rendered symbol failed.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

impl From<qrcode::types::QrError> for QrEncodeError {
    fn from(err: qrcode::types::QrError) -> Self {
        QrEncodeError::Encode(err)
    }
}

// =============================================================================
// Encoder
// =============================================================================

/// Encodes a URL string into QR PNG bytes.
///
/// ## Example
/// ```rust,ignore
/// let png = encode_url("http://localhost:8000/media/receipt-....pdf")?;
/// assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
/// ```
pub fn encode_url(url: &str) -> Result<Vec<u8>, QrEncodeError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;

    let rendered = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSIONS_PX, MIN_DIMENSIONS_PX)
        .quiet_zone(true)
        .build();

    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(rendered).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(bytes)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_produces_png() {
        let png = encode_url("http://localhost:8000/media/receipt-1.pdf").unwrap();
        assert!(png.starts_with(&PNG_SIGNATURE));
        assert!(png.len() > 100);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let url = "http://localhost:8000/media/receipt-20260826-abc.pdf";
        assert_eq!(encode_url(url).unwrap(), encode_url(url).unwrap());
    }

    #[test]
    fn test_different_urls_differ() {
        let a = encode_url("http://localhost/a.pdf").unwrap();
        let b = encode_url("http://localhost/b.pdf").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_oversized_payload_fails_without_truncation() {
        // QR capacity at EC level M tops out a little under 3 KB of bytes.
        let oversized = "x".repeat(8000);
        assert!(matches!(
            encode_url(&oversized),
            Err(QrEncodeError::Encode(_))
        ));
    }
}
