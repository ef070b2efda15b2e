use base64::{Engine as _, engine::general_purpose};
use image::ImageFormat;

use crate::error::Result;

/// 1x1 RGBA PNG shipped as the stand-in for every asset.
pub const PLACEHOLDER_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

/// Decode base64 text (standard alphabet, padded) into raw bytes.
pub fn decode_payload(encoded: &str) -> Result<Vec<u8>> {
    Ok(general_purpose::STANDARD.decode(encoded.trim())?)
}

pub fn embedded_payload() -> Result<Vec<u8>> {
    decode_payload(PLACEHOLDER_PNG_B64)
}

/// What the payload turns out to be once decoded as an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadInfo {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    pub len: usize,
    pub first_pixel: [u8; 4],
}

// Only used for diagnostics; the writer never looks at this.
pub fn inspect(bytes: &[u8]) -> Result<PayloadInfo> {
    let format = image::guess_format(bytes)?;
    let rgba = image::load_from_memory_with_format(bytes, format)?.to_rgba8();
    let first_pixel = rgba.pixels().next().map(|p| p.0).unwrap_or_default();
    Ok(PayloadInfo {
        format,
        width: rgba.width(),
        height: rgba.height(),
        len: bytes.len(),
        first_pixel,
    })
}
