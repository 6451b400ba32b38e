// src/media/codec.rs
//! Image decode/encode on top of the `image` crate.

use crate::error::{AppError, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Decodes encoded image bytes, sniffing the container format.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| AppError::Decode(e.to_string()))
}

/// Decodes an image file from disk.
///
/// The format is guessed from content, not the extension, so a mislabelled
/// file still decodes when its bytes are a recognized raster format.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    ImageReader::open(path)
        .map_err(|e| AppError::Decode(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| AppError::Decode(format!("{}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| AppError::Decode(format!("{}: {}", path.display(), e)))
}

/// Encodes a decoded image as PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| AppError::Encode(e.to_string()))?;
    Ok(buf.into_inner())
}
