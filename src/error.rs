// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant maps to one failure mode of the export run. The dispatch
//! branches in `pipeline` decide fatal-vs-skip inline; nothing here is
//! thrown across component boundaries into a generic handler.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Output folder could not be prepared — fatal before anything is read.
    #[error("Failed to prepare output folder: {0}")]
    Config(String),

    /// A referenced file is not a decodable image. Triggers the raw-copy
    /// fallback rather than aborting the run.
    #[error("Not a decodable image: {0}")]
    Decode(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    /// PDF open or render failure. Open failures fall through to the image
    /// branch; per-page failures skip that page only.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Clipboard holds neither a file reference nor bitmap data.
    #[error("No image data in clipboard")]
    NoData,
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::Decode(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
