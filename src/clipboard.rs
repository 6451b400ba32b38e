// src/clipboard.rs
//! Clipboard capability surface and the system-backed implementation.
//!
//! The pipeline never talks to the platform clipboard directly; it goes
//! through [`ClipboardSource`], which keeps the dispatch logic testable
//! with an in-memory fake.

use crate::constants::{PNG_FORMAT_IDS, TIFF_FORMAT_IDS};
use crate::error::{AppError, Result};
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use std::path::PathBuf;

/// Read-only view of the system clipboard used by the export pipeline.
pub trait ClipboardSource {
    /// Format identifiers currently advertised by the clipboard owner.
    fn available_types(&mut self) -> Result<Vec<String>>;

    /// File paths referenced on the clipboard, in advertised order.
    /// Empty when no file representation is present.
    fn file_references(&mut self) -> Result<Vec<PathBuf>>;

    /// Raw payload for one advertised format, if readable and non-empty.
    fn read_bytes(&mut self, format_id: &str) -> Option<Vec<u8>>;

    /// Encoded bytes of the inline bitmap, if any.
    ///
    /// PNG representations are preferred over TIFF. The returned bytes are
    /// a complete container in either format; callers decode by sniffing.
    fn image_bytes(&mut self) -> Option<Vec<u8>> {
        PNG_FORMAT_IDS
            .iter()
            .chain(TIFF_FORMAT_IDS)
            .find_map(|id| self.read_bytes(id))
    }
}

/// [`ClipboardSource`] backed by the platform clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let ctx = ClipboardContext::new()
            .map_err(|e| AppError::Clipboard(format!("failed to open clipboard: {}", e)))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSource for SystemClipboard {
    fn available_types(&mut self) -> Result<Vec<String>> {
        self.ctx
            .available_formats()
            .map_err(|e| AppError::Clipboard(format!("failed to list formats: {}", e)))
    }

    fn file_references(&mut self) -> Result<Vec<PathBuf>> {
        if !self.ctx.has(ContentFormat::Files) {
            return Ok(Vec::new());
        }
        let files = self
            .ctx
            .get_files()
            .map_err(|e| AppError::Clipboard(format!("failed to read file list: {}", e)))?;
        Ok(files.iter().map(|raw| reference_path(raw)).collect())
    }

    fn read_bytes(&mut self, format_id: &str) -> Option<Vec<u8>> {
        self.ctx
            .get_buffer(format_id)
            .ok()
            .filter(|bytes| !bytes.is_empty())
    }

    fn image_bytes(&mut self) -> Option<Vec<u8>> {
        for id in PNG_FORMAT_IDS.iter().chain(TIFF_FORMAT_IDS) {
            if let Some(bytes) = self.read_bytes(id) {
                return Some(bytes);
            }
        }

        // Some backends only expose a decoded image, not raw buffers.
        if self.ctx.has(ContentFormat::Image) {
            if let Ok(img) = self.ctx.get_image() {
                if let Ok(png) = img.to_png() {
                    return Some(png.get_bytes().to_vec());
                }
            }
        }

        None
    }
}

/// Converts one advertised reference, which may be a plain path or a
/// `file://` URI depending on the platform, into a filesystem path.
fn reference_path(raw: &str) -> PathBuf {
    if raw.starts_with("file://") {
        if let Ok(uri) = url::Url::parse(raw) {
            if let Ok(path) = uri.to_file_path() {
                return path;
            }
        }
    }
    PathBuf::from(raw)
}
