// src/pipeline.rs
//! One-shot dispatch over clipboard content.
//!
//! States are evaluated in strict priority order: a file reference wins
//! over the inline bitmap, and the inline bitmap wins over nothing. The
//! first matching state decides the outcome; later states are never
//! consulted. File references carry the most information (original bytes,
//! possible multi-page structure), which is why they are checked first.

use crate::clipboard::ClipboardSource;
use crate::config::ExportConfig;
use crate::error::{AppError, Result};
use crate::media::codec;
use crate::media::{PdfPages, PdfRenderer};
use crate::output::{page_base, resolved_path, writer};
use std::path::{Path, PathBuf};

/// Which dispatch branch produced a saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedKind {
    /// One rasterized page of a referenced PDF document.
    PdfPage { page_number: usize },
    /// A referenced image file, re-encoded as PNG.
    ImageFile,
    /// A referenced file copied verbatim (raw-copy fallback).
    RawCopy,
    /// The inline clipboard bitmap, re-encoded as PNG.
    Bitmap,
}

/// A file the run wrote to disk.
#[derive(Debug, Clone)]
pub struct SavedFile {
    pub path: PathBuf,
    #[allow(dead_code)] // Read by library consumers
    pub bytes_written: usize,
    pub kind: SavedKind,
}

/// A PDF page that failed to rasterize or write and was skipped.
#[derive(Debug, Clone)]
pub struct PageFailure {
    pub page_number: usize,
    pub error: String,
}

/// Result of one export run.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub saved: Vec<SavedFile>,
    pub skipped_pages: Vec<PageFailure>,
}

impl ExportReport {
    fn single(saved: SavedFile) -> Self {
        Self {
            saved: vec![saved],
            skipped_pages: Vec::new(),
        }
    }
}

/// Owns the whole flow: clipboard inspection → content-type dispatch →
/// collision-resolved file writes.
pub struct ClipboardExporter<'a> {
    config: &'a ExportConfig,
}

impl<'a> ClipboardExporter<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self { config }
    }

    /// Runs the one-shot dispatch and returns what was written.
    ///
    /// `Err(AppError::NoData)` means the clipboard held neither a file
    /// reference nor bitmap data; any other error is a fatal failure of
    /// the branch that matched.
    pub fn run(
        &self,
        clipboard: &mut dyn ClipboardSource,
        pdf: &dyn PdfRenderer,
    ) -> Result<ExportReport> {
        match clipboard.available_types() {
            Ok(types) => log::debug!("Clipboard advertises {:?}", types),
            Err(e) => log::debug!("Could not list clipboard formats: {}", e),
        }

        let references = clipboard.file_references()?;
        if let Some(first) = references.first() {
            log::info!("Clipboard holds a file reference: {}", first.display());
            return self.export_file_reference(first, pdf);
        }

        if let Some(bytes) = clipboard.image_bytes() {
            log::info!("Clipboard holds an inline bitmap ({} bytes)", bytes.len());
            return self.export_bitmap(&bytes);
        }

        Err(AppError::NoData)
    }

    /// Branch 1: a file reference. PDF → per-page rasterization; image →
    /// PNG re-encode; anything else → raw byte copy.
    fn export_file_reference(
        &self,
        source: &Path,
        pdf: &dyn PdfRenderer,
    ) -> Result<ExportReport> {
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if extension == "pdf" {
            match pdf.open(source) {
                Ok(pages) => return self.export_pdf_pages(pages.as_ref()),
                // An unreadable PDF is treated like any other file: try the
                // image decoder, then fall back to the raw copy.
                Err(e) => log::warn!("Not a readable PDF, trying image decode: {}", e),
            }
        }

        match codec::decode_file(source) {
            Ok(image) => {
                let bytes = codec::encode_png(&image)?;
                let target = resolved_path(&self.config.folder, &self.config.base_name);
                let written = writer::write_png(&target, &bytes)?;
                return Ok(ExportReport::single(SavedFile {
                    path: target,
                    bytes_written: written,
                    kind: SavedKind::ImageFile,
                }));
            }
            Err(e) => log::debug!("Image decode failed, falling back to raw copy: {}", e),
        }

        let target = resolved_path(&self.config.folder, &self.config.base_name);
        let written = writer::copy_raw(source, &target)?;
        Ok(ExportReport::single(SavedFile {
            path: target,
            bytes_written: written,
            kind: SavedKind::RawCopy,
        }))
    }

    /// Branch 1a: every page of a referenced PDF, in page order. A page
    /// that fails is reported and skipped; the loop always completes.
    fn export_pdf_pages(&self, pages: &dyn PdfPages) -> Result<ExportReport> {
        let mut report = ExportReport::default();
        let count = pages.page_count();
        log::info!("Rasterizing {} PDF page(s)", count);

        for index in 0..count {
            let page_number = index + 1;
            match self.export_one_page(pages, index, page_number) {
                Ok(saved) => report.saved.push(saved),
                Err(e) => {
                    log::error!("Skipping page {}: {}", page_number, e);
                    report.skipped_pages.push(PageFailure {
                        page_number,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    fn export_one_page(
        &self,
        pages: &dyn PdfPages,
        index: usize,
        page_number: usize,
    ) -> Result<SavedFile> {
        let image = pages.render_page(index)?;
        let bytes = codec::encode_png(&image)?;
        let base = page_base(&self.config.base_name, page_number);
        let target = resolved_path(&self.config.folder, &base);
        let written = writer::write_png(&target, &bytes)?;
        Ok(SavedFile {
            path: target,
            bytes_written: written,
            kind: SavedKind::PdfPage { page_number },
        })
    }

    /// Branch 2: the inline bitmap. An undecodable payload counts as no
    /// image data, matching the file-reference-free clipboard contract.
    fn export_bitmap(&self, bytes: &[u8]) -> Result<ExportReport> {
        let image = codec::decode(bytes).map_err(|e| {
            log::debug!("Inline bitmap failed to decode: {}", e);
            AppError::NoData
        })?;

        let encoded = codec::encode_png(&image)?;
        let target = resolved_path(&self.config.folder, &self.config.base_name);
        let written = writer::write_png(&target, &encoded)?;
        Ok(ExportReport::single(SavedFile {
            path: target,
            bytes_written: written,
            kind: SavedKind::Bitmap,
        }))
    }
}
