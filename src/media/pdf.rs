// src/media/pdf.rs
//! PDF rasterization capability, bound to pdfium.
//!
//! pdfium is only loaded when a PDF reference is actually on the clipboard;
//! bitmap-only runs never touch the library.

use crate::error::{AppError, Result};
use image::DynamicImage;
use once_cell::sync::OnceCell;
use pdfium_render::prelude::{PdfColor, PdfRenderConfig, Pdfium};
use std::path::Path;

/// Opens PDF documents for page-by-page rasterization.
pub trait PdfRenderer {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfPages + '_>>;
}

/// A loaded document exposing ordered page rasterization.
pub trait PdfPages {
    fn page_count(&self) -> usize;

    /// Renders page `index` (0-based) at its media-box point size onto a
    /// white background.
    fn render_page(&self, index: usize) -> Result<DynamicImage>;
}

/// [`PdfRenderer`] backed by the system pdfium library, bound on first use.
#[derive(Default)]
pub struct PdfiumRenderer {
    pdfium: OnceCell<Pdfium>,
}

impl PdfiumRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn library(&self) -> Result<&Pdfium> {
        self.pdfium.get_or_try_init(|| {
            let bindings = Pdfium::bind_to_system_library()
                .map_err(|e| AppError::Pdf(format!("pdfium library unavailable: {}", e)))?;
            Ok(Pdfium::new(bindings))
        })
    }
}

impl PdfRenderer for PdfiumRenderer {
    fn open(&self, path: &Path) -> Result<Box<dyn PdfPages + '_>> {
        let document = self
            .library()?
            .load_pdf_from_file(path, None)
            .map_err(|e| AppError::Pdf(format!("failed to open {}: {}", path.display(), e)))?;
        Ok(Box::new(PdfiumDocument { document }))
    }
}

struct PdfiumDocument<'a> {
    document: pdfium_render::prelude::PdfDocument<'a>,
}

impl PdfPages for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize) -> Result<DynamicImage> {
        let page = self
            .document
            .pages()
            .get(index as u16)
            .map_err(|e| AppError::Pdf(format!("page {} inaccessible: {}", index + 1, e)))?;

        // One pixel per point of the media box, minimum 1x1.
        let width = page.width().value.round().max(1.0) as i32;
        let height = page.height().value.round().max(1.0) as i32;

        let config = PdfRenderConfig::new()
            .set_target_size(width, height)
            .clear_before_rendering(true)
            .set_clear_color(PdfColor::new(255, 255, 255, 255));

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| AppError::Pdf(format!("page {} failed to render: {}", index + 1, e)))?;

        Ok(bitmap.as_image())
    }
}
