// src/media/mod.rs
//! Media codec capabilities: image decode/encode and PDF rasterization.
//!
//! Both capabilities wrap mature libraries (`image`, `pdfium-render`)
//! behind small seams so the pipeline can be exercised without them.

pub mod codec;
pub mod pdf;

pub use pdf::{PdfPages, PdfRenderer, PdfiumRenderer};
