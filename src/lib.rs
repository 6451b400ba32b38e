// src/lib.rs
//! pasteimage library — saves clipboard images, files, and PDF pages to disk as PNG.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`
//! - **Configuration** — `CommandLineInput`, `ExportConfig`
//! - **Clipboard capability** — `ClipboardSource`, `SystemClipboard`
//! - **Media** — `codec`, `PdfRenderer`, `PdfPages`, `PdfiumRenderer`
//! - **Output** — `resolved_path`, `page_base`
//! - **Pipeline** — `ClipboardExporter`, `ExportReport`

// Internal modules — must match what's in main.rs
mod clipboard;
mod config;
mod constants;
mod error;
mod media;
mod output;
mod pipeline;

// --- Error Handling ---
pub use crate::error::AppError;

// --- Configuration ---
pub use crate::config::{
    default_base_name, expand_tilde, strip_png_suffix, CommandLineInput, ExportConfig,
};

// --- Clipboard Capability ---
pub use crate::clipboard::{ClipboardSource, SystemClipboard};

// --- Media ---
pub use crate::media::codec;
pub use crate::media::{PdfPages, PdfRenderer, PdfiumRenderer};

// --- Output ---
pub use crate::output::{page_base, resolved_path};

// --- Pipeline ---
pub use crate::pipeline::{
    ClipboardExporter, ExportReport, PageFailure, SavedFile, SavedKind,
};
