// src/output/writer.rs
//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file writes occur, keeping the
//! rest of the codebase pure and testable.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Writes encoded PNG bytes to `path`, returning the byte count.
pub fn write_png(path: &Path, bytes: &[u8]) -> Result<usize> {
    log::debug!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, bytes)?;
    log::info!("Wrote file: {}", path.display());
    Ok(bytes.len())
}

/// Copies a source file's bytes verbatim to `target`.
///
/// Used by the raw-copy fallback; the target keeps the shared `.png`
/// naming even when the payload is not PNG-encoded.
pub fn copy_raw(source: &Path, target: &Path) -> Result<usize> {
    let bytes = fs::read(source)?;
    fs::write(target, &bytes)?;
    log::info!(
        "Copied {} bytes from {} to {}",
        bytes.len(),
        source.display(),
        target.display()
    );
    Ok(bytes.len())
}
