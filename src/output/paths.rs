// src/output/paths.rs
//! Pure functions for collision-safe path resolution and page naming.
//!
//! Existence checks are the only filesystem contact here; nothing is
//! written from this module.

use crate::constants::OUTPUT_EXTENSION;
use std::path::{Path, PathBuf};

/// Returns the first candidate in `{base}.png`, `{base}_1.png`,
/// `{base}_2.png`, … that does not currently exist in `folder`.
///
/// The suffix index starts at 1 and is unbounded. The check-then-write race
/// against another process is accepted: a single-shot run assumes the
/// folder is uncontended.
pub fn resolved_path(folder: &Path, base: &str) -> PathBuf {
    let mut candidate = folder.join(format!("{}.{}", base, OUTPUT_EXTENSION));
    let mut index: u64 = 1;
    while candidate.exists() {
        candidate = folder.join(format!("{}_{}.{}", base, index, OUTPUT_EXTENSION));
        index += 1;
    }
    candidate
}

/// Base name for one rasterized PDF page, 1-based: `{base}_page{N}`.
///
/// Collision suffixes are appended after this infix, so a second run over
/// the same document yields `{base}_page1_1.png`.
pub fn page_base(base: &str, page_number: usize) -> String {
    format!("{}_page{}", base, page_number)
}
