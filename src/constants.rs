// src/constants.rs
//! Domain constants that define the operational boundaries of the system.

// ---------------------------------------------------------------------------
// Clipboard format identifiers
// ---------------------------------------------------------------------------

/// Format identifiers under which platform clipboards advertise PNG data.
///
/// Each platform names the same representation differently (`image/png` on
/// Linux, `public.png` on macOS, `PNG` on Windows). All are consulted.
pub const PNG_FORMAT_IDS: &[&str] = &["image/png", "public.png", "PNG"];

/// TIFF equivalents, consulted only when no PNG representation exists.
pub const TIFF_FORMAT_IDS: &[&str] = &["image/tiff", "public.tiff", "CF_TIFF"];

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Prefix for base names generated when the user supplies no filename.
pub const DEFAULT_BASE_PREFIX: &str = "clipboard";

/// Local-time pattern appended to [`DEFAULT_BASE_PREFIX`]: `YYYYMMDD_HHmmss`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Extension every structured output file is written under. The raw-copy
/// fallback shares this naming even when the payload is not PNG-encoded.
pub const OUTPUT_EXTENSION: &str = "png";
