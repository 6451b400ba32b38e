// src/config.rs
use crate::constants::{DEFAULT_BASE_PREFIX, TIMESTAMP_FORMAT};
use crate::error::{AppError, Result};
use chrono::Local;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Output base name; a trailing .png is stripped so the extension is not doubled
    pub filename: Option<String>,

    /// Directory to save into (tilde-expanded, created if missing; defaults to the working directory)
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved export configuration — folder exists, base name is final.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub folder: PathBuf,
    pub base_name: String,
}

impl ExportConfig {
    /// Resolves a complete export configuration from CLI input.
    ///
    /// The target folder is created here, before the clipboard is touched;
    /// a creation failure aborts the run with no image data read.
    pub fn resolve(cli: CommandLineInput) -> Result<Self> {
        let folder = match &cli.folder {
            Some(raw) => {
                let expanded = expand_tilde(raw);
                if !expanded.exists() {
                    fs::create_dir_all(&expanded).map_err(|e| {
                        AppError::Config(format!(
                            "could not create {}: {}",
                            expanded.display(),
                            e
                        ))
                    })?;
                    log::info!("Created folder: {}", expanded.display());
                }
                expanded
            }
            None => std::env::current_dir().map_err(|e| {
                AppError::Config(format!("cannot determine working directory: {}", e))
            })?,
        };

        let base_name = match cli.filename.as_deref() {
            Some(name) if !name.is_empty() => strip_png_suffix(name).to_string(),
            _ => default_base_name(),
        };

        Ok(Self { folder, base_name })
    }
}

/// Removes one trailing `.png` from a user-supplied name.
///
/// Stripping is idempotent: `shot.png` and `shot` resolve to the same base.
pub fn strip_png_suffix(name: &str) -> &str {
    name.strip_suffix(".png").unwrap_or(name)
}

/// Default base name from local time: `clipboard_<YYYYMMDD_HHmmss>`.
pub fn default_base_name() -> String {
    format!(
        "{}_{}",
        DEFAULT_BASE_PREFIX,
        Local::now().format(TIMESTAMP_FORMAT)
    )
}

/// Expands a leading `~` to the user's home directory.
///
/// Only the `~` and `~/...` forms are expanded; `~user` is passed through
/// untouched.
pub fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn png_suffix_is_stripped() {
        assert_eq!(strip_png_suffix("screenshot.png"), "screenshot");
        assert_eq!(strip_png_suffix("screenshot"), "screenshot");
    }

    #[test]
    fn png_suffix_stripping_is_idempotent() {
        let once = strip_png_suffix("grab.png");
        let twice = strip_png_suffix(once);
        assert_eq!(once, twice);
    }

    #[test]
    fn only_the_final_png_suffix_is_removed() {
        assert_eq!(strip_png_suffix("photo.png.png"), "photo.png");
    }

    #[test]
    fn default_base_name_uses_timestamp_pattern() {
        let re = regex::Regex::new(r"^clipboard_\d{8}_\d{6}$").unwrap();
        assert!(re.is_match(&default_base_name()));
    }

    #[test]
    fn tilde_paths_expand_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/captures"), home.join("captures"));
        }
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_tilde("/tmp/out"), PathBuf::from("/tmp/out"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn missing_folder_is_created_on_resolve() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("nested").join("captures");
        let cli = CommandLineInput {
            filename: Some("shot.png".to_string()),
            folder: Some(target.to_string_lossy().into_owned()),
            verbose: false,
        };

        let config = ExportConfig::resolve(cli).unwrap();

        assert!(target.is_dir());
        assert_eq!(config.folder, target);
        assert_eq!(config.base_name, "shot");
    }

    #[test]
    fn unwritable_folder_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        std::fs::write(&blocker, b"plain file").unwrap();

        let cli = CommandLineInput {
            filename: None,
            folder: Some(blocker.join("sub").to_string_lossy().into_owned()),
            verbose: false,
        };

        let err = ExportConfig::resolve(cli).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
