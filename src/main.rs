// src/main.rs

// Modules defined in the crate
mod clipboard;
mod config;
mod constants;
mod error;
mod media;
mod output;
mod pipeline;

// Specific imports
use crate::clipboard::SystemClipboard;
use crate::config::{CommandLineInput, ExportConfig};
use crate::error::Result;
use crate::media::PdfiumRenderer;
use crate::pipeline::{ClipboardExporter, ExportReport, SavedKind};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::process::ExitCode;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("pasteimage.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Performs the single clipboard read and export run.
fn run(config: &ExportConfig) -> Result<ExportReport> {
    let mut clipboard = SystemClipboard::new()?;
    let pdf = PdfiumRenderer::new();
    let exporter = ClipboardExporter::new(config);
    exporter.run(&mut clipboard, &pdf)
}

/// Prints one line per file operation, success and failure alike.
fn report_completion(report: &ExportReport) {
    for failure in &report.skipped_pages {
        eprintln!(
            "❌ Failed to save page {}: {}",
            failure.page_number, failure.error
        );
    }

    for saved in &report.saved {
        match &saved.kind {
            SavedKind::PdfPage { page_number } => println!(
                "📄 Saved PDF page {} as PNG: {}",
                page_number,
                saved.path.display()
            ),
            SavedKind::ImageFile => println!(
                "📸 Saved clipboard image file as PNG: {}",
                saved.path.display()
            ),
            SavedKind::RawCopy => {
                println!("📸 Saved raw clipboard file as: {}", saved.path.display())
            }
            SavedKind::Bitmap => println!(
                "📸 Saved bitmap clipboard image as: {}",
                saved.path.display()
            ),
        }
    }
}

fn main() -> ExitCode {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("❌ Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    // Folder creation happens here, before the clipboard is read.
    let config = match ExportConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(report) => {
            // The PDF loop completing counts as success even when
            // individual pages were skipped.
            report_completion(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
