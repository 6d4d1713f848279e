//! Command implementation for the Avida converter CLI
//!
//! This module contains the batch conversion workflow: logging setup, the
//! sequential per-file loop with skip-and-continue error handling, progress
//! reporting, and the end-of-run summary.

use std::path::{Path, PathBuf};
use std::time::Instant;

use colored::Colorize;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::app::services::converter::{AvidaParser, writer};
use crate::cli::args::Args;
use crate::{Error, Result};

/// Conversion statistics for reporting across a batch of files
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Number of files successfully converted
    pub files_converted: usize,
    /// Number of files skipped (missing or already converted)
    pub files_skipped: usize,
    /// Number of records written across all outputs
    pub records_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ConversionStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}

/// Outcome of converting a single input file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Input path as supplied on the command line
    pub input: PathBuf,
    /// Path the JSON array was written to
    pub output: PathBuf,
    /// Number of records in the output array
    pub records: usize,
    /// Size of the output file in bytes
    pub bytes: u64,
}

/// Main command runner for the Avida converter
///
/// Processes the supplied files one at a time in order. Skippable conditions
/// (missing file, already-converted file) are warned about and the batch
/// continues; read or write failures abort the run.
pub fn run(args: Args) -> Result<ConversionStats> {
    setup_logging(&args)?;

    info!("Starting Avida converter");
    debug!("Command line arguments: {:?}", args);

    let start_time = Instant::now();
    let parser = AvidaParser::new();
    let mut stats = ConversionStats::default();

    let progress = if args.show_progress() && args.files.len() > 1 {
        Some(create_progress_bar(args.files.len()))
    } else {
        None
    };

    for path in &args.files {
        match convert_file(&parser, path) {
            Ok(report) => {
                info!(
                    "Converted {} -> {} ({} records)",
                    report.input.display(),
                    report.output.display(),
                    report.records
                );
                stats.files_converted += 1;
                stats.records_written += report.records;
                stats
                    .output_sizes
                    .push((report.output.display().to_string(), report.bytes));
            }
            Err(error) if error.is_skippable() => {
                warn!("{}", error);
                stats.files_skipped += 1;
            }
            Err(error) => {
                if let Some(pb) = &progress {
                    pb.abandon();
                }
                return Err(error);
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    if args.show_progress() {
        print_summary(&stats);
    }

    Ok(stats)
}

/// Convert one file: parse it and write the JSON output next to it
pub fn convert_file(parser: &AvidaParser, path: &Path) -> Result<FileReport> {
    let result = parser.parse_file(path)?;
    let output = writer::write_records(path, &result.records)?;

    let bytes = std::fs::metadata(&output)
        .map_err(|e| Error::io(format!("Failed to stat output file {}", output.display()), e))?
        .len();

    Ok(FileReport {
        input: path.to_path_buf(),
        output,
        records: result.records.len(),
        bytes,
    })
}

/// Set up structured logging for the converter
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("avida_converter={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create a progress bar for batch conversion
fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Print the end-of-run summary
fn print_summary(stats: &ConversionStats) {
    println!(
        "\n{} Converted {} file(s), {} record(s), {} written in {}",
        "✓".green().bold(),
        stats.files_converted.to_string().bright_green(),
        stats.records_written,
        ConversionStats::format_size(stats.total_output_size()),
        HumanDuration(stats.processing_time)
    );

    if stats.files_skipped > 0 {
        println!(
            "{} Skipped {} file(s) (missing or already converted)",
            "!".yellow().bold(),
            stats.files_skipped.to_string().yellow()
        );
    }
}
