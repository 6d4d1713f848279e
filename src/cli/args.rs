//! Command-line argument definitions for the Avida converter
//!
//! This module defines the CLI interface using the clap derive API.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_LOG_LEVEL;

/// CLI arguments for the Avida file converter
///
/// Converts Avida artificial-life output files (whitespace-delimited text with
/// a descriptive comment header) into JSON arrays of records, one output file
/// per input.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "avida-converter",
    version,
    about = "Convert Avida data files to JSON",
    long_about = "Converts Avida artificial-life output files (.spop, .dat and friends) into \
                  JSON. Field names are derived from the file's comment header, either from a \
                  '#format' line or by camel-casing numbered '# N: description' lines; each data \
                  row becomes one JSON object. Output is written next to each input as \
                  '<input>.json'. Missing files and prior conversion outputs are skipped with a \
                  warning rather than aborting the batch."
)]
pub struct Args {
    /// Files to convert, processed sequentially in the order supplied
    ///
    /// Each produces a sibling `<file>.json` output. Paths that do not exist
    /// or already end in .json are skipped with a warning.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and disables the progress
    /// bar and summary.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars and the summary (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}
