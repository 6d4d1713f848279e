//! Avida Converter Library
//!
//! A Rust library for converting Avida artificial-life output files from their
//! whitespace-delimited text format into JSON arrays of records.
//!
//! Avida files are odd in that they carry a multi-line comment header describing
//! the columns, followed by space-delimited data rows. This library provides
//! tools for:
//! - Deriving field names from `#format` and numbered `# N:` header lines
//! - Parsing data rows into records with partial-row tolerance
//! - Per-token type coercion (null sentinel, integer, float, text fallback)
//! - Writing one compact JSON array per input file
//! - Skip-and-continue error handling across a batch of files

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod converter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CellValue, Record};
pub use app::services::converter::{AvidaParser, FieldSchema, ParseResult, ParseStats};

/// Result type alias for the Avida converter
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Avida conversion operations
///
/// The taxonomy splits two ways: [`Error::is_skippable`] conditions are reported
/// with a warning and the batch moves on to the next file; everything else is a
/// hard failure that aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input file already carries the conversion-output extension
    #[error("File is already a JSON file, not converting: {path}")]
    AlreadyConverted { path: String },

    /// JSON serialization failed
    #[error("JSON serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an already-converted error
    pub fn already_converted(path: impl Into<String>) -> Self {
        Self::AlreadyConverted { path: path.into() }
    }

    /// Create a JSON serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Whether this error skips a single file rather than aborting the batch
    ///
    /// Missing inputs and prior conversion outputs are warned about and
    /// skipped; read and write failures propagate to the caller.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::AlreadyConverted { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
