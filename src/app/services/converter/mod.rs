//! Converter for Avida-style data files
//!
//! This module turns one whitespace-delimited Avida file into an ordered
//! sequence of JSON-ready records. Avida files carry a multi-line comment
//! header describing the columns, then space-delimited data rows; field names
//! come from the header, and each row is zipped against them positionally.
//!
//! ## Architecture
//!
//! The converter is organized into logical components:
//! - [`parser`] - File validation, header/data section handling, orchestration
//! - [`header`] - Field-name derivation from `#format` and numbered lines
//! - [`record_parser`] - Individual data-row processing
//! - [`field_parsers`] - Per-token type coercion utilities
//! - [`writer`] - JSON array output and conversion-output naming
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Known limitations
//!
//! Carried over from the file format itself rather than fixed here:
//! - Header lines matching neither recognized pattern contribute no field
//!   name, which can desynchronize field count versus data column count.
//! - Any data line containing `#` anywhere is treated as a comment and
//!   skipped, even when the `#` sits inside a legitimate value.
//!
//! ## Usage
//!
//! ```no_run
//! use avida_converter::app::services::converter::{AvidaParser, writer};
//!
//! # fn example() -> avida_converter::Result<()> {
//! let parser = AvidaParser::new();
//! let result = parser.parse_file(std::path::Path::new("detail-1000.spop"))?;
//!
//! println!(
//!     "Parsed {} records across {} fields",
//!     result.records.len(),
//!     result.stats.field_count
//! );
//!
//! let output = writer::write_records(
//!     std::path::Path::new("detail-1000.spop"),
//!     &result.records,
//! )?;
//! println!("Wrote {}", output.display());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::FieldSchema;
pub use parser::AvidaParser;
pub use stats::{ParseResult, ParseStats};
