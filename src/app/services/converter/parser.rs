//! Core Avida file parser implementation
//!
//! This module provides the main parser orchestration: input validation,
//! header/data boundary detection, and coordination between header derivation
//! and row parsing.

use std::path::Path;

use tracing::{debug, info, warn};

use super::header::FieldSchema;
use super::record_parser::parse_row;
use super::stats::{ParseResult, ParseStats};
use crate::constants::OUTPUT_EXTENSION;
use crate::{Error, Result};

/// Parser for Avida-style data files
///
/// The parser focuses on essential functionality:
/// - Header-driven field-name derivation
/// - Partial-row tolerance (missing fields are assumed to be trailing)
/// - Per-token type coercion with graceful degradation
/// - Skip-friendly validation errors for batch processing
#[derive(Debug, Default)]
pub struct AvidaParser;

impl AvidaParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Check that a path references a convertible input file
    ///
    /// Fails with a skippable error when the file does not exist or already
    /// carries the conversion-output extension. A race between this check and
    /// the subsequent read is possible but, hopefully, rare.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        if path.extension().and_then(|ext| ext.to_str()) == Some(OUTPUT_EXTENSION) {
            return Err(Error::already_converted(path.display().to_string()));
        }

        debug!("File {} is found and valid", path.display());
        Ok(())
    }

    /// Parse an Avida file and return records with statistics
    ///
    /// Reads the whole file into memory and walks it in a single forward pass:
    /// leading lines that are non-empty and contain `#` form the header block;
    /// the first line failing that test terminates the block and is itself
    /// evaluated as a data-row candidate, as are all lines after it.
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        self.validate(path)?;

        info!("Parsing Avida file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let mut lines = content.lines();
        let mut header_lines = Vec::new();
        let mut boundary_line = None;

        for line in &mut lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || !trimmed.contains('#') {
                boundary_line = Some(line);
                break;
            }
            header_lines.push(trimmed.to_string());
        }

        stats.header_lines = header_lines.len();
        let schema = FieldSchema::derive(&header_lines);
        stats.field_count = schema.len();

        if schema.is_empty() {
            warn!(
                "No field names derived from header of {}; rows will produce empty records",
                path.display()
            );
        }

        // The boundary line is not part of the header, so it goes through the
        // same row handling as everything after it.
        for line in boundary_line.into_iter().chain(lines) {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.contains('#') {
                stats.lines_skipped += 1;
                continue;
            }

            let token_count = trimmed.split(' ').count();
            if token_count < schema.len() {
                stats.short_rows += 1;
            } else if token_count > schema.len() {
                stats.long_rows += 1;
            }

            records.push(parse_row(trimmed, &schema));
            stats.data_rows += 1;
        }

        info!(
            "Parsed {} records across {} fields from {}",
            stats.data_rows,
            stats.field_count,
            path.display()
        );

        if stats.short_rows > 0 || stats.long_rows > 0 {
            debug!(
                "Row/field count mismatches in {}: {} short, {} long",
                path.display(),
                stats.short_rows,
                stats.long_rows
            );
        }

        Ok(ParseResult { records, stats })
    }
}
