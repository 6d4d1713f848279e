//! Parsing statistics and result structures for Avida file conversion
//!
//! This module provides types for tracking how a file parsed: how many rows
//! became records, how many lines were skipped, and how often rows disagreed
//! with the header's field count.

use crate::app::models::Record;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Records in input line order, one per accepted data row
    pub records: Vec<Record>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of field names derived from the header
    pub field_count: usize,

    /// Number of lines consumed as the header block
    pub header_lines: usize,

    /// Number of data rows converted into records
    pub data_rows: usize,

    /// Blank or comment lines skipped after the header block
    pub lines_skipped: usize,

    /// Rows with fewer tokens than fields (trailing fields omitted)
    pub short_rows: usize,

    /// Rows with more tokens than fields (extra tokens dropped)
    pub long_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            field_count: 0,
            header_lines: 0,
            data_rows: 0,
            lines_skipped: 0,
            short_rows: 0,
            long_rows: 0,
        }
    }

    /// Fraction of data rows whose token count matched the field count
    pub fn aligned_rate(&self) -> f64 {
        if self.data_rows == 0 {
            return 1.0;
        }
        let aligned = self.data_rows - self.short_rows - self.long_rows;
        aligned as f64 / self.data_rows as f64
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
