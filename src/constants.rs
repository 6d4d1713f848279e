//! Application constants for the Avida converter
//!
//! This module contains the file-format sentinels, header patterns, and
//! defaults used throughout the converter.

// =============================================================================
// Output Naming
// =============================================================================

/// Extension carried by conversion outputs (`<input>.json`)
///
/// Files whose path already ends in this extension are never reconverted.
pub const OUTPUT_EXTENSION: &str = "json";

// =============================================================================
// Header Format
// =============================================================================

/// Leading token of a format header line (`#format f1 f2 ... fN`)
///
/// A format line wins outright over numbered header lines: its trailing tokens
/// become the field names verbatim.
pub const FORMAT_LINE_PREFIX: &str = "#format";

/// Pattern matched by numbered header lines (`# <N>: <description>`)
///
/// The description after the matched prefix is camel-cased into a field name.
pub const NUMBERED_LINE_PATTERN: &str = r"^# +[0-9]+:";

// =============================================================================
// Data Rows
// =============================================================================

/// Token rendered as JSON null
///
/// Avida writes `(none)` for absent values, e.g. the parent of a seed genotype.
pub const NONE_SENTINEL: &str = "(none)";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
