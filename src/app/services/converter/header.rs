//! Field-name derivation from Avida file headers
//!
//! Avida headers describe their columns in one of two ways: a single
//! `#format f1 f2 ... fN` line whose tokens are the field names verbatim, or a
//! run of numbered lines like `# 3: Average Generation` whose descriptions are
//! camel-cased into names. A format line wins outright over numbered lines.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::constants::{FORMAT_LINE_PREFIX, NUMBERED_LINE_PATTERN};

fn numbered_line_regex() -> &'static Regex {
    static NUMBERED_LINE: OnceLock<Regex> = OnceLock::new();
    NUMBERED_LINE.get_or_init(|| {
        Regex::new(NUMBERED_LINE_PATTERN).expect("numbered header pattern is valid")
    })
}

/// Ordered field names derived from one file's header block
///
/// Names are not deduplicated here; a header that repeats a name produces a
/// schema that repeats it, and the duplicate resolves at record-construction
/// time (later value overwrites earlier).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    names: Vec<String>,
}

impl FieldSchema {
    /// Derive field names from the trimmed lines of a header block
    ///
    /// The first `#format` line wins and stops the scan; otherwise every
    /// numbered line contributes one camel-cased name. Lines matching neither
    /// pattern are ignored and contribute nothing, which can leave the schema
    /// shorter than the data rows are wide.
    pub fn derive(header_lines: &[String]) -> Self {
        let mut names = Vec::new();

        for line in header_lines {
            if let Some(format_names) = format_line_names(line) {
                debug!("Using #format line for field names");
                names = format_names;
                break;
            }

            if let Some(name) = numbered_line_name(line) {
                names.push(name);
            }
        }

        debug!("Derived field names: {:?}", names);
        Self { names }
    }

    /// The derived field names in header order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of derived field names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the header yielded no field names at all
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Extract verbatim field names from a `#format` line, if it is one
///
/// The line qualifies when its first whitespace token is exactly `#format`;
/// the remaining tokens are taken as names with no normalization applied.
fn format_line_names(line: &str) -> Option<Vec<String>> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some(FORMAT_LINE_PREFIX) {
        return None;
    }
    Some(tokens.map(str::to_string).collect())
}

/// Extract a camel-cased field name from a `# N: description` line, if it is one
///
/// A line with a matching prefix but an empty description contributes nothing.
fn numbered_line_name(line: &str) -> Option<String> {
    let matched = numbered_line_regex().find(line)?;
    let description = line[matched.end()..].trim();

    let name = camel_case(description);
    if name.is_empty() { None } else { Some(name) }
}

/// Collapse a header description into a single camel-case token
///
/// Title-cases each whitespace-separated word, lowercases only the very first
/// character of the result, then keeps alphabetic characters only. So
/// "Average Generation (2-byte)" becomes "averageGenerationbyte".
fn camel_case(description: &str) -> String {
    let title_cased = description
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = title_cased.chars();
    let lowered_first = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };

    lowered_first.chars().filter(|c| c.is_alphabetic()).collect()
}

/// Uppercase the first character of a word and lowercase the rest
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
