//! Test utilities for the Avida converter
//!
//! This module provides fixture builders and helpers shared across the
//! converter test modules. Fixture contents mirror the shape of real Avida
//! `.spop` / `.dat` outputs.

use std::io::Write;

use tempfile::NamedTempFile;

mod stats_tests;

/// An Avida-style file with a numbered-line header block
pub fn create_numbered_header_content() -> String {
    "\
#filetype genotype_data
# 1: ID
# 2: Parent ID
# 3: Average Fitness
# 4: Genome Sequence

1 (none) 0.25 wzcagcucca
2 1 0.5 wzcagcuccb
3 1 0.5 wzcagcuccc
"
    .to_string()
}

/// An Avida-style file whose `#format` line supersedes later numbered lines
pub fn create_format_header_content() -> String {
    "\
#filetype offspring_data
#format id parent_dist length sequence
# Legacy column descriptions
# 1: ID
# 2: Parent Distance

1 0 4 wxyz
2 (none) 4 wxzy
"
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Helper to create a temporary file carrying the `.json` output extension
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
