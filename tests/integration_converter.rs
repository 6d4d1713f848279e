//! Integration tests for the full convert pipeline
//!
//! These tests exercise parse-then-write end to end on realistic Avida-shaped
//! files in a temporary directory, checking the JSON actually written to disk.

use std::fs;

use tempfile::TempDir;

use avida_converter::Error;
use avida_converter::app::services::converter::{AvidaParser, writer};
use avida_converter::cli::commands::convert_file;

/// Content shaped like a real Avida .spop file, including a short "dead" row
const SPOP_CONTENT: &str = "\
#filetype genotype_data
#format id parent_id num_cpus total_cpus fitness sequence
# Legacy descriptions:
# 1: ID
# 2: Parent ID

1 (none) 5 10 0.2577 wzcagcucca
2 1 3 6 0.5 wzcagcuccb
3 1 0
";

#[test]
fn test_worked_example_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("example.dat");
    fs::write(&input, "#format id name\n1 Alice\n2 Bob\n").unwrap();

    let parser = AvidaParser::new();
    let report = convert_file(&parser, &input).unwrap();

    assert_eq!(report.output, dir.path().join("example.dat.json"));
    assert_eq!(report.records, 2);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report.output).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ])
    );
}

#[test]
fn test_spop_file_with_dead_row() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("detail-1000.spop");
    fs::write(&input, SPOP_CONTENT).unwrap();

    let parser = AvidaParser::new();
    let result = parser.parse_file(&input).unwrap();

    // The #format line wins over the trailing numbered descriptions
    assert_eq!(result.stats.field_count, 6);
    assert_eq!(result.records.len(), 3);
    assert_eq!(result.stats.short_rows, 1);

    let output = writer::write_records(&input, &result.records).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(
        written,
        serde_json::json!([
            {
                "id": 1,
                "parent_id": null,
                "num_cpus": 5,
                "total_cpus": 10,
                "fitness": 0.2577,
                "sequence": "wzcagcucca"
            },
            {
                "id": 2,
                "parent_id": 1,
                "num_cpus": 3,
                "total_cpus": 6,
                "fitness": 0.5,
                "sequence": "wzcagcuccb"
            },
            {
                "id": 3,
                "parent_id": 1,
                "num_cpus": 0
            }
        ])
    );
}

#[test]
fn test_conversion_output_is_never_reconverted() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("example.dat");
    fs::write(&input, "#format id name\n1 Alice\n").unwrap();

    let parser = AvidaParser::new();
    let report = convert_file(&parser, &input).unwrap();

    // Converting the output of a conversion is a skip, not a second pipeline
    let error = convert_file(&parser, &report.output).unwrap_err();
    assert!(matches!(error, Error::AlreadyConverted { .. }));
    assert!(error.is_skippable());

    // No .json.json appeared
    assert!(!dir.path().join("example.dat.json.json").exists());
}

#[test]
fn test_reconversion_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("detail-1000.spop");
    fs::write(&input, SPOP_CONTENT).unwrap();

    let parser = AvidaParser::new();

    let first_report = convert_file(&parser, &input).unwrap();
    let first = fs::read(&first_report.output).unwrap();

    let second_report = convert_file(&parser, &input).unwrap();
    let second = fs::read(&second_report.output).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report.bytes, second_report.bytes);
}

#[test]
fn test_missing_file_reports_skippable_error() {
    let dir = TempDir::new().unwrap();
    let parser = AvidaParser::new();

    let error = convert_file(&parser, &dir.path().join("missing.spop")).unwrap_err();
    assert!(matches!(error, Error::FileNotFound { .. }));
    assert!(error.is_skippable());
}

#[test]
fn test_batch_continues_past_skippable_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.dat");
    let missing = dir.path().join("missing.dat");
    let already = dir.path().join("done.json");
    fs::write(&good, "#format a b\n\n1 2\n").unwrap();
    fs::write(&already, "[]").unwrap();

    let parser = AvidaParser::new();
    let mut converted = 0;
    let mut skipped = 0;

    for path in [&missing, &already, &good] {
        match convert_file(&parser, path) {
            Ok(_) => converted += 1,
            Err(e) if e.is_skippable() => skipped += 1,
            Err(e) => panic!("unexpected hard error: {e}"),
        }
    }

    assert_eq!(converted, 1);
    assert_eq!(skipped, 2);
    assert!(good.with_extension("dat.json").exists());
}
