//! Tests for parsing statistics

use super::super::stats::ParseStats;

#[test]
fn test_new_stats_are_zeroed() {
    let stats = ParseStats::new();

    assert_eq!(stats.field_count, 0);
    assert_eq!(stats.header_lines, 0);
    assert_eq!(stats.data_rows, 0);
    assert_eq!(stats.lines_skipped, 0);
    assert_eq!(stats.short_rows, 0);
    assert_eq!(stats.long_rows, 0);
}

#[test]
fn test_aligned_rate_with_no_rows() {
    let stats = ParseStats::new();
    assert_eq!(stats.aligned_rate(), 1.0);
}

#[test]
fn test_aligned_rate() {
    let stats = ParseStats {
        field_count: 4,
        header_lines: 5,
        data_rows: 10,
        lines_skipped: 2,
        short_rows: 1,
        long_rows: 1,
    };

    assert!((stats.aligned_rate() - 0.8).abs() < f64::EPSILON);
}

#[test]
fn test_stats_serialize_round_trip() {
    let stats = ParseStats {
        field_count: 3,
        header_lines: 4,
        data_rows: 7,
        lines_skipped: 1,
        short_rows: 2,
        long_rows: 0,
    };

    let json = serde_json::to_string(&stats).unwrap();
    let back: ParseStats = serde_json::from_str(&json).unwrap();

    assert_eq!(back.data_rows, 7);
    assert_eq!(back.short_rows, 2);
}
