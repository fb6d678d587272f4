//! Tests for the metric correlation matrix

use durascope::pipeline::{correlation_matrix, Metric};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_matrix_shape_and_labels() {
    let records = fixture_records();

    let matrix = correlation_matrix(&records, &Metric::ALL);

    assert_eq!(matrix.size(), 4);
    assert_eq!(
        matrix.labels(),
        vec![
            "Matches Before 22",
            "Matches After 22",
            "Injuries After 22",
            "Missed Days After 22",
        ]
    );
}

#[test]
fn test_matrix_symmetric_with_unit_diagonal() {
    let records = fixture_records();

    let matrix = correlation_matrix(&records, &Metric::ALL);

    for i in 0..4 {
        assert_close(matrix.get(i, i), 1.0);
        for j in 0..4 {
            assert!((matrix.get(i, j) - matrix.get(j, i)).abs() < 1e-12);
            assert!(matrix.get(i, j) >= -1.0 && matrix.get(i, j) <= 1.0);
        }
    }
}

#[test]
fn test_injuries_and_missed_days_correlate() {
    let records = fixture_records();

    let matrix = correlation_matrix(&records, &[Metric::InjuriesAfter, Metric::MissedDaysAfter]);

    assert!(matrix.get(0, 1) > 0.8, "got {}", matrix.get(0, 1));
}

#[test]
fn test_perfect_linear_relationships() {
    let records = vec![
        record("A", "RW", [10, 100, 1, 1, 10, 10]),
        record("B", "RW", [20, 80, 1, 2, 10, 20]),
        record("C", "LW", [30, 60, 1, 3, 10, 30]),
        record("D", "LW", [40, 40, 1, 4, 10, 40]),
    ];

    let matrix = correlation_matrix(&records, &Metric::ALL);

    // matches_before rises as matches_after falls
    assert_close(matrix.get(0, 1), -1.0);
    assert_close(matrix.get(0, 2), 1.0);
    assert_close(matrix.get(2, 3), 1.0);
}

#[test]
fn test_constant_metric_is_nan() {
    let records = vec![
        record("A", "RW", [10, 100, 1, 5, 10, 10]),
        record("B", "RW", [20, 80, 1, 5, 10, 20]),
        record("C", "LW", [30, 60, 1, 5, 10, 35]),
    ];

    let matrix = correlation_matrix(&records, &Metric::ALL);

    assert!(matrix.get(2, 2).is_nan());
    assert!(matrix.get(0, 2).is_nan());
    assert!(matrix.get(2, 3).is_nan());
    assert!(!matrix.get(0, 3).is_nan());
}

#[test]
fn test_single_row_is_all_nan() {
    let records = vec![record("A", "RW", [10, 100, 1, 5, 10, 10])];

    let matrix = correlation_matrix(&records, &Metric::ALL);

    assert!(matrix.values.iter().flatten().all(|v| v.is_nan()));
}
