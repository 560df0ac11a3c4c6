//! Tests for the frame-level hypothesis-test bridging

mod common;

use approx::assert_abs_diff_eq;
use common::housing_df;
use eda_frame::HypothesisExt;
use eda_stats::welch_t_test;
use polars::prelude::*;

#[test]
fn test_welch_by_group_matches_direct_computation() {
    let df = housing_df();
    let comparison = df
        .welch_by_group("Neighborhood", "SalePrice")
        .unwrap()
        .expect("two groups exist");

    assert_eq!(comparison.group_a, "NAmes");
    assert_eq!(comparison.group_b, "OldTown");

    let names = [200_000.0, 215_000.0, 210_000.0];
    let old_town = [140_000.0, 150_000.0, 145_000.0];
    let direct = welch_t_test(&names, &old_town).unwrap();
    assert_abs_diff_eq!(comparison.result.statistic, direct.statistic, epsilon = 1e-12);
    assert_abs_diff_eq!(comparison.result.p_value, direct.p_value, epsilon = 1e-12);
    assert_eq!(comparison.result.sample_sizes, (3, 3));
}

#[test]
fn test_welch_by_group_skips_single_group() {
    let df = df![
        "Neighborhood" => ["NAmes", "NAmes", "NAmes"],
        "SalePrice" => [1.0, 2.0, 3.0],
    ]
    .unwrap();
    assert!(df
        .welch_by_group("Neighborhood", "SalePrice")
        .unwrap()
        .is_none());
}

#[test]
fn test_welch_by_group_takes_first_two_groups() {
    // Three groups; only the first two encountered take part
    let df = df![
        "g" => ["c", "a", "c", "b", "a", "c", "a"],
        "v" => [1.0, 10.0, 2.0, 100.0, 11.0, 3.0, 12.0],
    ]
    .unwrap();
    let comparison = df.welch_by_group("g", "v").unwrap().unwrap();
    assert_eq!(comparison.group_a, "c");
    assert_eq!(comparison.group_b, "a");

    let direct = welch_t_test(&[1.0, 2.0, 3.0], &[10.0, 11.0, 12.0]).unwrap();
    assert_abs_diff_eq!(comparison.result.statistic, direct.statistic, epsilon = 1e-12);
}

#[test]
fn test_welch_by_group_ignores_null_rows() {
    let df = df![
        "g" => [Some("a"), Some("a"), Some("a"), None, Some("b"), Some("b"), Some("b")],
        "v" => [Some(1.0), Some(2.0), Some(3.0), Some(99.0), Some(4.0), None, Some(6.0)],
    ]
    .unwrap();
    let comparison = df.welch_by_group("g", "v").unwrap().unwrap();
    assert_eq!(comparison.result.sample_sizes, (3, 2));
}

#[test]
fn test_welch_by_group_type_errors() {
    let df = housing_df();
    assert!(df.welch_by_group("SalePrice", "GrLivArea").is_err());
    assert!(df.welch_by_group("Neighborhood", "HouseStyle").is_err());
}

#[test]
fn test_crosstab_counts_and_order() {
    let df = housing_df();
    let table = df.crosstab("Neighborhood", "HouseStyle").unwrap();

    assert_eq!(table.row_labels(), &["NAmes".to_string(), "OldTown".to_string()]);
    assert_eq!(table.col_labels(), &["1Story".to_string(), "2Story".to_string()]);
    // NAmes: one 1Story, two 2Story; OldTown: two 1Story, one 2Story
    assert_eq!(table.counts(), &[vec![1, 2], vec![2, 1]]);
    assert_eq!(table.total(), 6);
}

#[test]
fn test_crosstab_skips_null_pairs() {
    let df = df![
        "a" => [Some("x"), Some("x"), None, Some("y")],
        "b" => [Some("p"), None, Some("q"), Some("q")],
    ]
    .unwrap();
    let table = df.crosstab("a", "b").unwrap();
    assert_eq!(table.total(), 2);
}

#[test]
fn test_chi_square_independence_known_table() {
    // Rebuild the classic [[10, 20], [30, 5]] table from raw rows
    let cells = [
        (10, ("r1", "c1")),
        (20, ("r1", "c2")),
        (30, ("r2", "c1")),
        (5, ("r2", "c2")),
    ];
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    for (count, (row, col)) in cells {
        for _ in 0..count {
            rows.push(row);
            cols.push(col);
        }
    }
    let df = df![
        "Neighborhood" => rows,
        "HouseStyle" => cols,
    ]
    .unwrap();

    let result = df
        .chi_square_independence("Neighborhood", "HouseStyle")
        .unwrap();
    assert_eq!(result.df, 1);
    assert_abs_diff_eq!(result.statistic, 18.726190, epsilon = 1e-5);
    assert!(result.p_value < 1e-4);
}
