//! Tests for the describe tables and value counts

mod common;

use approx::assert_abs_diff_eq;
use common::{f64_values, housing_df, str_values};
use eda_frame::SummaryExt;
use polars::prelude::*;

#[test]
fn test_describe_numeric_shape() {
    let df = housing_df();
    let described = df.describe_numeric().unwrap();
    // 8 statistics, one label column plus the two numeric columns
    assert_eq!(described.shape(), (8, 3));
    assert_eq!(
        str_values(&described, "statistic"),
        vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
    );
}

#[test]
fn test_describe_numeric_values() {
    let df = df![
        "x" => [1.0, 2.0, 3.0, 4.0, 5.0],
    ]
    .unwrap();
    let described = df.describe_numeric().unwrap();
    let stats = f64_values(&described, "x");

    assert_abs_diff_eq!(stats[0], 5.0, epsilon = 1e-12); // count
    assert_abs_diff_eq!(stats[1], 3.0, epsilon = 1e-12); // mean
    assert_abs_diff_eq!(stats[2], 2.5f64.sqrt(), epsilon = 1e-12); // std
    assert_abs_diff_eq!(stats[3], 1.0, epsilon = 1e-12); // min
    assert_abs_diff_eq!(stats[4], 2.0, epsilon = 1e-12); // 25%
    assert_abs_diff_eq!(stats[5], 3.0, epsilon = 1e-12); // 50%
    assert_abs_diff_eq!(stats[6], 4.0, epsilon = 1e-12); // 75%
    assert_abs_diff_eq!(stats[7], 5.0, epsilon = 1e-12); // max
}

#[test]
fn test_describe_numeric_ignores_nulls() {
    let df = df![
        "x" => [Some(1.0), None, Some(3.0)],
    ]
    .unwrap();
    let described = df.describe_numeric().unwrap();
    let stats = f64_values(&described, "x");
    assert_abs_diff_eq!(stats[0], 2.0, epsilon = 1e-12); // count
    assert_abs_diff_eq!(stats[1], 2.0, epsilon = 1e-12); // mean
}

#[test]
fn test_describe_numeric_requires_numeric_columns() {
    let df = df![
        "style" => ["a", "b"],
    ]
    .unwrap();
    assert!(df.describe_numeric().is_err());
}

#[test]
fn test_describe_categorical() {
    let df = housing_df();
    let described = df.describe_categorical().unwrap();
    assert_eq!(described.shape(), (4, 3));
    assert_eq!(
        str_values(&described, "statistic"),
        vec!["count", "unique", "top", "freq"]
    );
    // NAmes and OldTown both appear three times; NAmes was seen first
    assert_eq!(
        str_values(&described, "Neighborhood"),
        vec!["6", "2", "NAmes", "3"]
    );
}

#[test]
fn test_describe_categorical_with_nulls() {
    let df = df![
        "style" => [Some("a"), None, Some("b"), Some("a")],
    ]
    .unwrap();
    let described = df.describe_categorical().unwrap();
    assert_eq!(str_values(&described, "style"), vec!["3", "2", "a", "2"]);
}

#[test]
fn test_value_counts_descending_after_sort() {
    let df = housing_df();
    let mut counts = df.value_counts("HouseStyle").unwrap();
    // Encounter order first
    assert_eq!(
        counts,
        vec![("1Story".to_string(), 3), ("2Story".to_string(), 3)]
    );
    // The chart path sorts by descending count; a stable sort keeps
    // encounter order between equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    assert_eq!(counts[0].0, "1Story");
}

#[test]
fn test_numeric_values_and_pairs() {
    let df = df![
        "x" => [Some(1.0), Some(2.0), None, Some(4.0)],
        "y" => [Some(10.0), None, Some(30.0), Some(40.0)],
    ]
    .unwrap();

    assert_eq!(df.numeric_values("x").unwrap(), vec![1.0, 2.0, 4.0]);
    // Only rows where both sides are present pair up
    assert_eq!(
        df.numeric_pairs("x", "y").unwrap(),
        vec![(1.0, 10.0), (4.0, 40.0)]
    );
}

#[test]
fn test_value_counts_unknown_column() {
    let df = housing_df();
    assert!(df.value_counts("NoSuchColumn").is_err());
    assert!(df.value_counts("SalePrice").is_err());
}
