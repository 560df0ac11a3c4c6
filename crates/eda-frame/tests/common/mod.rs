//! Common test utilities for eda-frame tests

use polars::prelude::*;

/// Small housing-shaped frame with no missing values
pub fn housing_df() -> DataFrame {
    df![
        "Neighborhood" => ["NAmes", "NAmes", "OldTown", "OldTown", "NAmes", "OldTown"],
        "HouseStyle" => ["1Story", "2Story", "1Story", "1Story", "2Story", "2Story"],
        "SalePrice" => [200_000.0, 215_000.0, 140_000.0, 150_000.0, 210_000.0, 145_000.0],
        "GrLivArea" => [1_500.0, 1_700.0, 1_100.0, 1_150.0, 1_650.0, 1_200.0],
    ]
    .unwrap()
}

/// Extract a numeric column as a plain vector, nulls dropped
pub fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .flatten()
        .collect()
}

/// Extract a string column as owned values, nulls dropped
pub fn str_values(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(|s| s.to_string())
        .collect()
}
