//! Column access and classification helpers shared by the frame operations

use crate::{Error, Result};
use polars::prelude::*;

/// Whether a dtype takes part in numeric cleaning and summaries
pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

/// Look up a column, mapping a missing name to `Error::InvalidColumn`
pub(crate) fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Look up a column and require a numeric dtype
pub(crate) fn numeric_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let col = column(df, name)?;
    if !is_numeric_dtype(col.dtype()) {
        return Err(Error::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            got: format!("{:?}", col.dtype()),
        });
    }
    Ok(col)
}

pub(crate) fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    let col = column(df, name)?;
    if !matches!(col.dtype(), DataType::String) {
        return Err(Error::TypeMismatch {
            column: name.to_string(),
            expected: "string".to_string(),
            got: format!("{:?}", col.dtype()),
        });
    }
    Ok(col)
}

/// Names of all numeric columns, in frame order
pub(crate) fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| is_numeric_dtype(c.dtype()))
        .map(|c| c.name().to_string())
        .collect()
}

/// Names of all string columns, in frame order
pub(crate) fn string_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| matches!(c.dtype(), DataType::String))
        .map(|c| c.name().to_string())
        .collect()
}

/// Non-null values of a numeric column as f64 (integers are cast up)
pub(crate) fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = numeric_column(df, name)?;
    let casted = col.cast(&DataType::Float64)?;
    let ca = casted.f64()?;
    Ok(ca.into_iter().flatten().collect())
}

/// Per-value counts of a string column, in first-encountered order
pub(crate) fn value_counts_str(ca: &StringChunked) -> Vec<(String, usize)> {
    use std::collections::HashMap;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in ca.into_iter().flatten() {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts
}

/// Modal value and its count; ties broken by first-encountered order
pub(crate) fn mode_of(counts: &[(String, usize)]) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| *count > best_count) {
            best = Some((value.as_str(), *count));
        }
    }
    best
}
