//! Describe-style summary tables

use crate::util::{
    column, mode_of, numeric_column, numeric_column_names, numeric_values, string_column,
    string_column_names, value_counts_str,
};
use crate::{Error, Result};
use eda_stats::NumericSummary;
use polars::prelude::*;

const NUMERIC_STATS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];
const CATEGORICAL_STATS: [&str; 4] = ["count", "unique", "top", "freq"];

/// Read-only summary operations over a frame
pub trait SummaryExt {
    /// Describe table for the numeric columns
    ///
    /// One row per statistic (count, mean, std, min, 25%, 50%, 75%,
    /// max), one column per numeric column. Statistics are computed
    /// over non-null values; every numeric column needs at least two
    /// of them.
    fn describe_numeric(&self) -> Result<DataFrame>;

    /// Describe table for the string columns
    ///
    /// One row per statistic (count, unique, top, freq), one column
    /// per string column. `top` is the modal value with ties broken by
    /// first-encountered order; `freq` is its count.
    fn describe_categorical(&self) -> Result<DataFrame>;

    /// Per-category counts of a string column, in first-encountered order
    fn value_counts(&self, column: &str) -> Result<Vec<(String, usize)>>;

    /// Non-null values of a numeric column as f64 (integers are cast up)
    fn numeric_values(&self, column: &str) -> Result<Vec<f64>>;

    /// Row-wise pairs of two numeric columns, rows with a null skipped
    fn numeric_pairs(&self, x: &str, y: &str) -> Result<Vec<(f64, f64)>>;
}

impl SummaryExt for DataFrame {
    fn describe_numeric(&self) -> Result<DataFrame> {
        let names = numeric_column_names(self);
        if names.is_empty() {
            return Err(Error::InvalidInput(
                "frame has no numeric columns".to_string(),
            ));
        }

        let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 1);
        let labels: Vec<String> = NUMERIC_STATS.iter().map(|s| s.to_string()).collect();
        columns.push(Series::new("statistic".into(), labels).into());

        for name in &names {
            let values = numeric_values(self, name)?;
            let summary = NumericSummary::from_sample(&values)?;
            let stats = vec![
                summary.count as f64,
                summary.mean,
                summary.std,
                summary.min,
                summary.q1,
                summary.median,
                summary.q3,
                summary.max,
            ];
            columns.push(Series::new(name.as_str().into(), stats).into());
        }

        Ok(DataFrame::new(columns)?)
    }

    fn describe_categorical(&self) -> Result<DataFrame> {
        let names = string_column_names(self);
        if names.is_empty() {
            return Err(Error::InvalidInput(
                "frame has no string columns".to_string(),
            ));
        }

        let mut columns: Vec<Column> = Vec::with_capacity(names.len() + 1);
        let labels: Vec<String> = CATEGORICAL_STATS.iter().map(|s| s.to_string()).collect();
        columns.push(Series::new("statistic".into(), labels).into());

        for name in &names {
            let col = column(self, name)?;
            let ca = col.str()?;
            let counts = value_counts_str(ca);
            let non_null = col.len() - col.null_count();
            let (top, freq) = match mode_of(&counts) {
                Some((top, freq)) => (top.to_string(), freq),
                None => (String::new(), 0),
            };
            let stats = vec![
                non_null.to_string(),
                counts.len().to_string(),
                top,
                freq.to_string(),
            ];
            columns.push(Series::new(name.as_str().into(), stats).into());
        }

        Ok(DataFrame::new(columns)?)
    }

    fn value_counts(&self, column: &str) -> Result<Vec<(String, usize)>> {
        let col = string_column(self, column)?;
        Ok(value_counts_str(col.str()?))
    }

    fn numeric_values(&self, column: &str) -> Result<Vec<f64>> {
        numeric_values(self, column)
    }

    fn numeric_pairs(&self, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
        let cx = numeric_column(self, x)?.cast(&DataType::Float64)?;
        let cy = numeric_column(self, y)?.cast(&DataType::Float64)?;
        let pairs = cx
            .f64()?
            .into_iter()
            .zip(cy.f64()?.into_iter())
            .filter_map(|(x, y)| Some((x?, y?)))
            .collect();
        Ok(pairs)
    }
}
