//! In-place cleaning: imputation and IQR outlier filtering

use crate::util::{column, mode_of, numeric_column_names, string_column_names, value_counts_str};
use crate::Result;
use eda_stats::IqrBounds;
use polars::prelude::*;
use tracing::debug;

/// Cleaning operations over a frame
///
/// All three methods mutate the frame in place, mirroring the
/// load-then-clean pipeline: impute numerics, impute categoricals,
/// then drop outlier rows.
pub trait CleanExt {
    /// Replace nulls in every numeric column with that column's median
    ///
    /// The median is computed over the non-null values. Integer columns
    /// are cast to `Float64` first so a fractional median is
    /// representable. Entirely-null columns are left untouched.
    /// Returns the number of cells filled.
    fn impute_numeric_median(&mut self) -> Result<usize>;

    /// Replace nulls in every string column with that column's mode
    ///
    /// Ties are broken by first-encountered order. Entirely-null
    /// columns are left untouched. Returns the number of cells filled.
    fn impute_categorical_mode(&mut self) -> Result<usize>;

    /// Drop rows outside the Tukey fences, column by column
    ///
    /// For each numeric column in frame order, Q1/Q3/IQR are computed
    /// over the rows that are still present, then rows outside
    /// [Q1 − 1.5·IQR, Q3 + 1.5·IQR] are dropped. The filter is
    /// sequential and cumulative: a later column's fences are computed
    /// on the row set already shrunk by the earlier columns, so the
    /// outcome depends on column order. Rows that are null in the
    /// column being filtered are dropped as well, since a null
    /// satisfies no bound. Returns the total number of rows dropped.
    fn filter_outliers_iqr(&mut self) -> Result<usize>;
}

impl CleanExt for DataFrame {
    fn impute_numeric_median(&mut self) -> Result<usize> {
        let mut filled_total = 0;
        for name in numeric_column_names(self) {
            let nulls = column(self, &name)?.null_count();
            if nulls == 0 {
                continue;
            }

            let replacement = {
                let casted = column(self, &name)?.cast(&DataType::Float64)?;
                let ca = casted.f64()?;
                let mut non_null: Vec<f64> = ca.into_iter().flatten().collect();
                if non_null.is_empty() {
                    debug!(column = %name, "column is entirely null, skipping imputation");
                    None
                } else {
                    let median = eda_stats::median(&mut non_null)?;
                    let filled: Float64Chunked = ca
                        .into_iter()
                        .map(|value| Some(value.unwrap_or(median)))
                        .collect();
                    let mut series = filled.into_series();
                    series.rename(name.as_str().into());
                    debug!(column = %name, nulls, median, "imputed numeric column");
                    Some(series)
                }
            };

            if let Some(series) = replacement {
                self.with_column(series)?;
                filled_total += nulls;
            }
        }
        Ok(filled_total)
    }

    fn impute_categorical_mode(&mut self) -> Result<usize> {
        let mut filled_total = 0;
        for name in string_column_names(self) {
            let nulls = column(self, &name)?.null_count();
            if nulls == 0 {
                continue;
            }

            let replacement = {
                let col = column(self, &name)?;
                let ca = col.str()?;
                let counts = value_counts_str(ca);
                match mode_of(&counts) {
                    None => {
                        debug!(column = %name, "column is entirely null, skipping imputation");
                        None
                    }
                    Some((mode, _)) => {
                        let mode = mode.to_string();
                        let filled: StringChunked = ca
                            .into_iter()
                            .map(|value| value.or(Some(mode.as_str())))
                            .collect();
                        let mut series = filled.into_series();
                        series.rename(name.as_str().into());
                        debug!(column = %name, nulls, mode = %mode, "imputed categorical column");
                        Some(series)
                    }
                }
            };

            if let Some(series) = replacement {
                self.with_column(series)?;
                filled_total += nulls;
            }
        }
        Ok(filled_total)
    }

    fn filter_outliers_iqr(&mut self) -> Result<usize> {
        let mut dropped_total = 0;
        for name in numeric_column_names(self) {
            let fenced = {
                let casted = column(self, &name)?.cast(&DataType::Float64)?;
                let ca = casted.f64()?;
                let mut values: Vec<f64> = ca.into_iter().flatten().collect();
                if values.is_empty() {
                    None
                } else {
                    let bounds = IqrBounds::from_sample(&mut values)?;
                    let mask: BooleanChunked = ca
                        .into_iter()
                        .map(|value| Some(value.map_or(false, |v| bounds.contains(v))))
                        .collect();
                    Some((mask, bounds))
                }
            };

            if let Some((mask, bounds)) = fenced {
                let before = self.height();
                *self = self.filter(&mask)?;
                let dropped = before - self.height();
                dropped_total += dropped;
                debug!(
                    column = %name,
                    dropped,
                    lower = bounds.lower,
                    upper = bounds.upper,
                    "applied IQR filter"
                );
            }
        }
        Ok(dropped_total)
    }
}
