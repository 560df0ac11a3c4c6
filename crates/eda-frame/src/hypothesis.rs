//! Hypothesis-test bridging: group extraction and cross-tabulation

use crate::util::{numeric_column, string_column};
use crate::Result;
use eda_stats::{chi_square_test, welch_t_test, ChiSquareResult, ContingencyTable, TTestResult};
use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, warn};

/// A Welch t-test between two groups of a frame
#[derive(Debug, Clone, PartialEq)]
pub struct GroupComparison {
    /// First group label, in first-encountered order
    pub group_a: String,
    /// Second group label
    pub group_b: String,
    /// The test result
    pub result: TTestResult,
}

impl fmt::Display for GroupComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}: {}", self.group_a, self.group_b, self.result)
    }
}

/// Hypothesis tests over frame columns
pub trait HypothesisExt {
    /// Welch t-test of `value_col` between the first two groups of `group_col`
    ///
    /// Rows are partitioned on the first two distinct values of
    /// `group_col` in first-encountered order. Returns `Ok(None)` when
    /// fewer than two distinct values exist — the test is skipped, not
    /// an error. Rows that are null in either column are ignored.
    fn welch_by_group(&self, group_col: &str, value_col: &str)
        -> Result<Option<GroupComparison>>;

    /// Cross-tabulated counts of two string columns
    ///
    /// Label order is first-encountered order; rows with a null in
    /// either column are ignored.
    fn crosstab(&self, col_a: &str, col_b: &str) -> Result<ContingencyTable>;

    /// Chi-square test of independence between two string columns
    fn chi_square_independence(&self, col_a: &str, col_b: &str) -> Result<ChiSquareResult>;
}

impl HypothesisExt for DataFrame {
    fn welch_by_group(
        &self,
        group_col: &str,
        value_col: &str,
    ) -> Result<Option<GroupComparison>> {
        let groups = string_column(self, group_col)?.str()?;

        // First two distinct group labels, in encounter order
        let mut distinct: Vec<&str> = Vec::new();
        for value in groups.into_iter().flatten() {
            if !distinct.contains(&value) {
                distinct.push(value);
                if distinct.len() == 2 {
                    break;
                }
            }
        }
        if distinct.len() < 2 {
            warn!(
                column = group_col,
                distinct = distinct.len(),
                "fewer than two groups, skipping t-test"
            );
            return Ok(None);
        }
        let group_a = distinct[0].to_string();
        let group_b = distinct[1].to_string();

        let casted = numeric_column(self, value_col)?.cast(&DataType::Float64)?;
        let values = casted.f64()?;

        let mut sample_a = Vec::new();
        let mut sample_b = Vec::new();
        for (group, value) in groups.into_iter().zip(values.into_iter()) {
            let (Some(group), Some(value)) = (group, value) else {
                continue;
            };
            if group == group_a {
                sample_a.push(value);
            } else if group == group_b {
                sample_b.push(value);
            }
        }
        debug!(
            group_a = %group_a,
            group_b = %group_b,
            n_a = sample_a.len(),
            n_b = sample_b.len(),
            "running welch t-test"
        );

        let result = welch_t_test(&sample_a, &sample_b)?;
        Ok(Some(GroupComparison {
            group_a,
            group_b,
            result,
        }))
    }

    fn crosstab(&self, col_a: &str, col_b: &str) -> Result<ContingencyTable> {
        let ca = string_column(self, col_a)?.str()?;
        let cb = string_column(self, col_b)?.str()?;

        let mut row_labels: Vec<String> = Vec::new();
        let mut col_labels: Vec<String> = Vec::new();
        let mut row_index: HashMap<String, usize> = HashMap::new();
        let mut col_index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<Vec<u64>> = Vec::new();

        for (a, b) in ca.into_iter().zip(cb.into_iter()) {
            let (Some(a), Some(b)) = (a, b) else {
                continue;
            };
            let i = match row_index.get(a) {
                Some(&i) => i,
                None => {
                    let i = row_labels.len();
                    row_index.insert(a.to_string(), i);
                    row_labels.push(a.to_string());
                    counts.push(vec![0; col_labels.len()]);
                    i
                }
            };
            let j = match col_index.get(b) {
                Some(&j) => j,
                None => {
                    let j = col_labels.len();
                    col_index.insert(b.to_string(), j);
                    col_labels.push(b.to_string());
                    for row in &mut counts {
                        row.push(0);
                    }
                    j
                }
            };
            counts[i][j] += 1;
        }

        Ok(ContingencyTable::new(row_labels, col_labels, counts)?)
    }

    fn chi_square_independence(&self, col_a: &str, col_b: &str) -> Result<ChiSquareResult> {
        let table = self.crosstab(col_a, col_b)?;
        debug!(
            rows = table.n_rows(),
            cols = table.n_cols(),
            total = table.total(),
            "running chi-square independence test"
        );
        Ok(chi_square_test(&table)?)
    }
}
