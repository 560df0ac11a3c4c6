//! Chi-square test of independence
//!
//! Cross-tabulated counts of two categorical variables, expected counts
//! from the row/column marginals, and the chi-square statistic with
//! (r − 1)(c − 1) degrees of freedom.

use crate::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fmt;
use tracing::debug;

/// Cross-tabulated counts of two categorical variables
///
/// Row and column labels keep whatever order the caller supplies;
/// counts are row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable {
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Create a table from labels and row-major counts
    ///
    /// The counts matrix must be rectangular and match the label lengths.
    pub fn new(
        row_labels: Vec<String>,
        col_labels: Vec<String>,
        counts: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if counts.len() != row_labels.len() {
            return Err(Error::InvalidInput(format!(
                "count matrix has {} rows, expected {}",
                counts.len(),
                row_labels.len()
            )));
        }
        for row in &counts {
            if row.len() != col_labels.len() {
                return Err(Error::InvalidInput(format!(
                    "count row has {} entries, expected {}",
                    row.len(),
                    col_labels.len()
                )));
            }
        }
        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    /// Row labels in table order
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    /// Column labels in table order
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Row-major counts
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Marginal totals per row
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Marginal totals per column
    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.n_cols())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Grand total
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContingencyTable({} x {}, n={})",
            self.n_rows(),
            self.n_cols(),
            self.total()
        )
    }
}

/// Result of a chi-square test of independence
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquareResult {
    /// The chi-square statistic
    pub statistic: f64,
    /// Degrees of freedom, (rows − 1)(cols − 1)
    pub df: usize,
    /// Upper-tail p-value
    pub p_value: f64,
}

impl fmt::Display for ChiSquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chi2 = {:.3}, p-value = {:.3}, degrees of freedom = {}",
            self.statistic, self.p_value, self.df
        )
    }
}

/// Run the chi-square test of independence on a contingency table
///
/// Needs at least a 2×2 table with every marginal non-zero, otherwise
/// some expected counts are zero and the statistic is undefined.
pub fn chi_square_test(table: &ContingencyTable) -> Result<ChiSquareResult> {
    if table.n_rows() < 2 || table.n_cols() < 2 {
        return Err(Error::InvalidInput(format!(
            "contingency table must be at least 2x2, got {}x{}",
            table.n_rows(),
            table.n_cols()
        )));
    }

    let row_totals = table.row_totals();
    let col_totals = table.col_totals();
    let total = table.total();
    if row_totals.iter().any(|&t| t == 0) || col_totals.iter().any(|&t| t == 0) {
        return Err(Error::Computation(
            "contingency table has a zero marginal".to_string(),
        ));
    }

    let total_f = total as f64;
    let mut statistic = 0.0;
    for (i, row) in table.counts().iter().enumerate() {
        for (j, &observed) in row.iter().enumerate() {
            let expected = row_totals[i] as f64 * col_totals[j] as f64 / total_f;
            let diff = observed as f64 - expected;
            statistic += diff * diff / expected;
        }
    }

    let df = (table.n_rows() - 1) * (table.n_cols() - 1);
    debug!(statistic, df, "chi-square statistic computed");

    let dist = ChiSquared::new(df as f64)
        .map_err(|e| Error::Computation(format!("chi-squared distribution: {e}")))?;
    let p_value = 1.0 - dist.cdf(statistic);

    Ok(ChiSquareResult {
        statistic,
        df,
        p_value,
    })
}
