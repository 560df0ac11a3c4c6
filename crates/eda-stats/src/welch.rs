//! Welch's two-sample t-test
//!
//! Unequal-variance t-test with the Welch–Satterthwaite degrees of
//! freedom and a two-sided p-value from the Student's t distribution.

use crate::descriptive::{mean, sample_variance};
use crate::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::fmt;
use tracing::debug;

/// Result of a two-sample t-test
#[derive(Debug, Clone, PartialEq)]
pub struct TTestResult {
    /// The t statistic
    pub statistic: f64,
    /// Welch–Satterthwaite degrees of freedom (non-integral in general)
    pub df: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Sample sizes (group1, group2)
    pub sample_sizes: (usize, usize),
}

impl fmt::Display for TTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t-statistic = {:.3}, p-value = {:.3} (df = {:.1}, n = {}/{})",
            self.statistic, self.p_value, self.df, self.sample_sizes.0, self.sample_sizes.1
        )
    }
}

/// Run Welch's t-test between two samples
///
/// Each sample needs at least two observations. A combined standard
/// error of zero (both samples constant) is a computation error.
pub fn welch_t_test(sample1: &[f64], sample2: &[f64]) -> Result<TTestResult> {
    for (name, sample) in [("sample1", sample1), ("sample2", sample2)] {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite(name));
        }
    }

    let n1 = sample1.len() as f64;
    let n2 = sample2.len() as f64;
    let mean1 = mean(sample1)?;
    let mean2 = mean(sample2)?;
    let var1 = sample_variance(sample1)?;
    let var2 = sample_variance(sample2)?;

    // Per-sample squared standard errors
    let se1 = var1 / n1;
    let se2 = var2 / n2;
    let se_sq = se1 + se2;
    if se_sq <= 0.0 {
        return Err(Error::Computation(
            "both samples have zero variance".to_string(),
        ));
    }

    let statistic = (mean1 - mean2) / se_sq.sqrt();

    // Welch–Satterthwaite approximation
    let df = se_sq * se_sq / (se1 * se1 / (n1 - 1.0) + se2 * se2 / (n2 - 1.0));
    debug!(statistic, df, "welch t-test computed");

    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("t distribution: {e}")))?;
    let p_value = 2.0 * (1.0 - dist.cdf(statistic.abs()));

    Ok(TTestResult {
        statistic,
        df,
        p_value,
        sample_sizes: (sample1.len(), sample2.len()),
    })
}
