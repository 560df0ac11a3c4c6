//! Descriptive statistics over numeric samples
//!
//! Means, sample variance, linearly interpolated quantiles, and the
//! five-number summary used by the describe tables. Quantiles use the
//! type-7 definition (linear interpolation between order statistics),
//! which matches the common dataframe-library default.

use crate::{Error, Result};
use std::fmt;

/// Arithmetic mean of a sample
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

/// Unbiased sample variance (n − 1 denominator)
pub fn sample_variance(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    let m = mean(sample)?;
    let ss = sample.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok(ss / (sample.len() - 1) as f64)
}

/// Unbiased sample standard deviation
pub fn sample_std(sample: &[f64]) -> Result<f64> {
    Ok(sample_variance(sample)?.sqrt())
}

/// Type-7 quantile of sorted data
///
/// `sorted` must be in ascending order; `p` in [0, 1]. Interpolates
/// linearly between the two order statistics surrounding h = (n − 1)·p.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    if sorted.is_empty() {
        return Err(Error::empty_input());
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_probability(p));
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    if lo == hi {
        return Ok(sorted[lo]);
    }
    let frac = h - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Type-7 quantile of unsorted data (sorts in place)
pub fn quantile(sample: &mut [f64], p: f64) -> Result<f64> {
    sample.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    quantile_sorted(sample, p)
}

/// Median of unsorted data (sorts in place)
pub fn median(sample: &mut [f64]) -> Result<f64> {
    quantile(sample, 0.5)
}

/// Five-number summary plus mean and sample std for one numeric column
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl NumericSummary {
    /// Compute the summary for a sample
    ///
    /// Requires at least two observations so the sample std is defined.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }

        let mut sorted = sample.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Ok(Self {
            count: sample.len(),
            mean: mean(sample)?,
            std: sample_std(sample)?,
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25)?,
            median: quantile_sorted(&sorted, 0.5)?,
            q3: quantile_sorted(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }
}

impl fmt::Display for NumericSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, mean={:.3}, std={:.3}, min={:.3}, q1={:.3}, median={:.3}, q3={:.3}, max={:.3}",
            self.count, self.mean, self.std, self.min, self.q1, self.median, self.q3, self.max
        )
    }
}

/// Tukey fences derived from the interquartile range
///
/// Bounds are [Q1 − 1.5·IQR, Q3 + 1.5·IQR], the classic outlier rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    const FENCE: f64 = 1.5;

    /// Compute the fences from sorted data
    pub fn from_sorted(sorted: &[f64]) -> Result<Self> {
        let q1 = quantile_sorted(sorted, 0.25)?;
        let q3 = quantile_sorted(sorted, 0.75)?;
        let iqr = q3 - q1;
        Ok(Self {
            q1,
            q3,
            lower: q1 - Self::FENCE * iqr,
            upper: q3 + Self::FENCE * iqr,
        })
    }

    /// Compute the fences from unsorted data (sorts in place)
    pub fn from_sample(sample: &mut [f64]) -> Result<Self> {
        sample.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Self::from_sorted(sample)
    }

    /// The interquartile range itself
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Whether a value lies within the fences (inclusive on both ends)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for IqrBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IQR bounds [{:.3}, {:.3}] (q1={:.3}, q3={:.3})",
            self.lower, self.upper, self.q1, self.q3
        )
    }
}
