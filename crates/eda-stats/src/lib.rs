//! Descriptive statistics and hypothesis tests for exploratory analysis
//!
//! This crate holds the numeric core of the EDA pipeline: summary
//! statistics over `f64` samples and the two hypothesis tests the
//! application runs.
//!
//! # Overview
//!
//! - **Descriptive**: mean, sample variance/std, type-7 quantiles, the
//!   five-number summary, and Tukey IQR fences for outlier detection.
//! - **Welch's t-test**: two-sample comparison without assuming equal
//!   variances, with Welch–Satterthwaite degrees of freedom.
//! - **Chi-square test of independence**: association between two
//!   categorical variables via a contingency table.
//!
//! Everything operates on plain slices and owned tables; frame
//! extraction lives in `eda-frame`.
//!
//! # Examples
//!
//! ```rust
//! use eda_stats::{welch_t_test, IqrBounds};
//!
//! let group1 = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let group2 = [2.0, 4.0, 6.0, 8.0, 10.0];
//!
//! let result = welch_t_test(&group1, &group2).unwrap();
//! assert!(result.p_value > 0.05);
//!
//! let bounds = IqrBounds::from_sorted(&group1).unwrap();
//! assert!(bounds.contains(3.0));
//! ```

mod chi_square;
mod descriptive;
mod error;
mod welch;

pub use chi_square::{chi_square_test, ChiSquareResult, ContingencyTable};
pub use descriptive::{
    mean, median, quantile, quantile_sorted, sample_std, sample_variance, IqrBounds,
    NumericSummary,
};
pub use error::{Error, Result};
pub use welch::{welch_t_test, TTestResult};
