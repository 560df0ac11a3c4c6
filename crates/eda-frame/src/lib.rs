//! Polars integration for the EDA pipeline
//!
//! This crate owns everything that touches the `DataFrame`: CSV
//! loading, in-place cleaning (median/mode imputation and the
//! cascading IQR outlier filter), describe-style summary tables, and
//! the bridging from frame columns to the hypothesis tests in
//! `eda-stats`. Frame operations are expressed as extension traits on
//! `DataFrame`.
//!
//! # Example
//!
//! ```rust,ignore
//! use eda_frame::{read_csv, CleanExt, SummaryExt, HypothesisExt};
//!
//! let mut df = read_csv("train.csv")?;
//! df.impute_numeric_median()?;
//! df.impute_categorical_mode()?;
//! df.filter_outliers_iqr()?;
//!
//! println!("{}", df.describe_numeric()?);
//! if let Some(comparison) = df.welch_by_group("Neighborhood", "SalePrice")? {
//!     println!("{comparison}");
//! }
//! ```

mod clean;
mod error;
mod hypothesis;
mod load;
mod summary;
mod util;

pub use clean::CleanExt;
pub use error::{Error, Result};
pub use hypothesis::{GroupComparison, HypothesisExt};
pub use load::read_csv;
pub use summary::SummaryExt;
