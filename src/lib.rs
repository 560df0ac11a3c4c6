//! Exploratory data-analysis pipeline for tabular housing-price data
//!
//! Loads a CSV file into a polars frame, imputes missing values,
//! removes IQR outliers, prints descriptive statistics, renders three
//! charts, and runs a Welch t-test plus a chi-square independence
//! test. The heavy lifting lives in the member crates (`eda-frame`,
//! `eda-stats`, `eda-plot`); this crate wires them into one pipeline
//! behind [`AnalysisApp`].

mod app;

pub use app::{AnalysisApp, ColumnSelection};
