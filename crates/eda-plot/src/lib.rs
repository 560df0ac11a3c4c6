//! Chart rendering for the EDA pipeline
//!
//! Three chart kinds, rendered to PNG files with `plotters`:
//!
//! - a bar chart of per-category counts,
//! - a fixed-width histogram with a Gaussian-KDE density overlay,
//! - a scatter plot of two numeric variables.
//!
//! The binning and density estimation are exposed on their own so they
//! can be tested without a drawing backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use eda_plot::{build_fixed_width, histogram_chart, GaussianKde};
//!
//! let hist = build_fixed_width(&prices, 30)?;
//! let kde = GaussianKde::from_sample(&prices)?;
//! let curve = kde.evaluate_grid(hist.min(), hist.max(), 200);
//! histogram_chart("charts/prices.png", "Distribution of Sale Prices", "SalePrice", &hist, &curve)?;
//! ```

mod charts;
mod density;
mod error;
mod histogram;

pub use charts::{bar_chart, histogram_chart, scatter_chart};
pub use density::GaussianKde;
pub use error::{Error, Result};
pub use histogram::{build_fixed_width, Histogram, HistogramBin};
