//! The analysis pipeline object
//!
//! One owned frame, one method per pipeline stage, run top to bottom:
//! clean, describe, visualize, test.

use anyhow::{Context, Result};
use eda_frame::{read_csv, CleanExt, HypothesisExt, SummaryExt};
use eda_plot::{bar_chart, build_fixed_width, histogram_chart, scatter_chart, GaussianKde};
use polars::prelude::DataFrame;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Which columns the pipeline reports on
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    /// Categorical grouping column (bar chart, t-test groups)
    pub group: String,
    /// Second categorical column (chi-square test)
    pub style: String,
    /// Primary numeric column (histogram, t-test values, scatter y)
    pub value: String,
    /// Secondary numeric column (scatter x)
    pub area: String,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self {
            group: "Neighborhood".to_string(),
            style: "HouseStyle".to_string(),
            value: "SalePrice".to_string(),
            area: "GrLivArea".to_string(),
        }
    }
}

/// The analysis application: owns the frame and runs the pipeline
pub struct AnalysisApp {
    df: DataFrame,
    columns: ColumnSelection,
}

impl AnalysisApp {
    /// Load the frame from a CSV file
    pub fn from_csv(path: impl AsRef<Path>, columns: ColumnSelection) -> Result<Self> {
        let path = path.as_ref();
        let df = read_csv(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        Ok(Self { df, columns })
    }

    /// Wrap an already-loaded frame
    pub fn from_frame(df: DataFrame, columns: ColumnSelection) -> Self {
        Self { df, columns }
    }

    /// The current frame
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Impute missing values, then drop outlier rows
    ///
    /// Prints the shape before and after, like the rest of the
    /// pipeline's interleaved text output.
    pub fn clean_data(&mut self) -> Result<()> {
        println!(
            "Original shape: ({}, {})",
            self.df.height(),
            self.df.width()
        );

        let filled_numeric = self.df.impute_numeric_median()?;
        let filled_categorical = self.df.impute_categorical_mode()?;
        let dropped = self.df.filter_outliers_iqr()?;
        info!(filled_numeric, filled_categorical, dropped, "cleaned frame");

        println!(
            "After cleaning shape: ({}, {})",
            self.df.height(),
            self.df.width()
        );
        Ok(())
    }

    /// Print the numeric and categorical describe tables
    pub fn descriptive_stats(&self) -> Result<()> {
        println!("\n--- Numerical Data Stats ---");
        println!("{}", self.df.describe_numeric()?);
        println!("\n--- Categorical Data Stats ---");
        println!("{}", self.df.describe_categorical()?);
        Ok(())
    }

    /// Render the three charts into `out_dir`, returning their paths
    pub fn visualize(&self, out_dir: impl AsRef<Path>, bins: usize) -> Result<Vec<PathBuf>> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        let columns = &self.columns;

        // Bar chart of group counts, largest first
        let mut counts = self.df.value_counts(&columns.group)?;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
        let values: Vec<usize> = counts.iter().map(|(_, count)| *count).collect();
        let bar_path = out_dir.join(format!("{}_counts.png", columns.group.to_lowercase()));
        bar_chart(
            &bar_path,
            &format!("Number of Houses per {}", columns.group),
            &columns.group,
            &labels,
            &values,
        )?;

        // Histogram of the value column with a density overlay
        let sample = self.df.numeric_values(&columns.value)?;
        let hist = build_fixed_width(&sample, bins)?;
        let kde = GaussianKde::from_sample(&sample)?;
        let curve = kde.evaluate_grid(hist.min(), hist.max(), 200);
        let hist_path = out_dir.join(format!("{}_distribution.png", columns.value.to_lowercase()));
        histogram_chart(
            &hist_path,
            &format!("Distribution of {}", columns.value),
            &columns.value,
            &hist,
            &curve,
        )?;

        // Scatter of area against value
        let points = self.df.numeric_pairs(&columns.area, &columns.value)?;
        let scatter_path = out_dir.join(format!(
            "{}_vs_{}.png",
            columns.area.to_lowercase(),
            columns.value.to_lowercase()
        ));
        scatter_chart(
            &scatter_path,
            &format!("{} vs. {}", columns.area, columns.value),
            &columns.area,
            &columns.value,
            &points,
        )?;

        info!(out_dir = %out_dir.display(), "wrote charts");
        Ok(vec![bar_path, hist_path, scatter_path])
    }

    /// Run and print the two hypothesis tests
    pub fn hypothesis_tests(&self) -> Result<()> {
        let columns = &self.columns;

        match self.df.welch_by_group(&columns.group, &columns.value)? {
            Some(comparison) => {
                println!(
                    "\nT-test between {} and {} {}:",
                    comparison.group_a, comparison.group_b, columns.value
                );
                println!(
                    "t-statistic = {:.3}, p-value = {:.3}",
                    comparison.result.statistic, comparison.result.p_value
                );
            }
            None => {
                println!(
                    "\nT-test skipped: fewer than two distinct {} values",
                    columns.group
                );
            }
        }

        let chi = self
            .df
            .chi_square_independence(&columns.group, &columns.style)?;
        println!(
            "\nChi-square test between {} and {}:",
            columns.group, columns.style
        );
        println!(
            "chi2 = {:.3}, p-value = {:.3}, degrees of freedom = {}",
            chi.statistic, chi.p_value, chi.df
        );
        Ok(())
    }

    /// Run the whole pipeline top to bottom
    pub fn run(&mut self, out_dir: impl AsRef<Path>, bins: usize) -> Result<()> {
        self.clean_data()?;
        self.descriptive_stats()?;
        self.visualize(out_dir, bins)?;
        self.hypothesis_tests()?;
        Ok(())
    }
}
