//! Fixed-width histogram binning

use crate::Result;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl Histogram {
    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get the maximum density in the histogram
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density).fold(0.0, f64::max)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

/// Build a histogram with `num_bins` equal-width bins
///
/// The last bin includes the maximum. An empty sample gives an empty
/// histogram; a constant sample collapses to a single bin.
pub fn build_fixed_width(sample: &[f64], num_bins: usize) -> Result<Histogram> {
    let num_bins = num_bins.max(1);
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    if sorted.is_empty() {
        return Ok(Histogram {
            bins: vec![],
            total_count: 0,
            min: 0.0,
            max: 0.0,
        });
    }

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    if (max - min).abs() < 1e-10 {
        // All values are the same
        let bin = HistogramBin::new(min, max, sorted.len(), sorted.len());
        return Ok(Histogram {
            bins: vec![bin],
            total_count: sorted.len(),
            min,
            max,
        });
    }

    let width = (max - min) / num_bins as f64;
    let mut bins = Vec::with_capacity(num_bins);
    for i in 0..num_bins {
        let left = min + i as f64 * width;
        let right = if i == num_bins - 1 {
            max // last bin closes the right edge
        } else {
            min + (i + 1) as f64 * width
        };
        bins.push(HistogramBin::new(left, right, 0, sorted.len()));
    }

    // Single pass through the sorted data
    let mut current_bin = 0;
    for &value in &sorted {
        while current_bin < num_bins - 1 && value >= bins[current_bin].right {
            current_bin += 1;
        }
        bins[current_bin].count += 1;
    }

    let total = sorted.len();
    for bin in &mut bins {
        bin.density = bin.count as f64 / (total as f64 * bin.width());
    }

    Ok(Histogram {
        bins,
        total_count: total,
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5, 10);
        assert_abs_diff_eq!(bin.center(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(bin.width(), 1.0, epsilon = 1e-12);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
        assert_abs_diff_eq!(bin.density, 0.5, epsilon = 1e-12); // 5 / (10 * 1.0)
    }

    #[test]
    fn test_build_counts_sum_to_sample_size() {
        let sample = [1.0, 2.0, 2.5, 3.0, 4.0, 4.5, 5.0, 9.0];
        let hist = build_fixed_width(&sample, 4).unwrap();
        assert_eq!(hist.len(), 4);
        assert_eq!(hist.counts().iter().sum::<usize>(), sample.len());
        assert_eq!(hist.total_count(), sample.len());
    }

    #[test]
    fn test_build_last_bin_includes_max() {
        let sample = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = build_fixed_width(&sample, 4).unwrap();
        let last = hist.bins().last().unwrap();
        assert_eq!(last.count, 1);
        assert_abs_diff_eq!(last.right, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_build_constant_sample() {
        let sample = [3.0, 3.0, 3.0];
        let hist = build_fixed_width(&sample, 30).unwrap();
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.bins()[0].count, 3);
    }

    #[test]
    fn test_build_empty_sample() {
        let hist = build_fixed_width(&[], 30).unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.total_count(), 0);
    }

    #[test]
    fn test_densities_integrate_to_one() {
        let sample = [1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 8.0, 9.0, 10.0];
        let hist = build_fixed_width(&sample, 5).unwrap();
        let integral: f64 = hist
            .bins()
            .iter()
            .map(|bin| bin.density * bin.width())
            .sum();
        assert_abs_diff_eq!(integral, 1.0, epsilon = 1e-9);
    }
}
