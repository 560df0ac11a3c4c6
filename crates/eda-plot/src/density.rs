//! Gaussian kernel density estimation
//!
//! Smooth density curve for the histogram overlay. Bandwidth follows
//! Silverman's rule of thumb: h = 0.9 · min(σ, IQR/1.34) · n^(−1/5).

use crate::{Error, Result};
use eda_stats::{sample_std, IqrBounds};
use statrs::distribution::{Continuous, Normal};

/// Gaussian kernel density estimator over a fixed sample
#[derive(Debug, Clone)]
pub struct GaussianKde {
    points: Vec<f64>,
    bandwidth: f64,
    kernel: Normal,
}

impl GaussianKde {
    /// Fit a KDE with Silverman's rule-of-thumb bandwidth
    ///
    /// Needs at least two observations and non-zero spread.
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        let std = sample_std(sample)?;
        let mut scratch = sample.to_vec();
        let bounds = IqrBounds::from_sample(&mut scratch)?;

        let spread = if bounds.iqr() > 0.0 {
            std.min(bounds.iqr() / 1.34)
        } else {
            std
        };
        if spread <= 0.0 {
            return Err(Error::InvalidInput(
                "sample has no spread, cannot estimate a density".to_string(),
            ));
        }

        let bandwidth = 0.9 * spread * (sample.len() as f64).powf(-0.2);
        Self::with_bandwidth(sample, bandwidth)
    }

    /// Fit a KDE with an explicit bandwidth
    pub fn with_bandwidth(sample: &[f64], bandwidth: f64) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::InvalidInput("empty sample".to_string()));
        }
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(Error::InvalidInput(format!(
                "bandwidth {bandwidth} must be positive and finite"
            )));
        }
        let kernel = Normal::new(0.0, 1.0)
            .map_err(|e| Error::InvalidInput(format!("standard normal: {e}")))?;
        Ok(Self {
            points: sample.to_vec(),
            bandwidth,
            kernel,
        })
    }

    /// The bandwidth in use
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Estimated density at a point
    pub fn density(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self
            .points
            .iter()
            .map(|&p| self.kernel.pdf((x - p) / h))
            .sum();
        sum / (self.points.len() as f64 * h)
    }

    /// Evaluate the density over a uniform grid of `steps` points
    pub fn evaluate_grid(&self, min: f64, max: f64, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(2);
        let span = max - min;
        (0..steps)
            .map(|i| {
                let x = min + span * i as f64 / (steps - 1) as f64;
                (x, self.density(x))
            })
            .collect()
    }
}
