//! Summary statistics for a simulated sample
//!
//! Provides the figures shown next to the charts:
//! - Mean, variance, standard deviation
//! - Min, max, median

use serde::{Deserialize, Serialize};

/// Summary statistics of simulated success counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of draws
    pub count: usize,
    /// Smallest count observed
    pub min: u64,
    /// Largest count observed
    pub max: u64,
    /// Mean (average)
    pub mean: f64,
    /// Population variance of the sample
    pub variance: f64,
    /// Standard deviation
    pub std_dev: f64,
    /// Median (50th percentile)
    pub median: f64,
}

impl SampleSummary {
    /// Compute summary statistics from simulated counts
    pub fn from_counts(counts: &[u64]) -> Self {
        if counts.is_empty() {
            return Self::empty();
        }

        let count = counts.len();
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / count as f64;
        let variance = counts
            .iter()
            .map(|&c| (c as f64 - mean).powi(2))
            .sum::<f64>()
            / count as f64;

        let mut sorted = counts.to_vec();
        sorted.sort_unstable();

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] as f64 + sorted[count / 2] as f64) / 2.0
        } else {
            sorted[count / 2] as f64
        };

        Self {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            variance,
            std_dev: variance.sqrt(),
            median,
        }
    }

    fn empty() -> Self {
        Self {
            count: 0,
            min: 0,
            max: 0,
            mean: f64::NAN,
            variance: f64::NAN,
            std_dev: f64::NAN,
            median: f64::NAN,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> u64 {
        self.max - self.min
    }
}
