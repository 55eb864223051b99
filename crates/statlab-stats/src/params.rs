//! Binomial model parameters and their validation

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Largest trial count accepted; the PMF holds one entry per outcome
pub const MAX_TRIALS: u64 = 1_000_000;

/// Largest number of simulated draws accepted
pub const MAX_SAMPLE_SIZE: usize = 10_000_000;

/// Largest number of Bernoulli trials simulated in total (`trials * sample_size`)
pub const MAX_SIMULATED_TRIALS: u64 = 100_000_000;

/// Parameters describing one binomial model request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Number of Bernoulli trials per draw (n)
    pub trials: u64,
    /// Success probability of each trial (p)
    pub success_probability: f64,
    /// Number of simulated draws
    pub sample_size: usize,
    /// Seed for reproducible simulation; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            trials: 10,
            success_probability: 0.5,
            sample_size: 1000,
            seed: None,
        }
    }
}

impl ModelParams {
    /// Create parameters without a seed
    pub fn new(trials: u64, success_probability: f64, sample_size: usize) -> Self {
        Self {
            trials,
            success_probability,
            sample_size,
            seed: None,
        }
    }

    /// Fix the simulation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate parameter ranges
    pub fn validate(&self) -> StatsResult<()> {
        validate_parameters(self.trials, self.success_probability, self.sample_size)
    }
}

/// Check `trials >= 1`, `0 <= p <= 1` and `sample_size >= 1`, and that the
/// simulation stays within [`MAX_SIMULATED_TRIALS`]
pub fn validate_parameters(
    trials: u64,
    success_probability: f64,
    sample_size: usize,
) -> StatsResult<()> {
    if trials == 0 {
        return Err(StatsError::invalid("trials", trials, "must be at least 1"));
    }
    if trials > MAX_TRIALS {
        return Err(StatsError::invalid(
            "trials",
            trials,
            format!("must not exceed {}", MAX_TRIALS),
        ));
    }
    // NaN fails this check as well
    if !(0.0..=1.0).contains(&success_probability) {
        return Err(StatsError::invalid(
            "success_probability",
            success_probability,
            "must be between 0 and 1",
        ));
    }
    if sample_size == 0 {
        return Err(StatsError::invalid(
            "sample_size",
            sample_size,
            "must be at least 1",
        ));
    }
    if sample_size > MAX_SAMPLE_SIZE {
        return Err(StatsError::invalid(
            "sample_size",
            sample_size,
            format!("must not exceed {}", MAX_SAMPLE_SIZE),
        ));
    }
    let total = u64::try_from(sample_size)
        .ok()
        .and_then(|size| trials.checked_mul(size));
    if !matches!(total, Some(t) if t <= MAX_SIMULATED_TRIALS) {
        return Err(StatsError::invalid(
            "sample_size",
            sample_size,
            format!(
                "trials * sample_size must not exceed {} (trials = {})",
                MAX_SIMULATED_TRIALS, trials
            ),
        ));
    }
    Ok(())
}
