//! Binomial distribution model
//!
//! A [`BinomialModel`] is built once from (n, p, sample size). Construction
//! validates the parameters, computes the closed-form PMF over `0..=n` and
//! simulates the requested number of draws. Everything afterwards is a
//! read-only view of that state, so rendering can happen any number of times.
//!
//! # PMF
//!
//! ```text
//! P(X = k) = C(n, k) * p^k * (1 - p)^(n - k)
//! ```
//!
//! `C(n, k)` is computed exactly in `u128` while it fits, and in log space
//! otherwise. Each probability is rounded to [`PMF_DECIMALS`] places, so the
//! PMF sums to 1 only up to rounding.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use statrs::function::factorial::ln_binomial;

use crate::error::{StatsError, StatsResult};
use crate::params::{validate_parameters, ModelParams};
use crate::summary::SampleSummary;

/// Decimal places kept in PMF values
pub const PMF_DECIMALS: i32 = 3;

/// Binomial distribution with a simulated sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinomialModel {
    trials: u64,
    success_probability: f64,
    sample_size: usize,
    /// Successes observed in each simulated draw
    simulated_counts: Vec<u64>,
    /// Rounded probability of each outcome, indexed by outcome
    pmf: Vec<f64>,
}

impl BinomialModel {
    /// Build a model using the thread-local random generator
    pub fn new(trials: u64, success_probability: f64, sample_size: usize) -> StatsResult<Self> {
        Self::with_rng(
            trials,
            success_probability,
            sample_size,
            &mut rand::thread_rng(),
        )
    }

    /// Build a model drawing its sample from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        trials: u64,
        success_probability: f64,
        sample_size: usize,
        rng: &mut R,
    ) -> StatsResult<Self> {
        validate_parameters(trials, success_probability, sample_size)?;

        let pmf = binomial_pmf(trials, success_probability)?;
        check_pmf_sum(trials, &pmf);
        let simulated_counts = simulate_counts(trials, success_probability, sample_size, rng);

        tracing::debug!(trials, success_probability, sample_size, "built binomial model");

        Ok(Self {
            trials,
            success_probability,
            sample_size,
            simulated_counts,
            pmf,
        })
    }

    /// Build a model from request parameters, seeding the sample when asked
    pub fn from_params(params: &ModelParams) -> StatsResult<Self> {
        match params.seed {
            Some(seed) => Self::with_rng(
                params.trials,
                params.success_probability,
                params.sample_size,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => Self::new(
                params.trials,
                params.success_probability,
                params.sample_size,
            ),
        }
    }

    /// Number of trials per draw (n)
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Success probability per trial (p)
    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    /// Number of simulated draws
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Support of the distribution, `0..=n`
    pub fn outcome_range(&self) -> RangeInclusive<u64> {
        0..=self.trials
    }

    /// Outcomes as a vector, for plotting
    pub fn outcomes(&self) -> Vec<u64> {
        self.outcome_range().collect()
    }

    /// Plot bounds on the outcome axis: `(0, n + 1)`
    pub fn x_axis_bounds(&self) -> (u64, u64) {
        (0, self.trials + 1)
    }

    /// Rounded PMF, `pmf()[k] = P(X = k)`
    pub fn pmf(&self) -> &[f64] {
        &self.pmf
    }

    /// Rounded probability of a single outcome
    pub fn probability(&self, outcome: u64) -> Option<f64> {
        usize::try_from(outcome)
            .ok()
            .and_then(|k| self.pmf.get(k).copied())
    }

    /// `(outcome, probability)` pairs in outcome order
    pub fn pmf_entries(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.outcome_range().zip(self.pmf.iter().copied())
    }

    /// Sum of the rounded PMF
    pub fn pmf_sum(&self) -> f64 {
        self.pmf.iter().sum()
    }

    /// Successes in each simulated draw
    pub fn simulated_counts(&self) -> &[u64] {
        &self.simulated_counts
    }

    /// Number of simulated draws per outcome, zero where nothing was observed
    pub fn empirical_frequencies(&self) -> Vec<u64> {
        let mut frequencies = vec![0u64; self.pmf.len()];
        for &count in &self.simulated_counts {
            if let Some(slot) = usize::try_from(count)
                .ok()
                .and_then(|k| frequencies.get_mut(k))
            {
                *slot += 1;
            }
        }
        frequencies
    }

    /// Share of simulated draws per outcome
    pub fn empirical_proportions(&self) -> Vec<f64> {
        let size = self.sample_size as f64;
        self.empirical_frequencies()
            .into_iter()
            .map(|f| f as f64 / size)
            .collect()
    }

    /// Theoretical mean, `n * p`
    pub fn mean(&self) -> f64 {
        self.trials as f64 * self.success_probability
    }

    /// Theoretical variance, `n * p * (1 - p)`
    pub fn variance(&self) -> f64 {
        self.mean() * (1.0 - self.success_probability)
    }

    /// Mean of the simulated counts
    pub fn sample_mean(&self) -> f64 {
        let total: u64 = self.simulated_counts.iter().sum();
        total as f64 / self.sample_size as f64
    }

    /// Summary statistics of the simulated counts
    pub fn sample_summary(&self) -> SampleSummary {
        SampleSummary::from_counts(&self.simulated_counts)
    }
}

/// Rounded binomial PMF over `0..=trials`
pub fn binomial_pmf(trials: u64, success_probability: f64) -> StatsResult<Vec<f64>> {
    (0..=trials)
        .map(|k| pmf_term(trials, k, success_probability).map(round_probability))
        .collect()
}

/// Round to [`PMF_DECIMALS`] places, ties to even
pub fn round_probability(value: f64) -> f64 {
    let scale = 10f64.powi(PMF_DECIMALS);
    (value * scale).round_ties_even() / scale
}

/// Largest deviation of the rounded PMF sum from 1 expected from rounding
pub fn pmf_sum_tolerance(trials: u64) -> f64 {
    let per_term = 0.5 * 10f64.powi(-PMF_DECIMALS);
    ((trials as f64 + 1.0) * per_term).max(0.01)
}

/// Warn when `pmf` does not sum to 1 within [`pmf_sum_tolerance`]
///
/// Returns whether the sum is within tolerance.
pub fn check_pmf_sum(trials: u64, pmf: &[f64]) -> bool {
    let sum: f64 = pmf.iter().sum();
    let tolerance = pmf_sum_tolerance(trials);
    let within = (sum - 1.0).abs() <= tolerance;
    if within {
        tracing::debug!(trials, pmf_sum = sum, "PMF sum within tolerance");
    } else {
        tracing::warn!(
            trials,
            pmf_sum = sum,
            tolerance,
            "PMF sum deviates from 1 beyond rounding tolerance"
        );
    }
    within
}

fn pmf_term(n: u64, k: u64, p: f64) -> StatsResult<f64> {
    // Point masses; log space cannot represent these
    if p == 0.0 {
        return Ok(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }

    let q = 1.0 - p;
    if let Some(coefficient) = exact_binomial_coefficient(n, k) {
        return Ok(coefficient as f64 * int_pow(p, k) * int_pow(q, n - k));
    }

    tracing::trace!(n, k, "binomial coefficient exceeds u128, using log space");
    let ln_term = ln_binomial(n, k) + k as f64 * p.ln() + (n - k) as f64 * q.ln();
    let term = ln_term.exp();
    if term.is_finite() {
        Ok(term)
    } else {
        Err(StatsError::NumericOverflow {
            trials: n,
            outcome: k,
        })
    }
}

/// `C(n, k)`, or `None` when an intermediate product overflows `u128`
pub fn exact_binomial_coefficient(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result == C(n, i) here, so the division is exact
        result = result.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    Some(result)
}

fn int_pow(base: f64, exp: u64) -> f64 {
    match i32::try_from(exp) {
        Ok(e) => base.powi(e),
        Err(_) => base.powf(exp as f64),
    }
}

/// Simulate `sample_size` draws, each counting the uniform draws below `p`
/// among `trials` Bernoulli trials
pub fn simulate_counts<R: Rng + ?Sized>(
    trials: u64,
    success_probability: f64,
    sample_size: usize,
    rng: &mut R,
) -> Vec<u64> {
    let mut counts = Vec::with_capacity(sample_size);
    for _ in 0..sample_size {
        let mut successes = 0u64;
        for _ in 0..trials {
            if rng.gen::<f64>() < success_probability {
                successes += 1;
            }
        }
        counts.push(successes);
    }
    counts
}
