//! statlab-stats - Statistical models for teaching probability
//!
//! This crate provides the numeric side of statlab:
//!
//! - **BinomialModel**: closed-form PMF plus a simulated sample, computed
//!   once at construction and read many times
//! - **ModelParams**: serializable request parameters with range validation
//! - **SampleSummary**: descriptive statistics of a simulated sample
//!
//! Rendering lives in `statlab-viz`; nothing here knows about charts.

pub mod binomial;
pub mod error;
pub mod params;
pub mod summary;

pub use binomial::*;
pub use error::*;
pub use params::*;
pub use summary::*;
