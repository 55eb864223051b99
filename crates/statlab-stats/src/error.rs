//! Error types for statlab-stats

use thiserror::Error;

/// Errors raised while building a statistical model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A model parameter is outside its valid range
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// A PMF term could not be represented even in log space
    #[error("Numeric overflow computing P(X={outcome}) for n = {trials}")]
    NumericOverflow { trials: u64, outcome: u64 },
}

impl StatsError {
    pub(crate) fn invalid(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        StatsError::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for model operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = StatsError::invalid("trials", 0, "must be at least 1");
        let msg = err.to_string();
        assert!(msg.contains("trials"));
        assert!(msg.contains("must be at least 1"));
    }

    #[test]
    fn test_overflow_display() {
        let err = StatsError::NumericOverflow {
            trials: 5000,
            outcome: 17,
        };
        assert!(err.to_string().contains("P(X=17)"));
    }
}
