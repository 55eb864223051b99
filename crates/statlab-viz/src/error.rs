//! Error types for statlab-viz

use thiserror::Error;

use statlab_stats::StatsError;

/// Main error type for rendering operations
#[derive(Error, Debug)]
pub enum VizError {
    /// A palette entry is not a `#RRGGBB` colour
    #[error("Invalid color '{value}': expected #RRGGBB")]
    InvalidColor { value: String },

    /// Figure could not be serialized
    #[error("Failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Model construction failed
    #[error("Model error: {0}")]
    Stats(#[from] StatsError),
}

/// Result type alias for rendering operations
pub type VizResult<T> = Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = VizError::InvalidColor {
            value: "green".to_string(),
        };
        assert!(err.to_string().contains("green"));
    }

    #[test]
    fn test_stats_error_converts() {
        let err: VizError = statlab_stats::validate_parameters(0, 0.5, 1)
            .unwrap_err()
            .into();
        assert!(matches!(err, VizError::Stats(_)));
    }
}
