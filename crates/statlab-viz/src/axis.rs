//! Axis specifications for Plotly figures
//!
//! Discrete outcome axes label every outcome while there are few of them and
//! leave tick placement to the plotting library once they get crowded.

use serde::{Deserialize, Serialize};

use crate::figure::{Font, Title};

/// Default number of outcomes up to which every tick is labelled
pub const DEFAULT_TICK_LABEL_LIMIT: u64 = 30;

/// Plotly tick placement mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    /// Ticks at the explicit `tickvals`
    Array,
    /// Ticks chosen by the renderer
    Auto,
}

/// How ticks are placed along an outcome axis
#[derive(Clone, Debug, PartialEq)]
pub enum TickPolicy {
    /// One labelled tick per listed value
    Explicit(Vec<u64>),
    /// Let the renderer pick
    Automatic,
}

impl TickPolicy {
    /// Label each outcome in `0..=max_outcome` when `max_outcome <= limit`
    pub fn for_outcomes(max_outcome: u64, limit: u64) -> Self {
        if max_outcome <= limit {
            TickPolicy::Explicit((0..=max_outcome).collect())
        } else {
            TickPolicy::Automatic
        }
    }

    /// Tick mode for this policy
    pub fn mode(&self) -> TickMode {
        match self {
            TickPolicy::Explicit(_) => TickMode::Array,
            TickPolicy::Automatic => TickMode::Auto,
        }
    }
}

/// Configuration for one axis
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    /// Axis title
    pub title: Title,

    /// Tick placement mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<TickMode>,

    /// Explicit tick positions (only with `TickMode::Array`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<u64>>,

    /// Tick label rotation in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,

    /// Tick label font
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

impl Axis {
    /// Create an axis with a title and default ticks
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Title::new(title),
            tickmode: None,
            tickvals: None,
            tickangle: None,
            tickfont: None,
        }
    }

    /// Apply a tick policy
    pub fn with_ticks(mut self, policy: TickPolicy) -> Self {
        self.tickmode = Some(policy.mode());
        self.tickvals = match policy {
            TickPolicy::Explicit(values) => Some(values),
            TickPolicy::Automatic => None,
        };
        self
    }

    /// Set tick label rotation
    pub fn with_tick_angle(mut self, degrees: i32) -> Self {
        self.tickangle = Some(degrees);
        self
    }

    /// Set tick label colour
    pub fn with_tick_color(mut self, color: impl Into<String>) -> Self {
        self.tickfont = Some(Font {
            color: Some(color.into()),
            size: None,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_explicit_up_to_limit() {
        let policy = TickPolicy::for_outcomes(30, DEFAULT_TICK_LABEL_LIMIT);
        assert_eq!(policy.mode(), TickMode::Array);
        match policy {
            TickPolicy::Explicit(values) => assert_eq!(values.len(), 31),
            TickPolicy::Automatic => panic!("expected explicit ticks"),
        }
    }

    #[test]
    fn test_policy_automatic_beyond_limit() {
        let policy = TickPolicy::for_outcomes(31, DEFAULT_TICK_LABEL_LIMIT);
        assert_eq!(policy, TickPolicy::Automatic);
    }

    #[test]
    fn test_axis_serialization() {
        let axis = Axis::new("Number of Successes")
            .with_ticks(TickPolicy::for_outcomes(2, 30))
            .with_tick_angle(0);
        let json = serde_json::to_value(&axis).unwrap();

        assert_eq!(json["title"]["text"], "Number of Successes");
        assert_eq!(json["tickmode"], "array");
        assert_eq!(json["tickvals"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["tickangle"], 0);
        assert!(json.get("tickfont").is_none());
    }

    #[test]
    fn test_tick_color() {
        let axis = Axis::new("Probability").with_tick_color("#75787B");
        let json = serde_json::to_value(&axis).unwrap();

        assert_eq!(json["tickfont"]["color"], "#75787B");
        assert!(json["tickfont"].get("size").is_none());
    }

    #[test]
    fn test_auto_axis_omits_tickvals() {
        let axis = Axis::new("x").with_ticks(TickPolicy::Automatic);
        let json = serde_json::to_value(&axis).unwrap();

        assert_eq!(json["tickmode"], "auto");
        assert!(json.get("tickvals").is_none());
    }
}
