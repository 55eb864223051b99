//! Declarative figure specifications
//!
//! These types mirror the subset of the Plotly figure schema statlab emits.
//! A [`Figure`] serializes straight to `{"data": [...], "layout": {...}}`, which
//! any Plotly front end can render. Nothing here draws.

use serde::Serialize;

use crate::axis::Axis;
use crate::error::VizResult;

/// Title text (Plotly accepts inline HTML)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Font overrides
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Hover tooltip styling
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HoverLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

impl HoverLabel {
    /// Hover label with a fixed font colour
    pub fn font_color(color: impl Into<String>) -> Self {
        Self {
            font: Some(Font {
                color: Some(color.into()),
                size: None,
            }),
            bgcolor: None,
        }
    }

    /// Hover label with a font size and background
    pub fn sized(size: u32, bgcolor: impl Into<String>) -> Self {
        Self {
            font: Some(Font {
                color: None,
                size: Some(size),
            }),
            bgcolor: Some(bgcolor.into()),
        }
    }
}

/// Marker styling
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// Scatter trace
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<u64>,
    pub y: Vec<f64>,
    /// e.g. `"markers"`
    pub mode: String,
    pub marker: Marker,
    pub hovertemplate: String,
    pub name: String,
    pub customdata: Vec<String>,
    pub hoverlabel: HoverLabel,
}

/// Bar trace
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<u64>,
    pub y: Vec<u64>,
    pub marker: Marker,
    pub hovertemplate: String,
    pub name: String,
    pub customdata: Vec<String>,
    pub hoverlabel: HoverLabel,
}

/// A single data series
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
}

/// Line styling for shapes
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

/// Kind of layout shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
}

/// A shape drawn in data coordinates
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: Line,
}

impl Shape {
    /// Vertical segment from `(x, 0)` to `(x, height)`
    pub fn stem(x: f64, height: f64, line: Line) -> Self {
        Self {
            kind: ShapeKind::Line,
            x0: x,
            y0: 0.0,
            x1: x,
            y1: height,
            line,
        }
    }
}

/// Figure layout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hoverlabel: HoverLabel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

/// A complete figure
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Serialize to compact Plotly JSON
    pub fn to_json(&self) -> VizResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented Plotly JSON
    pub fn to_json_pretty(&self) -> VizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
