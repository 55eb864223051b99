//! Binomial chart builders
//!
//! Both builders are pure reads of a [`BinomialModel`]; call them as often as
//! needed.

use serde::{Deserialize, Serialize};

use statlab_stats::BinomialModel;

use crate::axis::{Axis, TickPolicy, DEFAULT_TICK_LABEL_LIMIT};
use crate::figure::{
    BarTrace, Figure, HoverLabel, Layout, Line, Marker, ScatterTrace, Shape, Title, Trace,
};
use crate::format::format_percent;
use crate::palette::Palette;

const THEORETICAL_TITLE: &str = "Binomial Distribution Theoretical PMF";
const EMPIRICAL_TITLE: &str = "Binomial Distribution Empirical PMF (Simulation)";
const OUTCOME_AXIS_TITLE: &str = "Number of Successes";

const THEORETICAL_HOVER: &str =
    "<b>Number of Successes</b>: %{x}<br><b>Probability</b>: %{customdata}";
const EMPIRICAL_HOVER: &str =
    "<b>Number of Successes</b>: %{x}<br><b>Count</b>: %{y}<br><b>Percentage</b>: %{customdata}";

const STEM_WIDTH: f64 = 2.0;
const BAR_OPACITY: f64 = 0.8;
const HOVER_FONT_SIZE: u32 = 14;

/// Styling shared by the chart builders
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureOptions {
    /// Colours for markers, bars and hover labels
    pub palette: Palette,
    /// Label every outcome while `trials` is at most this
    pub tick_label_limit: u64,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            tick_label_limit: DEFAULT_TICK_LABEL_LIMIT,
        }
    }
}

impl FigureOptions {
    fn outcome_axis(&self, model: &BinomialModel) -> Axis {
        self.value_axis(OUTCOME_AXIS_TITLE)
            .with_ticks(TickPolicy::for_outcomes(
                model.trials(),
                self.tick_label_limit,
            ))
            .with_tick_angle(0)
    }

    fn value_axis(&self, title: &str) -> Axis {
        Axis::new(title).with_tick_color(self.palette.neutral.to_hex())
    }
}

fn styled_title(text: &str) -> Title {
    Title::new(format!(
        "<span style='font-size:18px; font-weight:bold;'>{}</span>",
        text
    ))
}

/// Stem plot of the theoretical PMF
///
/// One marker per outcome at its probability, with a vertical stem from the
/// axis. Hover text shows the probability as a percentage.
pub fn theoretical_pmf_figure(model: &BinomialModel, options: &FigureOptions) -> Figure {
    let color = options.palette.primary.to_hex();
    let outcomes = model.outcomes();
    let pmf = model.pmf().to_vec();

    let customdata = pmf.iter().map(|&p| format_percent(p)).collect();
    let shapes = model
        .pmf_entries()
        .map(|(k, p)| {
            Shape::stem(
                k as f64,
                p,
                Line {
                    color: color.clone(),
                    width: STEM_WIDTH,
                },
            )
        })
        .collect();

    let trace = ScatterTrace {
        x: outcomes,
        y: pmf,
        mode: "markers".to_string(),
        marker: Marker {
            color: color.clone(),
            opacity: None,
        },
        hovertemplate: THEORETICAL_HOVER.to_string(),
        name: String::new(),
        customdata,
        hoverlabel: HoverLabel::font_color("white"),
    };

    Figure {
        data: vec![Trace::Scatter(trace)],
        layout: Layout {
            title: styled_title(THEORETICAL_TITLE),
            xaxis: options.outcome_axis(model),
            yaxis: options.value_axis("Probability"),
            hoverlabel: HoverLabel::sized(HOVER_FONT_SIZE, color),
            shapes,
        },
    }
}

/// Bar chart of simulated outcome frequencies
///
/// Bar heights are raw counts; hover text adds the share of the sample.
pub fn empirical_pmf_figure(model: &BinomialModel, options: &FigureOptions) -> Figure {
    let color = options.palette.accent.to_hex();
    let frequencies = model.empirical_frequencies();
    let size = model.sample_size() as f64;

    let customdata = frequencies
        .iter()
        .map(|&count| format_percent(count as f64 / size))
        .collect();

    let trace = BarTrace {
        x: model.outcomes(),
        y: frequencies,
        marker: Marker {
            color: color.clone(),
            opacity: Some(BAR_OPACITY),
        },
        hovertemplate: EMPIRICAL_HOVER.to_string(),
        name: String::new(),
        customdata,
        hoverlabel: HoverLabel::font_color("white"),
    };

    Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            title: styled_title(EMPIRICAL_TITLE),
            xaxis: options.outcome_axis(model),
            yaxis: options.value_axis("Frequency (Count)"),
            hoverlabel: HoverLabel::sized(HOVER_FONT_SIZE, color),
            shapes: Vec::new(),
        },
    }
}
