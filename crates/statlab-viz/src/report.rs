//! Report export
//!
//! Bundles the three binomial artifacts for a caller that wants everything at
//! once:
//! - JSON: figures, table and summary in one document
//! - HTML: a standalone page that renders the figures with plotly.js

use serde::{Deserialize, Serialize};

use statlab_stats::{BinomialModel, SampleSummary};

use crate::charts::{empirical_pmf_figure, theoretical_pmf_figure, FigureOptions};
use crate::error::VizResult;
use crate::figure::Figure;
use crate::format::escape_html;
use crate::table::ProbabilityTable;

/// plotly.js bundle loaded by HTML reports
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Export format for reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Machine-readable bundle
    Json,
    /// Standalone web page
    #[default]
    Html,
}

impl ExportFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }

    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Html => "text/html",
        }
    }
}

/// Model parameters and moments shown alongside the charts
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportSummary {
    pub trials: u64,
    pub success_probability: f64,
    pub sample_size: usize,
    pub theoretical_mean: f64,
    pub theoretical_variance: f64,
    pub sample_mean: f64,
    pub sample: SampleSummary,
}

impl ReportSummary {
    fn from_model(model: &BinomialModel) -> Self {
        Self {
            trials: model.trials(),
            success_probability: model.success_probability(),
            sample_size: model.sample_size(),
            theoretical_mean: model.mean(),
            theoretical_variance: model.variance(),
            sample_mean: model.sample_mean(),
            sample: model.sample_summary(),
        }
    }
}

/// All artifacts for one model
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinomialReport {
    pub title: String,
    pub summary: ReportSummary,
    pub theoretical: Figure,
    pub empirical: Figure,
    pub table: ProbabilityTable,
}

impl BinomialReport {
    /// Render every artifact for `model`
    pub fn new(model: &BinomialModel, options: &FigureOptions) -> Self {
        Self {
            title: "Binomial Distribution".to_string(),
            summary: ReportSummary::from_model(model),
            theoretical: theoretical_pmf_figure(model, options),
            empirical: empirical_pmf_figure(model, options),
            table: ProbabilityTable::from_model(model),
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Export in the requested format
    pub fn export(&self, format: ExportFormat) -> VizResult<String> {
        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ExportFormat::Html => self.to_html(),
        }
    }

    /// Standalone HTML page
    pub fn to_html(&self) -> VizResult<String> {
        let title = escape_html(&self.title);
        let summary = &self.summary;

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(&format!("<script src=\"{}\"></script>\n", PLOTLY_CDN_URL));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{}</h1>\n", title));
        html.push_str(&format!(
            "<p>n = {}, p = {}, sample size = {}</p>\n",
            summary.trials, summary.success_probability, summary.sample_size
        ));
        html.push_str(&format!(
            "<p>Theoretical mean {:.3}, sample mean {:.3}</p>\n",
            summary.theoretical_mean, summary.sample_mean
        ));
        html.push_str("<div id=\"theoretical-pmf\"></div>\n");
        html.push_str(&self.table.to_html());
        html.push('\n');
        html.push_str("<div id=\"empirical-pmf\"></div>\n");
        html.push_str("<script>\n");
        html.push_str(&plot_call("theoretical-pmf", &self.theoretical)?);
        html.push_str(&plot_call("empirical-pmf", &self.empirical)?);
        html.push_str("</script>\n</body>\n</html>\n");

        tracing::debug!(bytes = html.len(), "rendered HTML report");
        Ok(html)
    }
}

fn plot_call(element_id: &str, figure: &Figure) -> VizResult<String> {
    // Titles carry inline HTML; keep "</" from closing the script element
    let json = figure.to_json()?.replace("</", "<\\/");
    Ok(format!(
        "(function () {{ var fig = {}; Plotly.newPlot('{}', fig.data, fig.layout, {{responsive: true}}); }})();\n",
        json, element_id
    ))
}
