//! Transposed probability table
//!
//! The PMF is listed sideways: one row of outcomes (`x`) above one row of
//! probabilities (`P(X=x)`), with no column header. Wide tables are wrapped in
//! a horizontally scrolling container.

use serde::Serialize;

use statlab_stats::BinomialModel;

use crate::format::{escape_html, format_probability};

/// Label of the outcome row
pub const OUTCOME_ROW_LABEL: &str = "x";
/// Label of the probability row
pub const PROBABILITY_ROW_LABEL: &str = "P(X=x)";

/// One labelled table row
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<String>,
}

/// Two-row PMF listing
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProbabilityTable {
    pub rows: Vec<TableRow>,
}

impl ProbabilityTable {
    /// Tabulate the rounded PMF of a model
    pub fn from_model(model: &BinomialModel) -> Self {
        let (outcomes, probabilities): (Vec<String>, Vec<String>) = model
            .pmf_entries()
            .map(|(k, p)| (k.to_string(), format_probability(p)))
            .unzip();

        Self {
            rows: vec![
                TableRow {
                    label: OUTCOME_ROW_LABEL.to_string(),
                    cells: outcomes,
                },
                TableRow {
                    label: PROBABILITY_ROW_LABEL.to_string(),
                    cells: probabilities,
                },
            ],
        }
    }

    /// Number of outcome columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Render as an HTML table inside a horizontally scrolling `<div>`
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div style=\"overflow-x:auto;\">\n");
        html.push_str("<table class=\"probability-table\">\n");
        html.push_str("  <tbody>\n");
        for row in &self.rows {
            html.push_str("    <tr>\n");
            html.push_str(&format!("      <th>{}</th>\n", escape_html(&row.label)));
            for cell in &row.cells {
                html.push_str(&format!("      <td>{}</td>\n", escape_html(cell)));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n");
        html.push_str("</table>\n");
        html.push_str("</div>");
        html
    }
}
