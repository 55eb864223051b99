//! Number and text formatting shared by figures and tables

/// Format a fraction as a percentage rounded to 2 decimals, ties to even
///
/// Whole percentages keep one decimal (`70.0%`), others drop trailing
/// zeros (`24.6%`, `33.33%`).
pub fn format_percent(fraction: f64) -> String {
    let percent = (fraction * 100.0 * 100.0).round_ties_even() / 100.0;
    if percent.fract() == 0.0 {
        format!("{:.1}%", percent)
    } else {
        format!("{}%", percent)
    }
}

/// Format a rounded probability for a table cell
pub fn format_probability(probability: f64) -> String {
    format!("{:.3}", probability)
}

/// Escape text for inclusion in HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
