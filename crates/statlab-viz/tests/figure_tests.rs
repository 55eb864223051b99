//! Figure integration tests
//!
//! Checks the Plotly JSON emitted for the binomial charts

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use statlab_stats::BinomialModel;
use statlab_viz::{
    empirical_pmf_figure, theoretical_pmf_figure, FigureOptions, Palette, TickMode,
};

fn model(trials: u64, p: f64, size: usize) -> BinomialModel {
    BinomialModel::with_rng(trials, p, size, &mut StdRng::seed_from_u64(99)).unwrap()
}

fn to_value(json: String) -> Value {
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_stems_follow_pmf() {
    let model = model(8, 0.3, 50);
    let figure = theoretical_pmf_figure(&model, &FigureOptions::default());

    assert_eq!(figure.layout.shapes.len(), model.pmf().len());
    for ((k, p), shape) in model.pmf_entries().zip(&figure.layout.shapes) {
        assert_eq!(shape.x0, k as f64);
        assert_eq!(shape.x1, k as f64);
        assert_eq!(shape.y0, 0.0);
        assert_eq!(shape.y1, p);
    }
}

#[test]
fn test_custom_palette_reaches_json() {
    let options = FigureOptions {
        palette: Palette::from_hex("#112233", "#445566", "#778899").unwrap(),
        ..Default::default()
    };
    let model = model(3, 0.5, 20);

    let theoretical = to_value(theoretical_pmf_figure(&model, &options).to_json().unwrap());
    assert_eq!(theoretical["data"][0]["marker"]["color"], "#112233");
    assert_eq!(theoretical["layout"]["shapes"][0]["line"]["color"], "#112233");
    assert_eq!(theoretical["layout"]["shapes"][0]["line"]["width"], 2.0);

    let empirical = to_value(empirical_pmf_figure(&model, &options).to_json().unwrap());
    assert_eq!(empirical["data"][0]["marker"]["color"], "#445566");
    assert_eq!(empirical["layout"]["hoverlabel"]["bgcolor"], "#445566");
    assert_eq!(
        empirical["layout"]["yaxis"]["title"]["text"],
        "Frequency (Count)"
    );
}

#[test]
fn test_large_trial_count_uses_auto_ticks() {
    let model = model(200, 0.5, 10);
    let figure = empirical_pmf_figure(&model, &FigureOptions::default());

    assert_eq!(figure.layout.xaxis.tickmode, Some(TickMode::Auto));
    assert_eq!(figure.layout.xaxis.tickangle, Some(0));

    let json = to_value(figure.to_json_pretty().unwrap());
    assert!(json["layout"]["xaxis"].get("tickvals").is_none());
}

#[test]
fn test_empirical_percentages_sum_to_sample() {
    let model = model(1, 0.3, 1000);
    let figure = to_value(
        empirical_pmf_figure(&model, &FigureOptions::default())
            .to_json()
            .unwrap(),
    );

    let counts: Vec<u64> = figure["data"][0]["y"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .collect();
    assert_eq!(counts.iter().sum::<u64>(), 1000);

    let share = counts[1] as f64 / 1000.0;
    assert!((share - 0.3).abs() <= 0.05);
}
