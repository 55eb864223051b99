use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_statlab"))
}

fn run_in(config_home: &Path, args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "statlab should succeed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn theoretical_figure_to_stdout() {
    let home = TempDir::new().unwrap();
    let out = run_in(home.path(), &["-n", "10", "-p", "0.5", "theoretical"]);
    assert_success(&out);

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["data"][0]["type"], "scatter");
    assert_eq!(json["data"][0]["y"][5], 0.246);
    assert_eq!(json["layout"]["shapes"].as_array().unwrap().len(), 11);
}

#[test]
fn empirical_figure_to_file_is_seeded() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");

    for path in [&first, &second] {
        let out = run_in(
            dir.path(),
            &[
                "-n",
                "12",
                "-p",
                "0.3",
                "-s",
                "400",
                "--seed",
                "5",
                "empirical",
                "--out",
                path.to_str().unwrap(),
            ],
        );
        assert_success(&out);
    }

    let a = std::fs::read_to_string(&first).unwrap();
    let b = std::fs::read_to_string(&second).unwrap();
    assert_eq!(a, b);

    let json: serde_json::Value = serde_json::from_str(&a).unwrap();
    let total: u64 = json["data"][0]["y"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 400);
}

#[test]
fn report_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("statlab.toml");
    std::fs::write(
        &config,
        r##"
[model]
trials = 6
success_probability = 0.25
sample_size = 300
seed = 1

[figure]
report_title = "Week 3: Binomial"

[palette]
primary = "#112233"
"##,
    )
    .unwrap();
    let report = dir.path().join("report.html");

    let out = run_in(
        dir.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "report",
            "--out",
            report.to_str().unwrap(),
        ],
    );
    assert_success(&out);

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("<title>Week 3: Binomial</title>"));
    assert!(html.contains("n = 6, p = 0.25, sample size = 300"));
    assert!(html.contains("#112233"));
}

#[test]
fn invalid_probability_fails() {
    let home = TempDir::new().unwrap();
    let out = run_in(home.path(), &["-p", "1.5", "table"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("success_probability"));
}

#[test]
fn config_command_prints_toml() {
    let home = TempDir::new().unwrap();
    let out = run_in(home.path(), &["-s", "77", "config"]);
    assert_success(&out);

    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("sample_size = 77"));
    assert!(text.contains("[palette]"));
}
