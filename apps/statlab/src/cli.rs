//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use statlab_viz::ExportFormat;

use crate::config::StatlabConfig;

#[derive(Parser, Debug)]
#[command(name = "statlab")]
#[command(about = "Binomial distribution explorer - PMF, simulation and charts")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of trials per draw
    #[arg(short = 'n', long, global = true)]
    pub trials: Option<u64>,

    /// Success probability of each trial
    #[arg(short = 'p', long = "probability", global = true)]
    pub success_probability: Option<f64>,

    /// Number of simulated draws
    #[arg(short = 's', long, global = true)]
    pub sample_size: Option<usize>,

    /// Seed for a reproducible simulation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Theoretical PMF stem plot (Plotly JSON)
    Theoretical {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Empirical PMF bar chart from the simulation (Plotly JSON)
    Empirical {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Probability table (HTML fragment)
    Table {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// All artifacts as a standalone page or JSON bundle
    Report {
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "html")]
        format: ReportFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Command {
    /// Output path, if the command writes one
    pub fn out(&self) -> Option<&PathBuf> {
        match self {
            Command::Theoretical { out }
            | Command::Empirical { out }
            | Command::Table { out }
            | Command::Report { out, .. } => out.as_ref(),
            Command::Config => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Html,
    Json,
}

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Html => ExportFormat::Html,
            ReportFormat::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut StatlabConfig) {
        if let Some(trials) = self.trials {
            config.model.trials = trials;
        }
        if let Some(p) = self.success_probability {
            config.model.success_probability = p;
        }
        if let Some(size) = self.sample_size {
            config.model.sample_size = size;
        }
        if let Some(seed) = self.seed {
            config.model.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_overrides() {
        let cli = Cli::parse_from([
            "statlab", "-n", "20", "-p", "0.25", "--seed", "3", "table", "--out", "t.html",
        ]);
        let mut config = StatlabConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.model.trials, 20);
        assert_eq!(config.model.success_probability, 0.25);
        assert_eq!(config.model.sample_size, 1000);
        assert_eq!(config.model.seed, Some(3));
        assert_eq!(cli.command.out(), Some(&PathBuf::from("t.html")));
    }

    #[test]
    fn test_parse_report_format() {
        let cli = Cli::parse_from(["statlab", "report", "--format", "json"]);
        match cli.command {
            Command::Report { format, out } => {
                assert_eq!(format, ReportFormat::Json);
                assert!(out.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
