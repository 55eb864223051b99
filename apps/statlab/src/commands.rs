//! Command execution

use std::io::Write;
use std::path::Path;

use statlab_stats::BinomialModel;
use statlab_viz::{
    empirical_pmf_figure, theoretical_pmf_figure, BinomialReport, ExportFormat,
    ProbabilityTable,
};

use crate::cli::{Cli, Command};
use crate::config::StatlabConfig;
use crate::error::{AppError, AppResult};

/// Resolve configuration, run the command and write its output
pub fn run(cli: &Cli) -> AppResult<()> {
    let mut config = StatlabConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let output = render(&cli.command, &config)?;
    match cli.command.out() {
        Some(path) => write_file(path, &output),
        None => write_stdout(&output),
    }
}

/// Produce the text a command emits
pub fn render(command: &Command, config: &StatlabConfig) -> AppResult<String> {
    let options = config.figure_options();
    let output = match command {
        Command::Config => config.to_toml()?,
        Command::Theoretical { .. } => {
            theoretical_pmf_figure(&build_model(config)?, &options).to_json_pretty()?
        }
        Command::Empirical { .. } => {
            empirical_pmf_figure(&build_model(config)?, &options).to_json_pretty()?
        }
        Command::Table { .. } => ProbabilityTable::from_model(&build_model(config)?).to_html(),
        Command::Report { format, .. } => BinomialReport::new(&build_model(config)?, &options)
            .with_title(config.figure.report_title.clone())
            .export(ExportFormat::from(*format))?,
    };
    Ok(output)
}

fn build_model(config: &StatlabConfig) -> AppResult<BinomialModel> {
    let model = BinomialModel::from_params(&config.model)?;
    tracing::info!(
        trials = model.trials(),
        success_probability = model.success_probability(),
        sample_size = model.sample_size(),
        "Simulated binomial sample"
    );
    Ok(model)
}

fn write_file(path: &Path, content: &str) -> AppResult<()> {
    std::fs::write(path, content).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

fn write_stdout(content: &str) -> AppResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", content).map_err(|source| AppError::Io {
        path: "<stdout>".into(),
        source,
    })
}
