//! Glide CLI
//!
//! Replays JSON gesture scenarios against a headless controller and checks
//! their assertions.

mod config;
mod report;
mod runner;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::GlideConfig;
use crate::report::Report;
use crate::runner::Runner;
use crate::scenario::Scenario;

/// Replay gesture scenarios against a headless glide controller
#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Replay gesture scenarios against a headless glide controller")]
#[command(version)]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a scenario and check its assertions
    Replay {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Controller configuration (glide.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Validate a configuration file and print it with defaults filled in
    CheckConfig {
        /// Configuration file (glide.toml)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Replay {
            scenario,
            config,
            report,
        } => {
            let passed = replay(&scenario, config.as_deref(), report.as_deref())?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::CheckConfig { file } => check_config(&file),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn replay(path: &Path, config: Option<&Path>, report_path: Option<&Path>) -> Result<bool> {
    let scenario = Scenario::load(path)?;
    let config = match config {
        Some(config) => GlideConfig::load(config)?,
        None => GlideConfig::default(),
    };

    tracing::info!(
        "Replaying {} ({} steps)",
        scenario.display_name(),
        scenario.steps.len()
    );
    let outcome = Runner::new(&scenario, &config)?.run(&scenario.steps);
    let report = Report::new(scenario.display_name(), &outcome);

    match report_path {
        Some(report_path) => {
            report.write(report_path)?;
            tracing::info!("Report written to {}", report_path.display());
        }
        None => println!("{}", report.to_json()?),
    }

    match (&outcome.failure, outcome.failed_step) {
        (Some(failure), Some(index)) => {
            tracing::error!("{} failed at step {}: {}", scenario.display_name(), index, failure);
            Ok(false)
        }
        _ => {
            tracing::info!("{} passed", scenario.display_name());
            Ok(true)
        }
    }
}

fn check_config(path: &Path) -> Result<()> {
    let config = GlideConfig::load(path)?;
    config.configuration()?;
    print!("{}", config.to_toml()?);
    tracing::info!("{} is valid", path.display());
    Ok(())
}
