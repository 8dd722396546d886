//! pathlab - Hull-White / GBM path simulation from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pathlab_cli::commands::{self, run::Snapshot};
use pathlab_cli::ScenarioConfig;

/// Monte Carlo paths of a Hull-White short rate and a GBM, alone and correlated
#[derive(Parser)]
#[command(name = "pathlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pathlab.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate and chart the paths
    Run {
        /// Write text snapshots instead of opening the viewer
        #[arg(long)]
        headless: bool,

        /// Snapshot directory
        #[arg(short, long, default_value = "./figures")]
        output_dir: PathBuf,

        /// Snapshot width in columns
        #[arg(long, default_value = "120")]
        width: u16,

        /// Snapshot height in rows
        #[arg(long, default_value = "48")]
        height: u16,
    },

    /// Export chart.js JSON
    Export {
        /// Output directory
        #[arg(short, long, default_value = "./charts")]
        output_dir: PathBuf,
    },

    /// Check configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ScenarioConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?
        .with_env_override();

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.to_lowercase()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "configuration loaded");

    match cli.command {
        Commands::Run {
            headless,
            output_dir,
            width,
            height,
        } => {
            let snapshot = headless.then_some(Snapshot {
                output_dir: &output_dir,
                width,
                height,
            });
            commands::run::run(&config, snapshot)?;
        }
        Commands::Export { output_dir } => {
            commands::export::run(&config, &output_dir)?;
        }
        Commands::Check => commands::check::run(&config)?,
    }
    Ok(())
}
