//! leafwalk CLI
//!
//! Prints the leaves of nested JSON forests.

mod cli;
mod commands;
mod config;
mod output;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::init::run_init;
use commands::walk::{WalkArgs, run_walk};
use config::WalkerConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Walk {
            input,
            format,
            full_paths,
            separator,
            count,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let args = WalkArgs {
                input,
                format,
                full_paths,
                separator,
                count,
            };
            run_walk(&args, &config)
        }
        Commands::Init { force } => run_init(Path::new("."), force).map(|_| ()),
    }
}

fn load_config(path: Option<&Path>) -> Result<WalkerConfig> {
    if let Some(path) = path {
        return WalkerConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = WalkerConfig::discover(".") {
        info!("Using config: {}", path.display());
        return WalkerConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(WalkerConfig::default())
}
