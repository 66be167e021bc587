//! calsweep CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use calsweep_cli::cli::{Cli, Command, ConfigAction};
use calsweep_cli::config::ClientConfig;
use calsweep_cli::error::{CliError, CliResult};
use calsweep_cli::commands;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Run the command
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(CliError::Config)?
    } else {
        ClientConfig::load().map_err(CliError::Config)?
    };

    let token = cli.access_token.as_deref();

    match cli.command {
        Command::Today => commands::today::run(&config, token, cli.json).await,
        Command::Past { days } => commands::past::run(&config, token, cli.json, days).await,
        Command::Purge {
            days,
            dry_run,
            yes,
        } => commands::purge::run(&config, token, cli.json, days, dry_run, yes).await,
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
