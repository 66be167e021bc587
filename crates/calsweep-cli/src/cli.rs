//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// calsweep - List and clean up Google Calendar events
#[derive(Debug, Parser)]
#[command(name = "calsweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "CALSWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output events as JSON
    #[arg(long)]
    pub json: bool,

    /// Access token for the Calendar API (overrides configuration)
    #[arg(long, env = "CALSWEEP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List today's remaining events
    Today,

    /// List past events from the last N days
    Past {
        /// How many days back to look
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Delete past events whose title is in the configured deny-list
    Purge {
        /// How many days back to look
        #[arg(long, default_value = "7")]
        days: u32,

        /// Show what would be deleted without deleting anything
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
