//! Configuration commands.

use crate::config::ClientConfig;
use crate::error::{CliError, CliResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", ClientConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> CliResult<()> {
    if config.google.calendar_id.is_empty() {
        return Err(CliError::Config(
            "google.calendar_id must not be empty".to_string(),
        ));
    }

    // Resolving the token source checks that one is configured and that
    // any secret references expand.
    config
        .google
        .token_source(None)
        .map_err(CliError::Config)?;
    println!("Access token source is configured.");

    if config.deletion.summaries.is_empty() {
        println!("Note: [deletion] summaries is empty; purge will never match anything.");
    }

    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> CliResult<()> {
    println!("config: {}", ClientConfig::default_path().display());
    Ok(())
}
