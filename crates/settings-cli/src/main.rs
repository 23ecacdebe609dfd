//! site-settings CLI - inspect site settings state from recorded payloads
//!
//! Replays account recovery event logs through the reducer, normalizes raw
//! settings payloads and evaluates the Writing settings form.

mod cli;
mod commands;
mod config;
mod error;

#[cfg(test)]
mod tests;

use clap::Parser;
use settings_core::writing::WritingCapabilities;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::normalize::run_normalize;
use crate::commands::replay::run_replay;
use crate::commands::writing::run_writing;
use crate::config::{resolve_config_path, CliConfig, OutputFormat};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());
    let config = CliConfig::load_from_path(&config_path).map_err(CliError::Config)?;

    init_tracing(&config)?;
    tracing::debug!(path = %config_path.display(), "loaded CLI config");

    match cli.command {
        Commands::Replay { file, json } => {
            run_replay(&file, output_format(json, &config))?;
        }
        Commands::Normalize { file } => run_normalize(&file)?,
        Commands::Writing {
            file,
            custom_post_types,
            jetpack_custom_types,
            module_active,
            json,
        } => {
            let capabilities = WritingCapabilities {
                custom_post_types_enabled: custom_post_types,
                jetpack_version_supports_custom_types: jetpack_custom_types,
                custom_types_module_active: module_active,
            };
            run_writing(&file, &capabilities, output_format(json, &config))?;
        }
        Commands::Config { command } => run_config(command, &config_path)?,
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing(config: &CliConfig) -> Result<(), CliError> {
    let directive = config.log_filter();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directive))
        .map_err(|error| CliError::Config(format!("invalid log filter `{directive}`: {error}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

const fn output_format(json_flag: bool, config: &CliConfig) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        config.output
    }
}
