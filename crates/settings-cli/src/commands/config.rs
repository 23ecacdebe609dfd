use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, config_path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Init { log_filter, output } => {
            run_config_init(config_path, log_filter, output)
        }
        ConfigCommands::Show => run_config_show(config_path),
    }
}

pub fn apply_config_init(
    mut config: CliConfig,
    log_filter: Option<String>,
    output: Option<OutputFormat>,
) -> CliConfig {
    if log_filter.is_some() {
        config.log_filter = log_filter;
    }
    if let Some(output) = output {
        config.output = output;
    }
    config
}

fn run_config_init(
    config_path: &Path,
    log_filter: Option<String>,
    output: Option<OutputFormat>,
) -> Result<(), CliError> {
    let existing = CliConfig::load_from_path(config_path).map_err(CliError::Config)?;
    let config = apply_config_init(existing, log_filter, output);
    config.save_to_path(config_path).map_err(CliError::Config)?;
    println!("Saved config to {}", config_path.display());
    Ok(())
}

fn run_config_show(config_path: &Path) -> Result<(), CliError> {
    let config = CliConfig::load_from_path(config_path).map_err(CliError::Config)?;
    println!("path: {}", config_path.display());
    println!("log_filter: {}", config.log_filter());
    println!(
        "output: {}",
        match config.output {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    );
    Ok(())
}
