use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "site-settings")]
#[command(about = "Inspect site settings state from recorded payloads")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the CLI config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay an account recovery event log and print the final state
    Replay {
        /// JSON file holding an array of events
        file: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Normalize a raw account recovery settings payload
    Normalize {
        /// JSON file holding the settings payload
        file: PathBuf,
    },
    /// Load the Writing settings form from a site snapshot
    Writing {
        /// JSON file holding the site snapshot
        file: PathBuf,
        /// Custom post types toggle is on
        #[arg(long)]
        custom_post_types: bool,
        /// Jetpack version supports custom content types
        #[arg(long)]
        jetpack_custom_types: bool,
        /// Custom content types module is already active
        #[arg(long)]
        module_active: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage the CLI config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create or update the config file
    Init {
        /// Tracing filter directive, e.g. `settings_core=debug`
        #[arg(long, value_name = "FILTER")]
        log_filter: Option<String>,
        /// Default output format
        #[arg(long, value_enum)]
        output: Option<OutputFormat>,
    },
    /// Print the resolved config
    Show,
}
