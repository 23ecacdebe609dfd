use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] settings_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to read {path}: {source}")]
    ReadInput { path: String, source: io::Error },
    #[error("Invalid input in {path}: {message}")]
    InvalidInput { path: String, message: String },
    #[error("Configuration error: {0}")]
    Config(String),
}
