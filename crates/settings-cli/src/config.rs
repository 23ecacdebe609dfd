//! Persistent CLI configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use settings_core::util::normalize_text_option;

const CONFIG_FILE_NAME: &str = "cli-config.json";
const CONFIG_PATH_ENV: &str = "SITE_SETTINGS_CONFIG";
pub const DEFAULT_LOG_FILTER: &str = "settings_cli=info,settings_core=info";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CliConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            log_filter: None,
            output: OutputFormat::default(),
        }
    }
}

const fn default_config_version() -> u32 {
    1
}

/// Config file location: explicit path, then `SITE_SETTINGS_CONFIG`, then the
/// platform config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = normalize_text_option(std::env::var(CONFIG_PATH_ENV).ok()) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("site-settings")
        .join(CONFIG_FILE_NAME)
}

impl CliConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Failed to read config at {}: {}", path.display(), error))?;
        let mut config = serde_json::from_str::<Self>(&raw)
            .map_err(|error| format!("Failed to parse config at {}: {}", path.display(), error))?;
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| {
                format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    error
                )
            })?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        let serialized = serde_json::to_string_pretty(&normalized)
            .map_err(|error| format!("Failed to serialize config: {error}"))?;
        std::fs::write(path, serialized)
            .map_err(|error| format!("Failed to write config at {}: {}", path.display(), error))
    }

    /// Tracing filter to install, falling back to the built-in default
    pub fn log_filter(&self) -> String {
        normalize_text_option(self.log_filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    fn normalize(&mut self) {
        self.log_filter = normalize_text_option(self.log_filter.take());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn config_roundtrip_trims_log_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = CliConfig {
            version: 1,
            log_filter: Some("  settings_core=debug ".to_string()),
            output: OutputFormat::Json,
        };
        config.save_to_path(&path).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.log_filter.as_deref(), Some("settings_core=debug"));
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn blank_log_filter_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "version": 1, "log_filter": "   " }"#).unwrap();

        let loaded = CliConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.log_filter, None);
        assert_eq!(loaded.output, OutputFormat::Text);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let error = CliConfig::load_from_path(&path).unwrap_err();
        assert!(error.starts_with("Failed to parse config"));
    }

    #[test]
    fn explicit_config_path_wins() {
        let path = Path::new("/tmp/explicit.json");
        assert_eq!(resolve_config_path(Some(path)), path.to_path_buf());
    }
}
