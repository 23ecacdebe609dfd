use std::path::Path;

use settings_core::recovery::{RawSettings, RecoveryEvent, RecoveryState};
use settings_core::RecoverySettings;

use crate::commands::common::{decode_input, read_input};
use crate::error::CliError;

pub fn normalize_settings(settings: RawSettings) -> Option<RecoverySettings> {
    RecoveryState::new()
        .reduce(&RecoveryEvent::FetchSettingsSucceeded { settings })
        .data
}

pub fn run_normalize(path: &Path) -> Result<(), CliError> {
    let raw = read_input(path)?;
    let settings = decode_input::<RawSettings>(path, &raw)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&normalize_settings(settings))?
    );
    Ok(())
}
