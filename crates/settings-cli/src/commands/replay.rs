use std::path::Path;

use settings_core::recovery::{parse_events, selectors, RecoveryStore};

use crate::commands::common::{format_state_lines, read_input};
use crate::config::OutputFormat;
use crate::error::CliError;

pub fn run_replay(path: &Path, format: OutputFormat) -> Result<(), CliError> {
    let raw = read_input(path)?;
    let events = parse_events(&raw)?;

    let mut store = RecoveryStore::new();
    store.replay(&events);
    tracing::info!(events = events.len(), "replayed account recovery events");

    let state = store.into_state();
    if selectors::has_pending_operations(&state) {
        tracing::warn!("event log ends with operations still in flight");
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&state)?),
        OutputFormat::Text => {
            for line in format_state_lines(&state) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
