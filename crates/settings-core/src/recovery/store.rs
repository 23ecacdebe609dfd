//! Explicitly owned container for [`RecoveryState`]

use tracing::debug;

use super::event::RecoveryEvent;
use super::model::Target;
use super::reducer::RecoveryState;
use crate::error::{Error, Result};
use crate::util::compact_text;

/// Holds the current recovery state and applies dispatched events to it.
#[derive(Debug, Clone, Default)]
pub struct RecoveryStore {
    state: RecoveryState,
}

impl RecoveryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state instead of the initial one.
    #[must_use]
    pub const fn with_state(state: RecoveryState) -> Self {
        Self { state }
    }

    pub const fn state(&self) -> &RecoveryState {
        &self.state
    }

    pub fn into_state(self) -> RecoveryState {
        self.state
    }

    /// Apply one event and return the resulting state.
    pub fn dispatch(&mut self, event: &RecoveryEvent) -> &RecoveryState {
        debug!(
            kind = event.kind(),
            recovery_target = event.target().map(Target::as_str),
            "dispatching account recovery event"
        );
        self.state = self.state.reduce(event);
        &self.state
    }

    /// Dispatch every event in order.
    pub fn replay<'a, I>(&mut self, events: I) -> &RecoveryState
    where
        I: IntoIterator<Item = &'a RecoveryEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        &self.state
    }
}

/// Decode a JSON array of events.
pub fn parse_events(payload: &str) -> Result<Vec<RecoveryEvent>> {
    serde_json::from_str(payload).map_err(|error| {
        Error::InvalidInput(format!(
            "invalid account recovery event log: {}",
            compact_text(&error.to_string())
        ))
    })
}
