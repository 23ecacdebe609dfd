//! Account recovery settings reducer
//!
//! The aggregate state is made of four independent slices, each with its own
//! reducer: the normalized settings `data` and one in-flight flag map per
//! operation kind.

use serde::{Deserialize, Serialize};

use super::event::{Operation, RecoveryEvent};
use super::flags::OperationFlags;
use super::model::{RecoverySettings, Target};
use super::normalize::{convert_email_response, convert_phone_response};

/// Aggregate account recovery state.
///
/// `data` stays `None` until settings have been fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryState {
    pub data: Option<RecoverySettings>,
    pub is_updating: OperationFlags,
    pub is_deleting: OperationFlags,
    pub is_resending: OperationFlags,
}

impl RecoveryState {
    /// Initial state: no data, no operation in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, producing the next state.
    #[must_use]
    pub fn reduce(&self, event: &RecoveryEvent) -> Self {
        Self {
            data: reduce_data(self.data.as_ref(), event),
            is_updating: reduce_is_updating(&self.is_updating, event),
            is_deleting: reduce_is_deleting(&self.is_deleting, event),
            is_resending: reduce_is_resending(&self.is_resending, event),
        }
    }

    /// Flag map tracking `operation`
    pub const fn flags(&self, operation: Operation) -> &OperationFlags {
        match operation {
            Operation::Update => &self.is_updating,
            Operation::Delete => &self.is_deleting,
            Operation::ResendValidation => &self.is_resending,
        }
    }
}

/// Settings data slice.
///
/// A fetch replaces every field through the normalizers. Update and delete
/// successes replace only the targeted field; unknown targets leave the slice
/// as it was. A targeted change before any fetch starts from empty settings.
pub fn reduce_data(
    state: Option<&RecoverySettings>,
    event: &RecoveryEvent,
) -> Option<RecoverySettings> {
    match event {
        RecoveryEvent::FetchSettingsSucceeded { settings } => Some(RecoverySettings {
            email: convert_email_response(settings.email.as_ref()),
            email_validated: settings.email_validated,
            phone: convert_phone_response(settings.phone.as_ref()),
            phone_validated: settings.phone_validated,
        }),
        RecoveryEvent::UpdateSucceeded { target, value } => {
            let base = state.cloned().unwrap_or_default();
            match target {
                Target::Phone => Some(base.with_phone(convert_phone_response(value.as_ref()))),
                Target::Email => Some(base.with_email(convert_email_response(value.as_ref()))),
                Target::Other(_) => state.cloned(),
            }
        }
        RecoveryEvent::DeleteSucceeded { target } => {
            let base = state.cloned().unwrap_or_default();
            match target {
                Target::Phone => Some(base.with_phone(None)),
                Target::Email => Some(base.with_email(String::new())),
                Target::Other(_) => state.cloned(),
            }
        }
        _ => state.cloned(),
    }
}

fn reduce_flags(state: &OperationFlags, event: &RecoveryEvent, tracked: Operation) -> OperationFlags {
    match (event.operation(), event.target()) {
        (Some((operation, stage)), Some(target)) if operation == tracked => {
            state.with(target, stage.in_flight())
        }
        _ => state.clone(),
    }
}

/// Update in-flight flags
pub fn reduce_is_updating(state: &OperationFlags, event: &RecoveryEvent) -> OperationFlags {
    reduce_flags(state, event, Operation::Update)
}

/// Delete in-flight flags
pub fn reduce_is_deleting(state: &OperationFlags, event: &RecoveryEvent) -> OperationFlags {
    reduce_flags(state, event, Operation::Delete)
}

/// Resend-validation in-flight flags
pub fn reduce_is_resending(state: &OperationFlags, event: &RecoveryEvent) -> OperationFlags {
    reduce_flags(state, event, Operation::ResendValidation)
}
