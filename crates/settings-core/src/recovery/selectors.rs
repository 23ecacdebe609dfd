//! Read-only queries over [`RecoveryState`]

use super::event::Operation;
use super::model::{PhoneNumber, RecoverySettings, Target};
use super::reducer::RecoveryState;

/// Fetched settings, if any
pub const fn settings(state: &RecoveryState) -> Option<&RecoverySettings> {
    state.data.as_ref()
}

/// Whether settings have been fetched at least once
pub const fn is_loaded(state: &RecoveryState) -> bool {
    state.data.is_some()
}

/// Recovery email, empty when unset or not fetched yet
pub fn recovery_email(state: &RecoveryState) -> &str {
    state.data.as_ref().map_or("", |data| data.email.as_str())
}

pub fn recovery_phone(state: &RecoveryState) -> Option<&PhoneNumber> {
    state.data.as_ref().and_then(|data| data.phone.as_ref())
}

pub fn has_recovery_email(state: &RecoveryState) -> bool {
    !recovery_email(state).is_empty()
}

pub fn has_recovery_phone(state: &RecoveryState) -> bool {
    recovery_phone(state).is_some()
}

pub fn is_email_validated(state: &RecoveryState) -> bool {
    state.data.as_ref().is_some_and(|data| data.email_validated)
}

pub fn is_phone_validated(state: &RecoveryState) -> bool {
    state.data.as_ref().is_some_and(|data| data.phone_validated)
}

pub fn is_updating(state: &RecoveryState, target: &Target) -> bool {
    state.is_updating.get(target)
}

pub fn is_deleting(state: &RecoveryState, target: &Target) -> bool {
    state.is_deleting.get(target)
}

pub fn is_resending(state: &RecoveryState, target: &Target) -> bool {
    state.is_resending.get(target)
}

/// Whether any operation is in flight for `target`
pub fn is_busy(state: &RecoveryState, target: &Target) -> bool {
    [
        Operation::Update,
        Operation::Delete,
        Operation::ResendValidation,
    ]
    .into_iter()
    .any(|operation| state.flags(operation).get(target))
}

/// Whether any operation is in flight for any target
pub fn has_pending_operations(state: &RecoveryState) -> bool {
    state.is_updating.any() || state.is_deleting.any() || state.is_resending.any()
}
