//! Account recovery settings events
//!
//! Events are decoded from JSON objects tagged by `type`, using the action
//! type names the data layer dispatches.

use serde::{Deserialize, Serialize};

use super::model::Target;
use super::raw::{RawSettings, RawValue};

/// Kind of operation tracked by an in-flight flag map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Update,
    Delete,
    ResendValidation,
}

/// Point of an operation's lifecycle an event reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Requested,
    Succeeded,
    Failed,
}

impl Stage {
    /// Value the in-flight flag takes after this stage
    pub const fn in_flight(self) -> bool {
        matches!(self, Self::Requested)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecoveryEvent {
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_FETCH_SUCCESS")]
    FetchSettingsSucceeded { settings: RawSettings },

    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_UPDATE")]
    UpdateRequested { target: Target },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS")]
    UpdateSucceeded {
        target: Target,
        #[serde(default)]
        value: Option<RawValue>,
    },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_UPDATE_FAILED")]
    UpdateFailed { target: Target },

    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_DELETE")]
    DeleteRequested { target: Target },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_DELETE_SUCCESS")]
    DeleteSucceeded { target: Target },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_DELETE_FAILED")]
    DeleteFailed { target: Target },

    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION")]
    ResendValidationRequested { target: Target },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_SUCCESS")]
    ResendValidationSucceeded { target: Target },
    #[serde(rename = "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_FAILED")]
    ResendValidationFailed { target: Target },
}

impl RecoveryEvent {
    /// Action type name of this event
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchSettingsSucceeded { .. } => "ACCOUNT_RECOVERY_SETTINGS_FETCH_SUCCESS",
            Self::UpdateRequested { .. } => "ACCOUNT_RECOVERY_SETTINGS_UPDATE",
            Self::UpdateSucceeded { .. } => "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS",
            Self::UpdateFailed { .. } => "ACCOUNT_RECOVERY_SETTINGS_UPDATE_FAILED",
            Self::DeleteRequested { .. } => "ACCOUNT_RECOVERY_SETTINGS_DELETE",
            Self::DeleteSucceeded { .. } => "ACCOUNT_RECOVERY_SETTINGS_DELETE_SUCCESS",
            Self::DeleteFailed { .. } => "ACCOUNT_RECOVERY_SETTINGS_DELETE_FAILED",
            Self::ResendValidationRequested { .. } => {
                "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION"
            }
            Self::ResendValidationSucceeded { .. } => {
                "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_SUCCESS"
            }
            Self::ResendValidationFailed { .. } => {
                "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_FAILED"
            }
        }
    }

    /// Target the event applies to; `None` for a settings fetch.
    pub const fn target(&self) -> Option<&Target> {
        match self {
            Self::FetchSettingsSucceeded { .. } => None,
            Self::UpdateRequested { target }
            | Self::UpdateSucceeded { target, .. }
            | Self::UpdateFailed { target }
            | Self::DeleteRequested { target }
            | Self::DeleteSucceeded { target }
            | Self::DeleteFailed { target }
            | Self::ResendValidationRequested { target }
            | Self::ResendValidationSucceeded { target }
            | Self::ResendValidationFailed { target } => Some(target),
        }
    }

    /// Operation and lifecycle stage this event reports, if any
    pub const fn operation(&self) -> Option<(Operation, Stage)> {
        let step = match self {
            Self::FetchSettingsSucceeded { .. } => return None,
            Self::UpdateRequested { .. } => (Operation::Update, Stage::Requested),
            Self::UpdateSucceeded { .. } => (Operation::Update, Stage::Succeeded),
            Self::UpdateFailed { .. } => (Operation::Update, Stage::Failed),
            Self::DeleteRequested { .. } => (Operation::Delete, Stage::Requested),
            Self::DeleteSucceeded { .. } => (Operation::Delete, Stage::Succeeded),
            Self::DeleteFailed { .. } => (Operation::Delete, Stage::Failed),
            Self::ResendValidationRequested { .. } => {
                (Operation::ResendValidation, Stage::Requested)
            }
            Self::ResendValidationSucceeded { .. } => {
                (Operation::ResendValidation, Stage::Succeeded)
            }
            Self::ResendValidationFailed { .. } => (Operation::ResendValidation, Stage::Failed),
        };
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decodes_update_success_with_phone_value() {
        let event: RecoveryEvent = serde_json::from_str(
            r#"{
                "type": "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS",
                "target": "phone",
                "value": {
                    "country_code": "US",
                    "country_numeric_code": "+1",
                    "number": "5551234",
                    "number_full": "+15551234"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(event.target(), Some(&Target::Phone));
        assert!(matches!(
            event,
            RecoveryEvent::UpdateSucceeded {
                value: Some(RawValue::Phone(_)),
                ..
            }
        ));
    }

    #[test]
    fn decodes_update_success_with_false_value() {
        let event: RecoveryEvent = serde_json::from_str(
            r#"{ "type": "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS", "target": "phone", "value": false }"#,
        )
        .unwrap();
        assert_eq!(
            event,
            RecoveryEvent::UpdateSucceeded {
                target: Target::Phone,
                value: Some(RawValue::Flag(false)),
            }
        );
    }

    #[test]
    fn decodes_every_flag_action_type() {
        let kinds = [
            "ACCOUNT_RECOVERY_SETTINGS_UPDATE",
            "ACCOUNT_RECOVERY_SETTINGS_UPDATE_SUCCESS",
            "ACCOUNT_RECOVERY_SETTINGS_UPDATE_FAILED",
            "ACCOUNT_RECOVERY_SETTINGS_DELETE",
            "ACCOUNT_RECOVERY_SETTINGS_DELETE_SUCCESS",
            "ACCOUNT_RECOVERY_SETTINGS_DELETE_FAILED",
            "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION",
            "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_SUCCESS",
            "ACCOUNT_RECOVERY_SETTINGS_RESEND_VALIDATION_FAILED",
        ];
        for kind in kinds {
            let json = format!(r#"{{ "type": "{kind}", "target": "email" }}"#);
            let event: RecoveryEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event.kind(), kind);
            assert_eq!(event.target(), Some(&Target::Email));
            assert!(event.operation().is_some());
        }
    }

    #[test]
    fn fetch_success_has_no_target() {
        let event: RecoveryEvent = serde_json::from_str(
            r#"{ "type": "ACCOUNT_RECOVERY_SETTINGS_FETCH_SUCCESS", "settings": { "email": false } }"#,
        )
        .unwrap();
        assert_eq!(event.target(), None);
        assert_eq!(event.operation(), None);
    }

    #[test]
    fn unknown_action_type_is_rejected() {
        let result =
            serde_json::from_str::<RecoveryEvent>(r#"{ "type": "SOMETHING_ELSE", "target": "email" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn only_requested_stage_is_in_flight() {
        assert!(Stage::Requested.in_flight());
        assert!(!Stage::Succeeded.in_flight());
        assert!(!Stage::Failed.in_flight());
    }
}
