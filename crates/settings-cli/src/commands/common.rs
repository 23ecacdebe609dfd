use std::path::Path;

use serde::de::DeserializeOwned;
use settings_core::recovery::{OperationFlags, PhoneNumber, RecoveryState};
use settings_core::util::compact_text;

use crate::error::CliError;

pub fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}

pub fn decode_input<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T, CliError> {
    serde_json::from_str(raw).map_err(|error| CliError::InvalidInput {
        path: path.display().to_string(),
        message: compact_text(&error.to_string()),
    })
}

pub fn format_phone(phone: &PhoneNumber) -> String {
    format!(
        "{} ({} {})",
        phone.number_full, phone.country_code, phone.country_numeric_code
    )
}

fn validated_label(validated: bool) -> &'static str {
    if validated {
        "validated"
    } else {
        "not validated"
    }
}

fn format_flags(label: &str, flags: &OperationFlags) -> String {
    let active = flags
        .iter()
        .filter(|(_, in_flight)| *in_flight)
        .map(|(target, _)| target.to_string())
        .collect::<Vec<_>>();
    if active.is_empty() {
        format!("{label}: -")
    } else {
        format!("{label}: {}", active.join(", "))
    }
}

pub fn format_state_lines(state: &RecoveryState) -> Vec<String> {
    let mut lines = Vec::new();

    match &state.data {
        None => lines.push("settings: not fetched".to_string()),
        Some(data) => {
            if data.email.is_empty() {
                lines.push("email: (none)".to_string());
            } else {
                lines.push(format!(
                    "email: {} [{}]",
                    data.email,
                    validated_label(data.email_validated)
                ));
            }
            match &data.phone {
                Some(phone) => lines.push(format!(
                    "phone: {} [{}]",
                    format_phone(phone),
                    validated_label(data.phone_validated)
                )),
                None => lines.push("phone: (none)".to_string()),
            }
        }
    }

    lines.push(format_flags("updating", &state.is_updating));
    lines.push(format_flags("deleting", &state.is_deleting));
    lines.push(format_flags("resending", &state.is_resending));
    lines
}
