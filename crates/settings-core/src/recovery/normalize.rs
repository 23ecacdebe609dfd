//! Conversion of raw server fields into the client model

use super::model::PhoneNumber;
use super::raw::{RawPhone, RawValue};

/// Normalize a raw phone field.
///
/// Anything other than a phone object (missing, `null`, `false`, a string)
/// means no phone is set.
pub fn convert_phone_response(raw: Option<&RawValue>) -> Option<PhoneNumber> {
    match raw {
        Some(RawValue::Phone(phone)) => Some(PhoneNumber::from(phone)),
        _ => None,
    }
}

/// Normalize a raw email field.
///
/// Falsy values (missing, `null`, `false`, `""`) become the empty string.
pub fn convert_email_response(raw: Option<&RawValue>) -> String {
    match raw {
        Some(RawValue::Text(email)) => email.clone(),
        _ => String::new(),
    }
}

impl From<&RawPhone> for PhoneNumber {
    fn from(raw: &RawPhone) -> Self {
        Self {
            country_code: raw.country_code.clone(),
            country_numeric_code: raw.country_numeric_code.clone(),
            number: raw.number.clone(),
            number_full: raw.number_full.clone(),
        }
    }
}
