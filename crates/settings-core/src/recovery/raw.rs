//! Raw account recovery payloads as returned by the server
//!
//! The settings endpoint mixes types: `email` is a string or `false`, `phone`
//! is an object or `false`. These shapes are decoded as-is and turned into the
//! client model by [`super::normalize`].

use serde::{Deserialize, Serialize};

/// Phone object in server field naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPhone {
    pub country_code: String,
    pub country_numeric_code: String,
    pub number: String,
    pub number_full: String,
}

/// A raw field value: a phone object, a string, or a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Phone(RawPhone),
    Text(String),
    Flag(bool),
}

/// Settings payload of a successful fetch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSettings {
    #[serde(default)]
    pub email: Option<RawValue>,
    #[serde(default)]
    pub email_validated: bool,
    #[serde(default)]
    pub phone: Option<RawValue>,
    #[serde(default)]
    pub phone_validated: bool,
}
