//! Normalized account recovery models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recovery channel an operation applies to.
///
/// Identifiers other than `email` and `phone` are kept as `Other` so that the
/// flag maps can still track them while data updates ignore them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Target {
    /// Recovery email address
    Email,
    /// Recovery SMS number
    Phone,
    /// Any identifier the reducer does not know about
    Other(String),
}

impl Target {
    /// Wire identifier of this target
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        match value.as_str() {
            "email" => Self::Email,
            "phone" => Self::Phone,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Target> for String {
    fn from(target: Target) -> Self {
        match target {
            Target::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Target {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully populated recovery phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    /// ISO country code, e.g. `US`
    pub country_code: String,
    /// Dialing prefix, e.g. `+1`
    pub country_numeric_code: String,
    /// Number without the dialing prefix
    pub number: String,
    /// Number including the dialing prefix
    pub number_full: String,
}

/// Client-side account recovery settings
///
/// An empty `email` means no recovery email is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverySettings {
    pub email: String,
    pub email_validated: bool,
    pub phone: Option<PhoneNumber>,
    pub phone_validated: bool,
}

impl RecoverySettings {
    /// Copy of these settings with `email` replaced.
    #[must_use]
    pub fn with_email(&self, email: String) -> Self {
        Self {
            email,
            email_validated: self.email_validated,
            phone: self.phone.clone(),
            phone_validated: self.phone_validated,
        }
    }

    /// Copy of these settings with `phone` replaced.
    #[must_use]
    pub fn with_phone(&self, phone: Option<PhoneNumber>) -> Self {
        Self {
            email: self.email.clone(),
            email_validated: self.email_validated,
            phone,
            phone_validated: self.phone_validated,
        }
    }
}
