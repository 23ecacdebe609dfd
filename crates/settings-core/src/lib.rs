//! settings-core - Core library for site settings
//!
//! This crate contains the account recovery settings state slice (models,
//! normalization, reducer, selectors and store) and the model behind the
//! "Writing" site settings form.

pub mod error;
pub mod recovery;
pub mod util;
pub mod writing;

pub use error::{Error, Result};
pub use recovery::{
    PhoneNumber, RecoveryEvent, RecoverySettings, RecoveryState, RecoveryStore, Target,
};
pub use writing::{WritingCapabilities, WritingForm, WritingSettings};
