//! Per-target in-flight flags

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::Target;

/// Whether an operation of one kind is pending for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationPhase {
    #[default]
    Idle,
    InFlight,
}

/// Mapping from target to in-flight flag.
///
/// Untouched targets are absent and read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationFlags(BTreeMap<Target, bool>);

impl OperationFlags {
    /// Empty flag map
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Copy of this map with `target` set to `value`.
    #[must_use]
    pub fn with(&self, target: &Target, value: bool) -> Self {
        let mut flags = self.0.clone();
        flags.insert(target.clone(), value);
        Self(flags)
    }

    /// Flag for `target`, `false` when never set
    pub fn get(&self, target: &Target) -> bool {
        self.0.get(target).copied().unwrap_or(false)
    }

    pub fn phase(&self, target: &Target) -> OperationPhase {
        if self.get(target) {
            OperationPhase::InFlight
        } else {
            OperationPhase::Idle
        }
    }

    /// Whether any target currently has its flag set
    pub fn any(&self) -> bool {
        self.0.values().any(|flag| *flag)
    }

    /// Targets that have been touched, with their current flag
    pub fn iter(&self) -> impl Iterator<Item = (&Target, bool)> {
        self.0.iter().map(|(target, flag)| (target, *flag))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
