//! Containment state of the tracked position relative to the active fence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the tracked position is inside the active geofence.
///
/// `Unknown` holds only until the first sample has been evaluated against
/// the current fence. It is never the target of a transition.
///
/// # Example
///
/// ```rust
/// use geofence::core::ContainmentState;
///
/// let state = ContainmentState::default();
/// assert_eq!(state, ContainmentState::Unknown);
/// assert!(!state.is_known());
/// assert!(ContainmentState::Inside.is_known());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainmentState {
    #[default]
    Unknown,
    Inside,
    Outside,
}

impl ContainmentState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Inside => "Inside",
            Self::Outside => "Outside",
        }
    }

    /// Check if the state has been established by at least one sample.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ContainmentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
