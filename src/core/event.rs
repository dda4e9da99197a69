//! Position samples and the transition events they can trigger.

use super::coordinate::Coordinate;
use super::fence::GeofenceDefinition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown when the tracked position enters the fence.
pub const ENTERED_MESSAGE: &str = "You have entered the area!";
/// Message shown when the tracked position leaves the fence.
pub const EXITED_MESSAGE: &str = "You have exited the area!";

/// A timestamped position produced by a location provider.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Where the device was
    pub coordinate: Coordinate,
    /// When the position was observed
    pub timestamp: DateTime<Utc>,
}

impl PositionSample {
    pub fn new(coordinate: Coordinate, timestamp: DateTime<Utc>) -> Self {
        Self {
            coordinate,
            timestamp,
        }
    }

    /// Sample at `coordinate` stamped with the current wall time.
    pub fn now(coordinate: Coordinate) -> Self {
        Self::new(coordinate, Utc::now())
    }
}

/// Direction of a boundary crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    Entered,
    Exited,
}

impl TransitionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entered => "Entered",
            Self::Exited => "Exited",
        }
    }

    /// Human-readable notification body for this crossing.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Entered => ENTERED_MESSAGE,
            Self::Exited => EXITED_MESSAGE,
        }
    }
}

/// Record of a single boundary crossing.
///
/// Carries the sample that triggered it and a snapshot of the fence it was
/// evaluated against, so a later fence change cannot alter its meaning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Which way the boundary was crossed
    pub kind: TransitionKind,
    /// The fence in effect when the crossing was detected
    pub fence: GeofenceDefinition,
    /// The sample that caused the crossing
    pub sample: PositionSample,
}

impl TransitionEvent {
    /// Human-readable notification body for this event.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
