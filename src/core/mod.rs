//! Core geofence types and logic.
//!
//! This module contains the pure core of the monitor:
//! - Coordinates and great-circle distance
//! - Circular fence definitions
//! - The containment state machine and the events it emits
//!
//! Nothing here performs I/O; the only side effect is `tracing` output.

mod coordinate;
mod distance;
mod error;
mod event;
mod fence;
mod monitor;
mod state;

pub use coordinate::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
pub use distance::{distance, EARTH_RADIUS_METERS};
pub use error::GeofenceError;
pub use event::{PositionSample, TransitionEvent, TransitionKind, ENTERED_MESSAGE, EXITED_MESSAGE};
pub use fence::GeofenceDefinition;
pub use monitor::GeofenceMonitor;
pub use state::ContainmentState;
