//! Geofence: a circular geofence monitor.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! decides containment and detects boundary crossings without side effects;
//! the shell reads samples from a location provider and delivers
//! notifications through a pluggable dispatcher.
//!
//! # Core Concepts
//!
//! - **Distance**: haversine great-circle distance on a 6,378,137 m sphere
//! - **Fence**: a center coordinate and a positive radius in meters
//! - **Monitor**: `Unknown` → `Inside`/`Outside` state machine that emits an
//!   event only when a known state flips to the other known state
//! - **Session**: validation, ordering and notification around the monitor
//!
//! # Example
//!
//! ```rust
//! use geofence::core::{
//!     Coordinate, GeofenceDefinition, GeofenceMonitor, PositionSample, TransitionKind,
//! };
//!
//! let center = Coordinate::new(6.438912, 3.5618816).unwrap();
//! let fence = GeofenceDefinition::new(center, 500.0).unwrap();
//! let mut monitor = GeofenceMonitor::new(fence);
//!
//! // The first sample only initializes containment.
//! assert!(monitor.evaluate(&PositionSample::now(center)).is_none());
//!
//! let away = Coordinate::new(6.448, 3.5618816).unwrap();
//! let event = monitor.evaluate(&PositionSample::now(away)).unwrap();
//! assert_eq!(event.kind, TransitionKind::Exited);
//! assert_eq!(event.message(), "You have exited the area!");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod input;

// Re-export commonly used types
pub use crate::config::GeofenceConfig;
pub use crate::core::{
    distance, ContainmentState, Coordinate, GeofenceDefinition, GeofenceError, GeofenceMonitor,
    PositionSample, TransitionEvent, TransitionKind,
};
pub use crate::effects::{GeofenceSession, NotificationDispatcher};
