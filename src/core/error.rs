//! Errors raised when constructing core geofence values.

use thiserror::Error;

/// Errors that can occur when building coordinates or fences.
///
/// Neither `distance` nor `GeofenceMonitor::evaluate` produce these; they
/// are raised only where raw values first become core types.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeofenceError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("Invalid coordinate ({latitude}, {longitude}): latitude must be within [-90, 90] and longitude within [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Radius that is zero, negative or not finite
    #[error("Invalid fence radius {radius_meters} m: radius must be a positive number of meters")]
    InvalidFence { radius_meters: f64 },
}
