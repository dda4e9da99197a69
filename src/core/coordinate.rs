//! Geographic coordinates in decimal degrees.

use super::error::GeofenceError;
use serde::{Deserialize, Serialize};

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;
/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;
/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// An immutable latitude/longitude pair in degrees.
///
/// Fields are public so that already-validated values (for example from a
/// location provider) can be built directly. Use [`Coordinate::new`] when
/// the values come from untrusted input.
///
/// # Example
///
/// ```rust
/// use geofence::core::Coordinate;
///
/// let lagos = Coordinate::new(6.438912, 3.5618816).unwrap();
/// assert!(lagos.is_valid());
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeofenceError> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        if !coordinate.is_valid() {
            return Err(GeofenceError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(coordinate)
    }

    /// Check the latitude/longitude range invariant (pure).
    ///
    /// NaN never satisfies a range check, so it is rejected here too.
    pub fn is_valid(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.latitude)
            && (MIN_LON..=MAX_LON).contains(&self.longitude)
    }
}
