//! Great-circle distance between coordinates.

use super::coordinate::Coordinate;

/// Radius of the sphere used to approximate Earth, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Haversine distance between two coordinates, in meters.
///
/// Pure and symmetric. Inputs are expected to satisfy the coordinate range
/// invariant; this function does not validate them.
///
/// # Example
///
/// ```rust
/// use geofence::core::{distance, Coordinate};
///
/// let a = Coordinate { latitude: 0.0, longitude: 0.0 };
/// let b = Coordinate { latitude: 0.0, longitude: 1.0 };
///
/// let meters = distance(&a, &b);
/// assert!((meters - 111_319.49).abs() < 0.01);
/// assert_eq!(distance(&a, &a), 0.0);
/// ```
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}
