//! Circular geofence definitions.

use super::coordinate::Coordinate;
use super::distance::distance;
use super::error::GeofenceError;
use super::state::ContainmentState;
use serde::{Deserialize, Serialize};

/// A circular region: a center coordinate and a radius in meters.
///
/// Definitions are replaced wholesale, never edited in place, so a sample is
/// always classified against one consistent center/radius pair. Fields are
/// private to keep the positive-radius invariant.
///
/// # Example
///
/// ```rust
/// use geofence::core::{ContainmentState, Coordinate, GeofenceDefinition};
///
/// let center = Coordinate::new(6.438912, 3.5618816).unwrap();
/// let fence = GeofenceDefinition::new(center, 500.0).unwrap();
///
/// assert_eq!(fence.classify(&center), ContainmentState::Inside);
/// assert!(GeofenceDefinition::new(center, -5.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeofenceDefinition {
    center: Coordinate,
    radius_meters: f64,
}

impl GeofenceDefinition {
    /// Create a fence, rejecting radii that are not positive and finite.
    pub fn new(center: Coordinate, radius_meters: f64) -> Result<Self, GeofenceError> {
        if !(radius_meters.is_finite() && radius_meters > 0.0) {
            return Err(GeofenceError::InvalidFence { radius_meters });
        }
        Ok(Self {
            center,
            radius_meters,
        })
    }

    /// Center of the fence.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// Radius of the fence in meters (always > 0).
    pub fn radius_meters(&self) -> f64 {
        self.radius_meters
    }

    /// A fence with the same radius around a different center.
    pub fn recentered(&self, center: Coordinate) -> Self {
        Self {
            center,
            radius_meters: self.radius_meters,
        }
    }

    /// Classify a coordinate as `Inside` or `Outside` (pure).
    ///
    /// A point exactly on the boundary is `Outside`. Never returns `Unknown`.
    pub fn classify(&self, coordinate: &Coordinate) -> ContainmentState {
        self.classify_distance(distance(coordinate, &self.center))
    }

    /// Classify an already computed distance from the center, in meters.
    pub fn classify_distance(&self, meters: f64) -> ContainmentState {
        if meters < self.radius_meters {
            ContainmentState::Inside
        } else {
            ContainmentState::Outside
        }
    }
}

// Deserialization goes through `new` so the radius invariant survives.
impl<'de> Deserialize<'de> for GeofenceDefinition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            center: Coordinate,
            radius_meters: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.center, raw.radius_meters).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::distance::EARTH_RADIUS_METERS;

    fn center() -> Coordinate {
        Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn new_rejects_non_positive_radius() {
        assert_eq!(
            GeofenceDefinition::new(center(), 0.0),
            Err(GeofenceError::InvalidFence { radius_meters: 0.0 })
        );
        assert!(GeofenceDefinition::new(center(), -5.0).is_err());
        assert!(GeofenceDefinition::new(center(), f64::NAN).is_err());
        assert!(GeofenceDefinition::new(center(), f64::INFINITY).is_err());
    }

    #[test]
    fn classify_center_is_inside() {
        let fence = GeofenceDefinition::new(center(), 1.0).unwrap();
        assert_eq!(fence.classify(&center()), ContainmentState::Inside);
    }

    #[test]
    fn classify_boundary_is_outside() {
        let point = Coordinate {
            latitude: 0.0,
            longitude: 1.0,
        };
        let radius = distance(&center(), &point);
        let fence = GeofenceDefinition::new(center(), radius).unwrap();

        assert_eq!(fence.classify(&point), ContainmentState::Outside);
    }

    #[test]
    fn classify_far_point_is_outside() {
        let fence = GeofenceDefinition::new(center(), 500.0).unwrap();
        let one_km_east = Coordinate {
            latitude: 0.0,
            longitude: (1000.0 / EARTH_RADIUS_METERS).to_degrees(),
        };
        assert_eq!(fence.classify(&one_km_east), ContainmentState::Outside);
    }

    #[test]
    fn recentered_keeps_radius() {
        let fence = GeofenceDefinition::new(center(), 250.0).unwrap();
        let moved = fence.recentered(Coordinate {
            latitude: 10.0,
            longitude: 20.0,
        });
        assert_eq!(moved.radius_meters(), 250.0);
        assert_eq!(moved.center().latitude, 10.0);
    }

    #[test]
    fn deserialize_validates_radius() {
        let json = r#"{"center":{"latitude":0.0,"longitude":0.0},"radius_meters":-1.0}"#;
        assert!(serde_json::from_str::<GeofenceDefinition>(json).is_err());

        let json = r#"{"center":{"latitude":0.0,"longitude":0.0},"radius_meters":100.0}"#;
        let fence: GeofenceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(fence.radius_meters(), 100.0);
    }
}
