//! Transition state machine for a single geofence.

use super::coordinate::Coordinate;
use super::distance::distance;
use super::error::GeofenceError;
use super::event::{PositionSample, TransitionEvent, TransitionKind};
use super::fence::GeofenceDefinition;
use super::state::ContainmentState;
use tracing::{debug, info};

/// Tracks containment of a moving position within one fence.
///
/// Samples must be fed to [`evaluate`](Self::evaluate) one at a time in
/// non-decreasing timestamp order. The monitor does no locking; callers
/// with several sample sources serialize them first.
///
/// # Example
///
/// ```rust
/// use geofence::core::{
///     ContainmentState, Coordinate, GeofenceDefinition, GeofenceMonitor, PositionSample,
///     TransitionKind,
/// };
///
/// let center = Coordinate::new(6.438912, 3.5618816).unwrap();
/// let away = Coordinate::new(6.45, 3.5618816).unwrap();
/// let mut monitor = GeofenceMonitor::new(GeofenceDefinition::new(center, 500.0).unwrap());
///
/// // First sample only establishes the state.
/// assert!(monitor.evaluate(&PositionSample::now(center)).is_none());
/// assert_eq!(monitor.current_state(), ContainmentState::Inside);
///
/// let event = monitor.evaluate(&PositionSample::now(away)).unwrap();
/// assert_eq!(event.kind, TransitionKind::Exited);
/// ```
#[derive(Clone, Debug)]
pub struct GeofenceMonitor {
    fence: GeofenceDefinition,
    state: ContainmentState,
}

impl GeofenceMonitor {
    /// Create a monitor for `fence` in the `Unknown` state.
    pub fn new(fence: GeofenceDefinition) -> Self {
        Self {
            fence,
            state: ContainmentState::Unknown,
        }
    }

    /// Get current containment state (pure)
    pub fn current_state(&self) -> ContainmentState {
        self.state
    }

    /// Get the active fence (pure)
    pub fn fence(&self) -> &GeofenceDefinition {
        &self.fence
    }

    /// Replace the active fence and reset the state to `Unknown`.
    ///
    /// The state resets even when the new fence equals the old one. Takes
    /// effect for the next call to `evaluate`.
    pub fn set_fence(&mut self, fence: GeofenceDefinition) {
        debug!(
            latitude = fence.center().latitude,
            longitude = fence.center().longitude,
            radius_meters = fence.radius_meters(),
            previous_state = %self.state,
            "Geofence replaced, containment reset"
        );
        self.fence = fence;
        self.state = ContainmentState::Unknown;
    }

    /// Build a fence from raw parts and install it with [`set_fence`](Self::set_fence).
    ///
    /// A non-positive radius fails with `InvalidFence` before anything is
    /// touched, leaving the previous fence and state in place.
    pub fn reconfigure(
        &mut self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<(), GeofenceError> {
        let fence = GeofenceDefinition::new(center, radius_meters)?;
        self.set_fence(fence);
        Ok(())
    }

    /// Evaluate one position sample against the active fence.
    ///
    /// Returns an event only when the state moves between `Inside` and
    /// `Outside`. The first sample after construction or `set_fence` only
    /// initializes the state and never produces an event.
    pub fn evaluate(&mut self, sample: &PositionSample) -> Option<TransitionEvent> {
        let meters = distance(&sample.coordinate, &self.fence.center());
        let containment = self.fence.classify_distance(meters);

        debug!(
            distance_meters = meters,
            radius_meters = self.fence.radius_meters(),
            state = %self.state,
            containment = %containment,
            "Evaluated position sample"
        );

        if !self.state.is_known() {
            self.state = containment;
            return None;
        }

        if containment == self.state {
            return None;
        }

        self.state = containment;
        let kind = match containment {
            ContainmentState::Inside => TransitionKind::Entered,
            _ => TransitionKind::Exited,
        };
        info!(
            kind = kind.name(),
            distance_meters = meters,
            timestamp = %sample.timestamp,
            "Geofence boundary crossed"
        );

        Some(TransitionEvent {
            kind,
            fence: self.fence,
            sample: *sample,
        })
    }
}
