//! Monitoring loop: provider readings in, notifications out.

use crate::config::NotificationConfig;
use crate::core::{
    ContainmentState, GeofenceDefinition, GeofenceMonitor, PositionSample, TransitionEvent,
};
use crate::effects::notification::{deliver, Notification, NotificationDispatcher};
use crate::effects::provider::{LocationProvider, ProviderError};
use crate::input::{validate_coordinate, InputRejected};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::effect::Effect;
use tracing::{debug, warn};

/// Counters accumulated over the lifetime of a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Samples handed to the monitor
    pub evaluated: usize,
    /// Samples refused for bad coordinates or out-of-order timestamps
    pub rejected: usize,
    /// Errors reported by the location provider
    pub provider_errors: usize,
    /// Boundary crossings detected
    pub transitions: usize,
    /// Notifications the dispatcher accepted
    pub delivered: usize,
    /// Notifications the dispatcher failed to deliver
    pub delivery_failures: usize,
}

/// Drives a [`GeofenceMonitor`] from provider readings and delivers a
/// notification for every transition it emits.
///
/// The session is the adapter boundary around the pure monitor: it refuses
/// samples that are out of range or older than the last accepted one, logs
/// provider errors without inferring anything from them, and swallows
/// delivery failures after logging them.
pub struct GeofenceSession<D: NotificationDispatcher> {
    monitor: GeofenceMonitor,
    dispatcher: D,
    notifications: NotificationConfig,
    last_timestamp: Option<DateTime<Utc>>,
    report: SessionReport,
}

impl<D: NotificationDispatcher> GeofenceSession<D> {
    /// Create a session watching `fence` in the `Unknown` state.
    pub fn new(fence: GeofenceDefinition, dispatcher: D, notifications: NotificationConfig) -> Self {
        Self {
            monitor: GeofenceMonitor::new(fence),
            dispatcher,
            notifications,
            last_timestamp: None,
            report: SessionReport::default(),
        }
    }

    pub fn monitor(&self) -> &GeofenceMonitor {
        &self.monitor
    }

    pub fn current_state(&self) -> ContainmentState {
        self.monitor.current_state()
    }

    pub fn notification_config(&self) -> &NotificationConfig {
        &self.notifications
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Replace the fence; the next sample re-initializes containment.
    pub fn set_fence(&mut self, fence: GeofenceDefinition) {
        self.monitor.set_fence(fence);
    }

    /// Move the fence center to user-entered coordinates, keeping the radius.
    ///
    /// On rejection the fence and containment state are left untouched and
    /// the returned error carries the message to show the user.
    pub fn apply_center_input(
        &mut self,
        latitude: &str,
        longitude: &str,
    ) -> Result<GeofenceDefinition, InputRejected> {
        let center = validate_coordinate(latitude, longitude).map_err(|rejected| {
            warn!(latitude, longitude, reason = %rejected, "Rejected geofence center input");
            rejected
        })?;

        let fence = self.monitor.fence().recentered(center);
        self.monitor.set_fence(fence);
        Ok(fence)
    }

    /// Handle one provider reading.
    pub async fn process_reading(
        &mut self,
        reading: Result<PositionSample, ProviderError>,
    ) -> Option<TransitionEvent> {
        match reading {
            Ok(sample) => self.process(sample).await,
            Err(error) => {
                warn!(%error, "Location provider reported an error");
                self.report.provider_errors += 1;
                None
            }
        }
    }

    /// Validate a sample, evaluate it, and deliver a notification if it
    /// caused a transition. Returns the transition, if any.
    pub async fn process(&mut self, sample: PositionSample) -> Option<TransitionEvent> {
        if !sample.coordinate.is_valid() {
            warn!(
                latitude = sample.coordinate.latitude,
                longitude = sample.coordinate.longitude,
                "Dropping sample with out-of-range coordinate"
            );
            self.report.rejected += 1;
            return None;
        }

        if let Some(last) = self.last_timestamp {
            if sample.timestamp < last {
                warn!(
                    timestamp = %sample.timestamp,
                    last = %last,
                    "Dropping out-of-order sample"
                );
                self.report.rejected += 1;
                return None;
            }
        }
        self.last_timestamp = Some(sample.timestamp);

        self.report.evaluated += 1;
        let event = self.monitor.evaluate(&sample)?;
        self.report.transitions += 1;

        self.notify(&event).await;
        Some(event)
    }

    /// Consume readings until the provider stops, then return the totals.
    pub async fn run<P: LocationProvider>(&mut self, mut provider: P) -> SessionReport {
        while let Some(reading) = provider.next_reading() {
            self.process_reading(reading).await;
        }
        self.report.clone()
    }

    async fn notify(&mut self, event: &TransitionEvent) {
        if !self.notifications.show_alert {
            debug!(kind = event.kind.name(), "Alerts disabled, notification suppressed");
            return;
        }

        let notification = Notification::from_event(event, &self.notifications);
        let id = notification.id;
        match deliver(notification).run(&self.dispatcher).await {
            Ok(()) => {
                debug!(%id, kind = event.kind.name(), "Notification delivered");
                self.report.delivered += 1;
            }
            Err(error) => {
                warn!(%id, %error, "Failed to deliver geofence notification");
                self.report.delivery_failures += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinate, TransitionKind, EARTH_RADIUS_METERS, EXITED_MESSAGE};
    use crate::effects::notification::DispatchError;
    use crate::input::MISSING_INPUT_MESSAGE;
    use chrono::Duration;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingDispatcher {
        sent: Arc<Mutex<Vec<Notification>>>,
        fail: bool,
    }

    impl RecordingDispatcher {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn bodies(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|n| n.body.clone())
                .collect()
        }
    }

    impl NotificationDispatcher for RecordingDispatcher {
        fn dispatch(&self, notification: &Notification) -> Result<(), DispatchError> {
            if self.fail {
                return Err(DispatchError::Rejected("no permission".to_string()));
            }
            self.sent.lock().unwrap().push(notification.clone());
            Ok(())
        }
    }

    fn origin() -> Coordinate {
        Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn east(meters: f64) -> Coordinate {
        Coordinate {
            latitude: 0.0,
            longitude: (meters / EARTH_RADIUS_METERS).to_degrees(),
        }
    }

    fn session(dispatcher: RecordingDispatcher) -> GeofenceSession<RecordingDispatcher> {
        GeofenceSession::new(
            GeofenceDefinition::new(origin(), 500.0).unwrap(),
            dispatcher,
            NotificationConfig::default(),
        )
    }

    /// Samples one second apart starting now.
    fn track(points: &[Coordinate]) -> Vec<Result<PositionSample, ProviderError>> {
        let start = Utc::now();
        points
            .iter()
            .enumerate()
            .map(|(i, c)| Ok(PositionSample::new(*c, start + Duration::seconds(i as i64))))
            .collect()
    }

    #[tokio::test]
    async fn run_notifies_once_per_crossing() {
        let dispatcher = RecordingDispatcher::default();
        let mut session = session(dispatcher.clone());

        let report = session
            .run(track(&[origin(), east(100.0), east(1000.0), east(2000.0)]).into_iter())
            .await;

        assert_eq!(report.evaluated, 4);
        assert_eq!(report.transitions, 1);
        assert_eq!(report.delivered, 1);
        assert_eq!(dispatcher.bodies(), vec![EXITED_MESSAGE.to_string()]);
        assert_eq!(session.current_state(), ContainmentState::Outside);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_stop_monitoring() {
        let mut session = session(RecordingDispatcher::failing());

        let report = session
            .run(track(&[origin(), east(1000.0), origin()]).into_iter())
            .await;

        assert_eq!(report.transitions, 2);
        assert_eq!(report.delivery_failures, 2);
        assert_eq!(report.delivered, 0);
        assert_eq!(session.current_state(), ContainmentState::Inside);
    }

    #[tokio::test]
    async fn provider_errors_never_cause_transitions() {
        let dispatcher = RecordingDispatcher::default();
        let mut session = session(dispatcher.clone());
        let mut readings = track(&[origin()]);
        readings.push(Err(ProviderError::PermissionDenied));
        readings.push(Err(ProviderError::Unavailable("gps off".to_string())));

        let report = session.run(readings.into_iter()).await;

        assert_eq!(report.provider_errors, 2);
        assert_eq!(report.transitions, 0);
        assert_eq!(session.current_state(), ContainmentState::Inside);
        assert!(dispatcher.bodies().is_empty());
    }

    #[tokio::test]
    async fn out_of_range_sample_is_rejected() {
        let mut session = session(RecordingDispatcher::default());
        session.process(PositionSample::now(origin())).await;

        let bad = PositionSample::now(Coordinate {
            latitude: 120.0,
            longitude: 0.0,
        });
        assert!(session.process(bad).await.is_none());
        assert_eq!(session.report().rejected, 1);
        assert_eq!(session.report().evaluated, 1);
        assert_eq!(session.current_state(), ContainmentState::Inside);
    }

    #[tokio::test]
    async fn out_of_order_sample_is_rejected() {
        let mut session = session(RecordingDispatcher::default());
        let now = Utc::now();
        session.process(PositionSample::new(origin(), now)).await;

        let stale = PositionSample::new(east(1000.0), now - Duration::seconds(5));
        assert!(session.process(stale).await.is_none());
        assert_eq!(session.report().rejected, 1);
        assert_eq!(session.current_state(), ContainmentState::Inside);

        // Equal timestamps are still in order.
        let same_time = PositionSample::new(east(1000.0), now);
        let event = session.process(same_time).await.unwrap();
        assert_eq!(event.kind, TransitionKind::Exited);
    }

    #[tokio::test]
    async fn disabled_alerts_suppress_delivery() {
        let dispatcher = RecordingDispatcher::default();
        let mut session = GeofenceSession::new(
            GeofenceDefinition::new(origin(), 500.0).unwrap(),
            dispatcher.clone(),
            NotificationConfig {
                show_alert: false,
                ..NotificationConfig::default()
            },
        );

        let report = session
            .run(track(&[origin(), east(1000.0)]).into_iter())
            .await;

        assert_eq!(report.transitions, 1);
        assert_eq!(report.delivered, 0);
        assert!(dispatcher.bodies().is_empty());
    }

    #[tokio::test]
    async fn center_input_moves_fence_and_resets_state() {
        let mut session = session(RecordingDispatcher::default());
        session.process(PositionSample::now(origin())).await;

        let fence = session.apply_center_input("10.5", "-20.25").unwrap();
        assert_eq!(fence.center().latitude, 10.5);
        assert_eq!(fence.center().longitude, -20.25);
        assert_eq!(fence.radius_meters(), 500.0);
        assert_eq!(session.current_state(), ContainmentState::Unknown);
    }

    #[tokio::test]
    async fn rejected_center_input_leaves_fence_alone() {
        let mut session = session(RecordingDispatcher::default());
        session.process(PositionSample::now(origin())).await;
        let before = *session.monitor().fence();

        let rejected = session.apply_center_input("", "3.5").unwrap_err();
        assert_eq!(rejected.message, MISSING_INPUT_MESSAGE);
        assert!(session.apply_center_input("91", "0").is_err());

        assert_eq!(*session.monitor().fence(), before);
        assert_eq!(session.current_state(), ContainmentState::Inside);
    }
}
