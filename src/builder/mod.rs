//! Builder API for assembling a monitoring session.
//!
//! A session needs a fence and a dispatcher; notification settings default
//! to [`NotificationConfig::default`]. Starting from a [`GeofenceConfig`]
//! fills in both the fence and the notification settings.

pub mod error;

pub use error::BuildError;

use crate::config::{ConfigError, GeofenceConfig, NotificationConfig};
use crate::core::GeofenceDefinition;
use crate::effects::{GeofenceSession, NotificationDispatcher};

/// Builder for constructing sessions with a fluent API.
///
/// # Example
///
/// ```
/// use geofence::builder::SessionBuilder;
/// use geofence::config::GeofenceConfig;
/// use geofence::core::ContainmentState;
/// use geofence::effects::{DispatchError, Notification, NotificationDispatcher};
///
/// #[derive(Clone)]
/// struct Console;
///
/// impl NotificationDispatcher for Console {
///     fn dispatch(&self, n: &Notification) -> Result<(), DispatchError> {
///         println!("{}: {}", n.title, n.body);
///         Ok(())
///     }
/// }
///
/// let session = SessionBuilder::from_config(&GeofenceConfig::default())
///     .unwrap()
///     .dispatcher(Console)
///     .build()
///     .unwrap();
///
/// assert_eq!(session.current_state(), ContainmentState::Unknown);
/// assert_eq!(session.monitor().fence().radius_meters(), 500.0);
/// ```
pub struct SessionBuilder<D: NotificationDispatcher> {
    fence: Option<GeofenceDefinition>,
    dispatcher: Option<D>,
    notifications: NotificationConfig,
}

impl<D: NotificationDispatcher> SessionBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            fence: None,
            dispatcher: None,
            notifications: NotificationConfig::default(),
        }
    }

    /// Start from a configuration document, validating its fence.
    pub fn from_config(config: &GeofenceConfig) -> Result<Self, ConfigError> {
        let fence = config.fence_definition()?;
        Ok(Self::new()
            .fence(fence)
            .notifications(config.notification.clone()))
    }

    /// Set the fence to monitor (required).
    pub fn fence(mut self, fence: GeofenceDefinition) -> Self {
        self.fence = Some(fence);
        self
    }

    /// Set the notification dispatcher (required).
    pub fn dispatcher(mut self, dispatcher: D) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Override notification presentation settings (optional).
    pub fn notifications(mut self, notifications: NotificationConfig) -> Self {
        self.notifications = notifications;
        self
    }

    /// Build the session.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<GeofenceSession<D>, BuildError> {
        let fence = self.fence.ok_or(BuildError::MissingFence)?;
        let dispatcher = self.dispatcher.ok_or(BuildError::MissingDispatcher)?;

        Ok(GeofenceSession::new(fence, dispatcher, self.notifications))
    }
}

impl<D: NotificationDispatcher> Default for SessionBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
