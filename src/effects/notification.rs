//! Notifications derived from transition events, and the effect that delivers them.

use crate::config::NotificationConfig;
use crate::core::{TransitionEvent, TransitionKind};
use serde::{Deserialize, Serialize};
use stillwater::effect::Effect;
use stillwater::prelude::*;
use thiserror::Error;
use uuid::Uuid;

/// Errors a dispatcher can report. Delivery is best effort, so these are
/// logged by the session and never stop monitoring.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("Notification rejected: {0}")]
    Rejected(String),

    #[error("Notification service unavailable: {0}")]
    Unavailable(String),
}

/// A user-facing alert for one boundary crossing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for this notification
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: TransitionKind,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Notification {
    /// Build the notification for `event` under the given presentation settings.
    pub fn from_event(event: &TransitionEvent, config: &NotificationConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: config.title.clone(),
            body: event.message().to_string(),
            kind: event.kind,
            play_sound: config.play_sound,
            set_badge: config.set_badge,
        }
    }
}

/// Something that can show a notification to the user.
///
/// Implementations are used as the effect environment, so they must be
/// cheap to clone and shareable across threads.
pub trait NotificationDispatcher: Clone + Send + Sync + 'static {
    fn dispatch(&self, notification: &Notification) -> Result<(), DispatchError>;
}

/// Effect that hands `notification` to the dispatcher environment.
pub fn deliver<D>(
    notification: Notification,
) -> impl Effect<Output = (), Error = DispatchError, Env = D>
where
    D: NotificationDispatcher,
{
    from_fn(move |dispatcher: &D| dispatcher.dispatch(&notification))
}
