//! The imperative shell around the pure monitor.
//!
//! Everything that touches the outside world lives here: reading samples
//! from a location provider, turning transitions into notifications, and
//! handing those to a dispatcher.
//!
//! # Key Concepts
//!
//! - **Provider**: any iterator of `Result<PositionSample, ProviderError>`
//! - **Dispatcher**: the environment the delivery effect runs against
//! - **Session**: validates readings, runs the monitor, delivers alerts
//!
//! Delivery is a Stillwater effect (`deliver`) run against the dispatcher,
//! so tests swap in a recording dispatcher without touching the session.

mod notification;
mod provider;
mod session;

pub use notification::{deliver, DispatchError, Notification, NotificationDispatcher};
pub use provider::{LocationProvider, ProviderError};
pub use session::{GeofenceSession, SessionReport};
