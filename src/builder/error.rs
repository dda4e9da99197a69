//! Build errors for the session builder.

use thiserror::Error;

/// Errors that can occur when building a monitoring session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Geofence not specified. Call .fence(definition) or start from a config")]
    MissingFence,

    #[error("Notification dispatcher not specified. Call .dispatcher(dispatcher) before .build()")]
    MissingDispatcher,
}
