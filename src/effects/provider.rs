//! Source of position samples.

use crate::core::PositionSample;
use thiserror::Error;

/// Failures reported by a location provider.
///
/// These never reach the monitor. While the provider is failing the monitor
/// simply sees no samples, and no transition is inferred from the silence.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("Permission to access location was denied")]
    PermissionDenied,

    #[error("Location provider unavailable: {0}")]
    Unavailable(String),
}

/// A lazy, non-restartable stream of position readings.
///
/// Readings are expected in non-decreasing timestamp order. `None` means
/// the provider has stopped for good.
pub trait LocationProvider {
    fn next_reading(&mut self) -> Option<Result<PositionSample, ProviderError>>;
}

impl<I> LocationProvider for I
where
    I: Iterator<Item = Result<PositionSample, ProviderError>>,
{
    fn next_reading(&mut self) -> Option<Result<PositionSample, ProviderError>> {
        self.next()
    }
}
