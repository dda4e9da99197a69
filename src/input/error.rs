//! Input validation errors.

use std::fmt;
use thiserror::Error;

/// Prompt shown when either coordinate field is left blank.
pub const MISSING_INPUT_MESSAGE: &str = "Please enter valid latitude and longitude.";

/// Which user-facing field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Latitude,
    Longitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

/// A single problem found in raw coordinate input.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("{field} is required")]
    Empty { field: Field },

    #[error("{field} '{value}' is not a number")]
    NotANumber { field: Field, value: String },

    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Raw input rejected at the validation boundary.
///
/// Carries every problem found, plus a message suitable for showing the user.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct InputRejected {
    pub message: String,
    pub errors: Vec<InputError>,
}

impl InputRejected {
    pub(crate) fn new(errors: Vec<InputError>) -> Self {
        let message = if errors
            .iter()
            .any(|e| matches!(e, InputError::Empty { .. }))
        {
            MISSING_INPUT_MESSAGE.to_string()
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };
        Self { message, errors }
    }
}
