//! Validation boundary for raw coordinate input.
//!
//! Text typed by a user is parsed here before anything reaches the core.
//! Checks use Stillwater's `Validation` so that every problem is reported
//! at once: a blank latitude and an out-of-range longitude come back
//! together instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use geofence::input::{validate_coordinate, InputError};
//!
//! let center = validate_coordinate("6.438912", " 3.5618816 ").unwrap();
//! assert_eq!(center.latitude, 6.438912);
//!
//! let rejected = validate_coordinate("north", "200").unwrap_err();
//! assert_eq!(rejected.errors.len(), 2);
//! assert!(rejected
//!     .errors
//!     .iter()
//!     .any(|e| matches!(e, InputError::OutOfRange { .. })));
//! ```

mod error;

pub use error::{Field, InputError, InputRejected, MISSING_INPUT_MESSAGE};

use crate::core::{Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse one numeric field and check it against `[min, max]`.
pub fn parse_field(
    field: Field,
    text: &str,
    min: f64,
    max: f64,
) -> Validation<f64, NonEmptyVec<InputError>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Validation::fail(InputError::Empty { field });
    }

    let value = match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Validation::fail(InputError::NotANumber {
                field,
                value: trimmed.to_string(),
            })
        }
    };

    if !(min..=max).contains(&value) {
        return Validation::fail(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Validation::success(value)
}

/// Parse a latitude/longitude pair, accumulating ALL problems.
pub fn parse_coordinate(
    latitude: &str,
    longitude: &str,
) -> Validation<Coordinate, NonEmptyVec<InputError>> {
    let checks = vec![
        parse_field(Field::Latitude, latitude, MIN_LAT, MAX_LAT),
        parse_field(Field::Longitude, longitude, MIN_LON, MAX_LON),
    ];

    Validation::all_vec(checks).map(|values| Coordinate {
        latitude: values[0],
        longitude: values[1],
    })
}

/// Parse a latitude/longitude pair into a `Result` for callers that only
/// need a yes/no answer and a message to show.
pub fn validate_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate, InputRejected> {
    match parse_coordinate(latitude, longitude) {
        Validation::Success(coordinate) => Ok(coordinate),
        Validation::Failure(errors) => Err(InputRejected::new(errors.iter().cloned().collect())),
    }
}
