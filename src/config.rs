//! Configuration constants and the serde-backed configuration document.

use crate::core::{Coordinate, GeofenceDefinition, GeofenceError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latitude of the fence center used when nothing else is configured.
pub const DEFAULT_LATITUDE: f64 = 6.438912;
/// Longitude of the fence center used when nothing else is configured.
pub const DEFAULT_LONGITUDE: f64 = 3.5618816;
/// Fence radius used when nothing else is configured, in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 500.0;
/// Title attached to every geofence notification.
pub const DEFAULT_NOTIFICATION_TITLE: &str = "Geofence Alert";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configured fence is invalid: {0}")]
    InvalidDefinition(#[from] GeofenceError),
}

/// How notifications are presented.
///
/// Constructed once at startup and handed to whatever delivers
/// notifications; the monitor never reads it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub title: String,
    /// When false, transitions are still detected but nothing is delivered
    pub show_alert: bool,
    pub play_sound: bool,
    pub set_badge: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_NOTIFICATION_TITLE.to_string(),
            show_alert: true,
            play_sound: false,
            set_badge: false,
        }
    }
}

/// Raw fence values as they appear in configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenceConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
}

impl Default for FenceConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            radius_meters: DEFAULT_RADIUS_METERS,
        }
    }
}

/// Top-level configuration document.
///
/// Missing sections and fields fall back to the defaults above.
///
/// # Example
///
/// ```rust
/// use geofence::config::GeofenceConfig;
///
/// let config = GeofenceConfig::from_json_str(r#"{ "fence": { "radius_meters": 250.0 } }"#).unwrap();
/// let fence = config.fence_definition().unwrap();
///
/// assert_eq!(fence.radius_meters(), 250.0);
/// assert_eq!(fence.center().latitude, 6.438912);
/// assert_eq!(config.notification.title, "Geofence Alert");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeofenceConfig {
    pub fence: FenceConfig,
    pub notification: NotificationConfig,
}

impl GeofenceConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configured fence into a core definition.
    pub fn fence_definition(&self) -> Result<GeofenceDefinition, ConfigError> {
        let center = Coordinate::new(self.fence.latitude, self.fence.longitude)?;
        Ok(GeofenceDefinition::new(center, self.fence.radius_meters)?)
    }
}
