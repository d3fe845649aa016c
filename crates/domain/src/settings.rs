//! Client settings: what the browser dashboard needs to know at startup.
//!
//! The server publishes these as JSON so the API origin is injected rather
//! than compiled into the client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::endpoint::ApiEndpoints;
use crate::error::ValidationError;

/// Default period between two periodic refreshes.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 5000;

/// Default delay between a start/stop command and its follow-up refresh.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Where the dashboard reads camera statuses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CameraSource {
    /// Structured statuses from `GET /cameras` (canonical).
    #[default]
    #[serde(alias = "cameras_endpoint")]
    CamerasEndpoint,
    /// The `cameras` field embedded in `GET /health`.
    #[serde(alias = "health_report")]
    HealthReport,
}

/// Settings consumed by the dashboard client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardSettings {
    /// Absolute API origin, or empty for same-origin requests.
    pub api_base_url: String,
    pub refresh_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub camera_source: CameraSource,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            camera_source: CameraSource::default(),
        }
    }
}

impl DashboardSettings {
    /// Check invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroRefreshInterval`] or
    /// [`ValidationError::InvalidBaseUrl`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refresh_interval_ms == 0 {
            return Err(ValidationError::ZeroRefreshInterval);
        }
        self.endpoints().map(|_| ())
    }

    /// Endpoint builder for the configured origin.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBaseUrl`] when `api_base_url` is not
    /// blank and not an absolute http(s) URL.
    pub fn endpoints(&self) -> Result<ApiEndpoints, ValidationError> {
        ApiEndpoints::new(&self.api_base_url)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
