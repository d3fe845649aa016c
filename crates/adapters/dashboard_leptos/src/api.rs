//! HTTP client wrapping `gloo-net` for calls to the recorder backend.

use std::future::Future;

use camdash_app::ports::CameraBackend;
use camdash_domain::camera::CameraStatuses;
use camdash_domain::endpoint::{ApiEndpoints, CameraCommand};
use camdash_domain::error::DashboardError;
use camdash_domain::health::HealthReport;
use camdash_domain::settings::DashboardSettings;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Where the hosting server publishes the dashboard settings.
pub const SETTINGS_PATH: &str = "/dashboard-config.json";

/// Backend client issuing browser `fetch` requests.
#[derive(Debug, Clone)]
pub struct GlooBackend {
    endpoints: ApiEndpoints,
}

impl GlooBackend {
    #[must_use]
    pub fn new(endpoints: ApiEndpoints) -> Self {
        Self { endpoints }
    }
}

/// Issue a GET and reject non-2xx answers.
async fn send(url: &str) -> Result<Response, DashboardError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|err| DashboardError::Network {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
    if resp.ok() {
        return Ok(resp);
    }
    Err(DashboardError::Status {
        status: resp.status(),
        url: url.to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, DashboardError> {
    let resp = send(&url).await?;
    resp.json::<T>()
        .await
        .map_err(|err| DashboardError::Decode {
            url,
            reason: err.to_string(),
        })
}

impl CameraBackend for GlooBackend {
    fn fetch_health(&self) -> impl Future<Output = Result<HealthReport, DashboardError>> {
        get_json(self.endpoints.health())
    }

    fn fetch_cameras(&self) -> impl Future<Output = Result<CameraStatuses, DashboardError>> {
        get_json(self.endpoints.cameras())
    }

    fn send_command(
        &self,
        camera: &str,
        command: CameraCommand,
    ) -> impl Future<Output = Result<(), DashboardError>> {
        let url = self.endpoints.command(camera, command);
        async move { send(&url).await.map(drop) }
    }
}

/// Fetch the settings published by the hosting server.
///
/// # Errors
///
/// Returns an error when the document is unreachable, malformed, or carries
/// values the domain rejects.
pub async fn fetch_settings() -> Result<DashboardSettings, DashboardError> {
    let settings: DashboardSettings = get_json(SETTINGS_PATH.to_string()).await?;
    settings.validate()?;
    Ok(settings)
}
