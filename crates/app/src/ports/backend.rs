//! Backend port: the recorder's HTTP API as seen by the dashboard.

use std::future::Future;

use camdash_domain::camera::CameraStatuses;
use camdash_domain::endpoint::CameraCommand;
use camdash_domain::error::DashboardError;
use camdash_domain::health::HealthReport;

/// Read and command access to the camera recorder backend.
pub trait CameraBackend {
    /// `GET /health`
    fn fetch_health(&self) -> impl Future<Output = Result<HealthReport, DashboardError>>;

    /// `GET /cameras`
    fn fetch_cameras(&self) -> impl Future<Output = Result<CameraStatuses, DashboardError>>;

    /// `GET /camera/{camera}/{start|stop}`. The response body is ignored.
    fn send_command(
        &self,
        camera: &str,
        command: CameraCommand,
    ) -> impl Future<Output = Result<(), DashboardError>>;
}

impl<T: CameraBackend> CameraBackend for std::sync::Arc<T> {
    fn fetch_health(&self) -> impl Future<Output = Result<HealthReport, DashboardError>> {
        (**self).fetch_health()
    }

    fn fetch_cameras(&self) -> impl Future<Output = Result<CameraStatuses, DashboardError>> {
        (**self).fetch_cameras()
    }

    fn send_command(
        &self,
        camera: &str,
        command: CameraCommand,
    ) -> impl Future<Output = Result<(), DashboardError>> {
        (**self).send_command(camera, command)
    }
}
