//! Dashboard service: the refresh cycle, camera commands, and polling.
//!
//! One refresh fetches the health report, replaces the disk gauge, then
//! fetches camera statuses and replaces the camera grid. The two fetches are
//! sequential. Refreshes triggered by the periodic loop and by camera commands
//! are independent and may overlap; every refresh takes a cycle number when it
//! starts, and a region result is dropped if a newer cycle already drew that
//! region.

use std::pin::pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use camdash_domain::endpoint::{ApiEndpoints, CameraCommand};
use camdash_domain::error::{DashboardError, ValidationError};
use camdash_domain::settings::{CameraSource, DashboardSettings};
use camdash_domain::view::{CameraGrid, DiskGauge};
use futures_util::future::{Either, select};

use crate::ports::{CameraBackend, DashboardView, Timer};

/// A region model together with the refresh cycle that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<T> {
    pub cycle: u64,
    pub value: T,
}

/// What the view currently shows, as last applied by this service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedState {
    pub disk: Option<Applied<DiskGauge>>,
    pub cameras: Option<Applied<CameraGrid>>,
}

/// Result of a refresh cycle that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Both regions were replaced.
    Rendered,
    /// At least one region was skipped because a newer cycle already drew it.
    Superseded,
    /// The cycle failed; the failing region and anything after it kept the previous render.
    Failed,
}

/// Application service driving the dashboard.
pub struct DashboardService<B, V, T> {
    backend: B,
    view: V,
    timer: T,
    settings: DashboardSettings,
    endpoints: ApiEndpoints,
    cycles: AtomicU64,
    rendered: Mutex<RenderedState>,
}

impl<B, V, T> DashboardService<B, V, T>
where
    B: CameraBackend,
    V: DashboardView,
    T: Timer,
{
    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `settings` are invalid.
    pub fn new(
        backend: B,
        view: V,
        timer: T,
        settings: DashboardSettings,
    ) -> Result<Self, ValidationError> {
        settings.validate()?;
        let endpoints = settings.endpoints()?;
        Ok(Self {
            backend,
            view,
            timer,
            settings,
            endpoints,
            cycles: AtomicU64::new(0),
            rendered: Mutex::new(RenderedState::default()),
        })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn endpoints(&self) -> &ApiEndpoints {
        &self.endpoints
    }

    /// Snapshot of what has been applied to the view so far.
    pub fn rendered(&self) -> RenderedState {
        self.lock_rendered().clone()
    }

    /// Run one refresh cycle, logging and swallowing any failure.
    pub async fn refresh(&self) -> RefreshOutcome {
        let cycle = self.next_cycle();
        match self.run_cycle(cycle).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(cycle, error = %err, "dashboard refresh failed; keeping previous render");
                RefreshOutcome::Failed
            }
        }
    }

    /// Run one refresh cycle and return its error, if any.
    ///
    /// # Errors
    ///
    /// Returns the first fetch, decode, or view error of the cycle.
    pub async fn try_refresh(&self) -> Result<RefreshOutcome, DashboardError> {
        let cycle = self.next_cycle();
        self.run_cycle(cycle).await
    }

    /// Ask the backend to start recording `camera`, then refresh once after
    /// the settle delay.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyCameraName`] without sending anything,
    /// or the command's own request error. The follow-up refresh runs either way.
    #[tracing::instrument(skip(self))]
    pub async fn start_camera(&self, camera: &str) -> Result<(), DashboardError> {
        self.run_command(camera, CameraCommand::Start).await
    }

    /// Ask the backend to stop recording `camera`, then refresh once after
    /// the settle delay.
    ///
    /// # Errors
    ///
    /// Same as [`start_camera`](Self::start_camera).
    #[tracing::instrument(skip(self))]
    pub async fn stop_camera(&self, camera: &str) -> Result<(), DashboardError> {
        self.run_command(camera, CameraCommand::Stop).await
    }

    /// Refresh now, then once per refresh interval, forever.
    ///
    /// Ticks are fixed-rate. A cycle still pending when the next tick is due
    /// is abandoned and counted as failed, so a backend that never answers
    /// cannot stall the loop.
    pub async fn poll(&self) {
        let interval = self.settings.refresh_interval();
        loop {
            let tick = pin!(self.timer.sleep(interval));
            let cycle = pin!(self.refresh());
            match select(cycle, tick).await {
                Either::Left((_, tick)) => tick.await,
                Either::Right(((), _)) => {
                    tracing::warn!(
                        interval_ms = self.settings.refresh_interval_ms,
                        "dashboard refresh still pending at the next tick; abandoning it"
                    );
                }
            }
        }
    }

    async fn run_command(&self, camera: &str, command: CameraCommand) -> Result<(), DashboardError> {
        if camera.is_empty() {
            tracing::warn!(%command, "rejecting camera command without a camera name");
            return Err(ValidationError::EmptyCameraName.into());
        }

        let result = self.backend.send_command(camera, command).await;
        match &result {
            Ok(()) => tracing::info!(camera, %command, "camera command sent"),
            Err(err) => tracing::warn!(camera, %command, error = %err, "camera command failed"),
        }

        self.timer.sleep(self.settings.settle_delay()).await;
        self.refresh().await;
        result
    }

    async fn run_cycle(&self, cycle: u64) -> Result<RefreshOutcome, DashboardError> {
        let health = self.backend.fetch_health().await?;
        let disk_applied = self.apply_disk(cycle, DiskGauge::from(&health))?;

        let statuses = match self.settings.camera_source {
            CameraSource::CamerasEndpoint => self.backend.fetch_cameras().await?,
            CameraSource::HealthReport => {
                health.cameras.ok_or_else(|| DashboardError::Decode {
                    url: self.endpoints.health(),
                    reason: "health report has no `cameras` field".to_string(),
                })?
            }
        };
        let grid = CameraGrid::from_statuses(&statuses, &self.endpoints);
        let cameras_applied = self.apply_cameras(cycle, grid)?;

        tracing::debug!(cycle, cameras = statuses.len(), "dashboard refreshed");
        if disk_applied && cameras_applied {
            Ok(RefreshOutcome::Rendered)
        } else {
            Ok(RefreshOutcome::Superseded)
        }
    }

    fn apply_disk(&self, cycle: u64, gauge: DiskGauge) -> Result<bool, DashboardError> {
        let mut rendered = self.lock_rendered();
        if rendered.disk.as_ref().is_some_and(|applied| applied.cycle > cycle) {
            tracing::debug!(cycle, "disk gauge superseded by a newer refresh");
            return Ok(false);
        }
        self.view.show_disk(&gauge)?;
        rendered.disk = Some(Applied {
            cycle,
            value: gauge,
        });
        Ok(true)
    }

    fn apply_cameras(&self, cycle: u64, grid: CameraGrid) -> Result<bool, DashboardError> {
        let mut rendered = self.lock_rendered();
        if rendered
            .cameras
            .as_ref()
            .is_some_and(|applied| applied.cycle > cycle)
        {
            tracing::debug!(cycle, "camera grid superseded by a newer refresh");
            return Ok(false);
        }
        self.view.show_cameras(&grid)?;
        rendered.cameras = Some(Applied { cycle, value: grid });
        Ok(true)
    }

    fn next_cycle(&self) -> u64 {
        self.cycles.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn lock_rendered(&self) -> MutexGuard<'_, RenderedState> {
        self.rendered.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
