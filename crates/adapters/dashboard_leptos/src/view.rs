//! Dashboard view publishing models into reactive signals.
//!
//! Components subscribe to the read halves; a model equal to the one already
//! shown does not notify subscribers, so unchanged regions are not redrawn.
//! Every applied grid still advances `generation`, which cards use to reload
//! their snapshot.

use camdash_app::ports::DashboardView;
use camdash_domain::error::DashboardError;
use camdash_domain::view::{CameraGrid, DiskGauge};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SignalView {
    disk: RwSignal<Option<DiskGauge>>,
    cameras: RwSignal<Option<CameraGrid>>,
    generation: RwSignal<u64>,
}

impl SignalView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            disk: RwSignal::new(None),
            cameras: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Latest disk gauge, `None` until the first successful refresh.
    #[must_use]
    pub fn disk(&self) -> ReadSignal<Option<DiskGauge>> {
        self.disk.read_only()
    }

    /// Latest camera grid, `None` until the first successful refresh.
    #[must_use]
    pub fn cameras(&self) -> ReadSignal<Option<CameraGrid>> {
        self.cameras.read_only()
    }

    /// How many times a camera grid has been applied.
    #[must_use]
    pub fn generation(&self) -> ReadSignal<u64> {
        self.generation.read_only()
    }
}

impl Default for SignalView {
    fn default() -> Self {
        Self::new()
    }
}

fn replace_if_changed<T>(signal: RwSignal<Option<T>>, value: &T)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    signal.maybe_update(|current| {
        if current.as_ref() == Some(value) {
            return false;
        }
        *current = Some(value.clone());
        true
    });
}

impl DashboardView for SignalView {
    fn show_disk(&self, gauge: &DiskGauge) -> Result<(), DashboardError> {
        replace_if_changed(self.disk, gauge);
        Ok(())
    }

    fn show_cameras(&self, grid: &CameraGrid) -> Result<(), DashboardError> {
        replace_if_changed(self.cameras, grid);
        self.generation.update(|generation| *generation += 1);
        Ok(())
    }
}
