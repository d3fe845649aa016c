//! View port: where the dashboard regions are drawn.

use camdash_domain::error::DashboardError;
use camdash_domain::view::{CameraGrid, DiskGauge};

/// Receives complete region models; each call replaces the region wholesale.
pub trait DashboardView {
    /// Replace the disk gauge.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingTarget`] when the region cannot be drawn.
    fn show_disk(&self, gauge: &DiskGauge) -> Result<(), DashboardError>;

    /// Replace the camera grid.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingTarget`] when the region cannot be drawn.
    fn show_cameras(&self, grid: &CameraGrid) -> Result<(), DashboardError>;
}
