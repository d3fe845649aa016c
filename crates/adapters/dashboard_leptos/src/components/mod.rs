mod camera_card;
mod camera_grid;
mod disk_gauge;

pub use camera_card::CameraCard;
pub use camera_grid::CameraGrid;
pub use disk_gauge::DiskGauge;
