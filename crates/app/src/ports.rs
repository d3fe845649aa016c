//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! The dashboard runs on a single-threaded browser executor, so port futures
//! are not required to be `Send`.

pub mod backend;
pub mod timer;
pub mod view;

pub use backend::CameraBackend;
pub use timer::Timer;
pub use view::DashboardView;
