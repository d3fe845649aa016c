//! # camdash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CameraBackend`: fetch health and camera statuses, send start/stop
//!   - `DashboardView`: show the disk gauge and the camera grid
//!   - `Timer`: wait for a duration on whatever executor the adapter runs
//! - Define the **driving/inbound** use-case:
//!   - `DashboardService`: refresh cycle, camera commands, periodic polling
//! - Own the explicit `RenderedState` so stale refreshes can be detected
//!
//! ## Dependency rule
//! Depends on `camdash-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
