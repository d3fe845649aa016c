//! # camdash-domain
//!
//! Pure domain model for the camdash camera dashboard.
//!
//! ## Responsibilities
//! - Wire types reported by the recorder backend: [`health::HealthReport`],
//!   [`camera::CameraStatus`] and the ordered [`camera::CameraStatuses`] mapping
//! - Endpoint layout of the backend API ([`endpoint::ApiEndpoints`])
//! - View models the dashboard renders: disk gauge, camera cards, camera grid
//! - Client settings shared by the server and the browser client
//! - Error conventions shared across the workspace
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod camera;
pub mod endpoint;
pub mod health;
pub mod settings;
pub mod view;
