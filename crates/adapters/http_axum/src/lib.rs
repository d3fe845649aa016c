//! # camdash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled browser dashboard (WASM bundle, `index.html`, CSS)
//! - Publish the client settings at `/dashboard-config.json` so the API origin
//!   is injected at runtime instead of compiled in
//! - Optionally forward the recorder backend's endpoints (`/health`,
//!   `/cameras`, `/live/{camera}`, `/camera/{camera}/{start|stop}`) so the
//!   dashboard can stay same-origin
//! - Report its own liveness at `/healthz`
//!
//! ## Dependency rule
//! Depends on `camdash-domain` for the settings and endpoint types. Never leaks
//! axum or reqwest types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod upstream;
