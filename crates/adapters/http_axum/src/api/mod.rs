//! HTTP handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod proxy;
pub mod settings;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Route serving the client settings.
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/dashboard-config.json", get(settings::get))
}

/// Routes forwarded verbatim to the recorder backend.
pub fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(proxy::forward))
        .route("/cameras", get(proxy::forward))
        .route("/live/{camera}", get(proxy::forward))
        .route("/camera/{camera}/start", get(proxy::forward))
        .route("/camera/{camera}/stop", get(proxy::forward))
}
