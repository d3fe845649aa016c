//! Shared application state for axum handlers.

use std::sync::Arc;

use camdash_domain::settings::DashboardSettings;

use crate::upstream::Upstream;

/// Application state shared across all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Settings handed to the browser dashboard.
    pub settings: Arc<DashboardSettings>,
    /// Backend to forward API calls to, when proxying is enabled.
    pub upstream: Option<Arc<Upstream>>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(settings: DashboardSettings, upstream: Option<Upstream>) -> Self {
        Self {
            settings: Arc::new(settings),
            upstream: upstream.map(Arc::new),
        }
    }
}
