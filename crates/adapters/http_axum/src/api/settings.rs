//! `GET /dashboard-config.json`: settings for the browser dashboard.

use axum::Json;
use axum::extract::State;

use camdash_domain::settings::DashboardSettings;

use crate::state::AppState;

/// Return the client settings as camelCase JSON.
pub async fn get(State(state): State<AppState>) -> Json<DashboardSettings> {
    Json(DashboardSettings::clone(&state.settings))
}
