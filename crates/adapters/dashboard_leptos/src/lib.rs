//! Browser camera dashboard.
//!
//! Mounts the disk gauge into `#disk` and the camera grid into `#cameras`,
//! then keeps both current by polling the recorder backend.

use std::sync::Arc;

use camdash_app::services::dashboard_service::DashboardService;
use camdash_domain::error::DashboardError;
use camdash_domain::settings::DashboardSettings;
use camdash_domain::view::{CAMERAS_TARGET_ID, DISK_TARGET_ID};
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod api;
mod components;
pub mod logging;
pub mod timer;
pub mod view;

use api::GlooBackend;
use components::{CameraGrid, DiskGauge};
use timer::GlooTimer;
use view::SignalView;

/// The dashboard service wired to browser adapters.
pub type Dashboard = DashboardService<GlooBackend, SignalView, GlooTimer>;

fn find_target(id: &'static str) -> Result<HtmlElement, DashboardError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(DashboardError::MissingTarget(id))
}

async fn load_settings() -> DashboardSettings {
    match api::fetch_settings().await {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default dashboard settings");
            DashboardSettings::default()
        }
    }
}

/// Build the dashboard, mount it into the host page and start polling.
///
/// # Errors
///
/// Returns an error when a target element is missing from the page or the
/// settings are rejected.
pub async fn start() -> Result<(), DashboardError> {
    let disk_target = find_target(DISK_TARGET_ID)?;
    let cameras_target = find_target(CAMERAS_TARGET_ID)?;

    let settings = load_settings().await;
    let backend = GlooBackend::new(settings.endpoints()?);
    let signals = SignalView::new();
    let dashboard = Arc::new(DashboardService::new(backend, signals, GlooTimer, settings)?);
    tracing::info!(
        api = dashboard.endpoints().base(),
        interval_ms = dashboard.settings().refresh_interval_ms,
        "dashboard starting"
    );

    disk_target.set_inner_html("");
    let gauge = signals.disk();
    mount_to(disk_target, move || view! { <DiskGauge gauge/> }).forget();

    cameras_target.set_inner_html("");
    let grid = signals.cameras();
    let generation = signals.generation();
    let cards_dashboard = Arc::clone(&dashboard);
    mount_to(cameras_target, move || {
        view! { <CameraGrid grid generation dashboard=cards_dashboard/> }
    })
    .forget();

    spawn_local(async move { dashboard.poll().await });
    Ok(())
}
