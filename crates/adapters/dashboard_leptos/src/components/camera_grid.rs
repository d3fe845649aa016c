//! Camera grid: one card per camera, or a placeholder.

use std::sync::Arc;

use camdash_domain::view as model;
use leptos::prelude::*;

use super::CameraCard;
use crate::Dashboard;

#[component]
pub fn CameraGrid(
    /// Latest grid published by the dashboard view.
    grid: ReadSignal<Option<model::CameraGrid>>,
    /// Bumped each time a grid is applied, even an unchanged one.
    generation: ReadSignal<u64>,
    /// Service the cards' buttons send commands through.
    dashboard: Arc<Dashboard>,
) -> impl IntoView {
    move || match grid.get() {
        None => view! { <p class="loading">"Loading\u{2026}"</p> }.into_any(),
        Some(model::CameraGrid::Empty) => {
            view! { <p>{model::NO_CAMERAS_PLACEHOLDER}</p> }.into_any()
        }
        Some(model::CameraGrid::Cards(cards)) => cards
            .into_iter()
            .map(|card| {
                let dashboard = Arc::clone(&dashboard);
                view! { <CameraCard card generation dashboard/> }
            })
            .collect::<Vec<_>>()
            .into_any(),
    }
}
