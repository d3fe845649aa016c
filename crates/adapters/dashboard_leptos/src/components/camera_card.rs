//! A single camera card with its state, controls and live feed.

use std::sync::Arc;

use camdash_domain::endpoint::CameraCommand;
use camdash_domain::view as model;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::Dashboard;

#[component]
pub fn CameraCard(
    card: model::CameraCard,
    /// Grid generation; a new one reloads the snapshot and clears a load error.
    generation: ReadSignal<u64>,
    dashboard: Arc<Dashboard>,
) -> impl IntoView {
    let model::CameraCard {
        name,
        state_label,
        color,
        last_change,
        last_segment,
        live_url,
    } = card;

    // Generation whose snapshot failed to load, if any.
    let (failed_generation, set_failed_generation) = signal(None::<u64>);
    let on_start = command_handler(Arc::clone(&dashboard), name.clone(), CameraCommand::Start);
    let on_stop = command_handler(dashboard, name.clone(), CameraCommand::Stop);
    let alt = format!("Live feed of {name}");

    view! {
        <div class="camera">
            <div class="camera-header">
                <b>{name}</b>
                <span class="camera-state" style:color=color.hex()>
                    {state_label}
                </span>
            </div>
            <div class="camera-meta">"Last change: " {last_change}</div>
            {last_segment.map(|segment| view! {
                <div class="camera-meta">"Last segment: " {segment}</div>
            })}
            <div class="camera-actions">
                <button on:click=on_start>"\u{25B6} Start"</button>
                <button on:click=on_stop>"\u{23F9} Stop"</button>
            </div>
            <div class="camera-live">
                <img
                    src=move || model::live_url_for_generation(&live_url, generation.get())
                    alt=alt
                    class:hidden=move || failed_generation.get() == Some(generation.get())
                    on:error=move |_| set_failed_generation.set(Some(generation.get_untracked()))
                />
            </div>
        </div>
    }
}

fn command_handler(
    dashboard: Arc<Dashboard>,
    camera: String,
    command: CameraCommand,
) -> impl Fn(MouseEvent) + Send + Sync + 'static {
    move |_| {
        let dashboard = Arc::clone(&dashboard);
        let camera = camera.clone();
        spawn_local(async move {
            // Failures are logged by the service and the follow-up refresh
            // shows the resulting state.
            let _ = match command {
                CameraCommand::Start => dashboard.start_camera(&camera).await,
                CameraCommand::Stop => dashboard.stop_camera(&camera).await,
            };
        });
    }
}
