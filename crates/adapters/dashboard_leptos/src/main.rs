use leptos::task::{Executor, spawn_local};

fn main() {
    console_error_panic_hook::set_once();
    camdash_dashboard_leptos::logging::init();
    let _ = Executor::init_wasm_bindgen();

    spawn_local(async {
        if let Err(err) = camdash_dashboard_leptos::start().await {
            tracing::error!(error = %err, "dashboard failed to start");
        }
    });
}
