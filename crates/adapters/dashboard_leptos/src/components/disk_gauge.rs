//! Disk-free readout.

use camdash_domain::view as model;
use leptos::prelude::*;

/// Text of the current disk gauge; empty until the first refresh lands.
#[component]
pub fn DiskGauge(gauge: ReadSignal<Option<model::DiskGauge>>) -> impl IntoView {
    move || gauge.get().map(|gauge| gauge.text())
}
