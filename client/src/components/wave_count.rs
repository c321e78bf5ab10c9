//! Running wave count.

use leptos::prelude::*;

use crate::state::wave::WaveState;

#[component]
pub fn WaveCount() -> impl IntoView {
    let state = expect_context::<RwSignal<WaveState>>();

    view! {
        <div class="wave-count">
            <span class="wave-count__label">"Waves:"</span>
            <span class="wave-count__figure">{move || state.with(|s| s.wave_count)}</span>
        </div>
    }
}
