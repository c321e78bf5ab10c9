//! Wave history, most recent first.

use leptos::prelude::*;

use crate::state::wave::{WaveRecord, WaveState};
use crate::util::format::format_timestamp;

#[component]
pub fn WaveList() -> impl IntoView {
    let state = expect_context::<RwSignal<WaveState>>();
    let waves = move || {
        state.with(|s| {
            s.waves_newest_first()
                .cloned()
                .map(|record| view! { <WaveCard record/> })
                .collect_view()
        })
    };

    view! { <div class="wave-list">{waves}</div> }
}

#[component]
fn WaveCard(record: WaveRecord) -> impl IntoView {
    let time = format_timestamp(record.timestamp);

    view! {
        <div class="wave-card">
            <div class="wave-card__row">"Address: " {record.address}</div>
            <div class="wave-card__row">"Time: " {time}</div>
            <div class="wave-card__row">"Message: " {record.message}</div>
        </div>
    }
}
