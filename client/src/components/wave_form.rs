//! Message box and submit action.
//!
//! DESIGN
//! ======
//! The textarea is controlled: every keystroke goes through the reducer as
//! `DraftEdited`. While a submitted wave is being mined the form is replaced
//! by a progress indicator; the draft is kept until the wave is confirmed.

use leptos::prelude::*;

use crate::app::dispatch_to;
use crate::state::wave::{MiningStatus, WaveEvent, WaveState};

#[component]
pub fn WaveForm() -> impl IntoView {
    let state = expect_context::<RwSignal<WaveState>>();
    let dispatch = dispatch_to(state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let message = state.with_untracked(|s| s.draft.clone());
            leptos::task::spawn_local(async move {
                let wallet = crate::util::browser::injected_wallet();
                if let Err(e) = crate::net::session::submit_wave(wallet.as_ref(), &message, dispatch).await {
                    crate::net::report_failure("wave", &e);
                }
            });
        }
    };

    view! {
        <Show when=move || !state.with(WaveState::is_mining) fallback=move || view! { <MiningIndicator/> }>
            <form class="message-block" on:submit=on_submit>
                <label class="message-block__label" for="wave-message">
                    "Wave Message"
                </label>
                <textarea
                    id="wave-message"
                    class="message-block__input"
                    rows="5"
                    prop:value=move || state.with(|s| s.draft.clone())
                    on:input=move |ev| dispatch(WaveEvent::DraftEdited(event_target_value(&ev)))
                ></textarea>
                <button class="wave-button" type="submit">
                    "Wave at Me"
                </button>
            </form>
        </Show>
    }
}

#[component]
fn MiningIndicator() -> impl IntoView {
    let state = expect_context::<RwSignal<WaveState>>();
    let tx_hash = move || {
        state.with(|s| match &s.mining {
            MiningStatus::Mining { tx_hash } => tx_hash.clone(),
            MiningStatus::Idle => String::new(),
        })
    };

    view! {
        <div class="mining-indicator" role="status">
            <span class="mining-indicator__spinner" aria-hidden="true"></span>
            <span class="mining-indicator__label">"Mining..."</span>
            <code class="mining-indicator__hash">{tx_hash}</code>
        </div>
    }
}
