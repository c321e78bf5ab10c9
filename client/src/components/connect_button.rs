//! Connect-wallet action, shown only while no account is connected.

use leptos::prelude::*;

use crate::state::wave::WaveState;

#[component]
pub fn ConnectButton() -> impl IntoView {
    let state = expect_context::<RwSignal<WaveState>>();

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let wallet = crate::util::browser::injected_wallet();
            let outcome = crate::net::session::request_connection(
                wallet.as_ref(),
                crate::util::browser::blocking_alert,
                crate::app::dispatch_to(state),
            )
            .await;
            if let Err(e) = outcome {
                crate::net::report_failure("connect wallet", &e);
            }
        });
    };

    view! {
        <Show when=move || !state.with(WaveState::is_connected)>
            <button class="wave-button wave-button--connect" on:click=on_click>
                "Connect Wallet"
            </button>
        </Show>
    }
}
