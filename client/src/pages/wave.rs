//! The wave portal page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. On mount it adopts an already-authorized account, loads
//! the wave count and history, and subscribes to live `NewWave`
//! notifications. The subscription guard is released when the page is torn
//! down, so a remount never leaves a second handler behind.
//!
//! ERROR HANDLING
//! ==============
//! Session operations return their failures here; the page logs them and
//! leaves state untouched.

use leptos::prelude::*;

use crate::components::connect_button::ConnectButton;
use crate::components::wave_count::WaveCount;
use crate::components::wave_form::WaveForm;
use crate::components::wave_list::WaveList;
#[cfg(feature = "hydrate")]
use crate::state::wave::WaveState;

#[component]
pub fn WavePage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let state = expect_context::<RwSignal<WaveState>>();
        load_on_mount(state);

        let guard = crate::net::subscription::SubscriptionGuard::acquire();
        subscribe_new_waves(state, guard.clone());
        on_cleanup(move || {
            if guard.release() {
                leptos::logging::log!("NewWave subscription released");
            }
        });
    }

    view! {
        <div class="main-container">
            <div class="data-container">
                <div class="header">"👋 Hey there!"</div>
                <div class="bio">"Connect your Ethereum wallet and wave at me!"</div>
                <WaveCount/>
                <WaveForm/>
                <ConnectButton/>
                <WaveList/>
            </div>
        </div>
    }
}

/// Initial reads. Each runs as its own task and fails on its own.
#[cfg(feature = "hydrate")]
fn load_on_mount(state: RwSignal<WaveState>) {
    use crate::app::dispatch_to;
    use crate::net::{report_failure, session};
    use crate::util::browser::injected_wallet;

    let dispatch = dispatch_to(state);
    leptos::task::spawn_local(async move {
        if let Err(e) = session::check_existing_authorization(injected_wallet().as_ref(), dispatch).await {
            report_failure("wallet authorization check", &e);
        }
    });
    leptos::task::spawn_local(async move {
        if let Err(e) = session::get_all_waves(injected_wallet().as_ref(), dispatch).await {
            report_failure("loading wave history", &e);
        }
    });
    leptos::task::spawn_local(async move {
        if let Err(e) = session::fetch_wave_count(injected_wallet().as_ref(), dispatch).await {
            report_failure("loading wave count", &e);
        }
    });
}

/// Follow `NewWave` until `guard` is released. No wallet, no subscription.
#[cfg(feature = "hydrate")]
fn subscribe_new_waves(state: RwSignal<WaveState>, guard: crate::net::subscription::SubscriptionGuard) {
    use crate::net::subscription::run_new_wave_subscription;
    use crate::state::wave::WaveEvent;

    let Some(wallet) = crate::util::browser::injected_wallet() else {
        leptos::logging::log!("no wallet injected; live waves disabled");
        return;
    };
    let dispatch = crate::app::dispatch_to(state);
    leptos::task::spawn_local(async move {
        let on_wave = move |record| dispatch(WaveEvent::NewWave(record));
        if let Err(e) = run_new_wave_subscription(&wallet, guard, on_wave).await {
            leptos::logging::warn!("NewWave subscription ended: {e}");
        }
    });
}
