//! Root application component with routing and the shared wave state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::wave::WavePage;
use crate::state::wave::{WaveEvent, WaveState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `RwSignal<WaveState>` context read by the page and its
/// components.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(WaveState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/waveportal.css"/>
        <Title text="Wave Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WavePage/>
            </Routes>
        </Router>
    }
}

/// Route every `WaveEvent` through the reducer held by `state`.
pub fn dispatch_to(state: RwSignal<WaveState>) -> impl Fn(WaveEvent) + Copy + 'static {
    move |event| state.update(|s| s.apply(event))
}
