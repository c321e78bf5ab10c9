//! # client
//!
//! Leptos + WASM frontend for the wave portal: connect a browser wallet, send
//! a wave to the `WavePortal` contract, and follow the wave history live.
//!
//! This crate contains the page, its components, the wave state reducer and
//! the wallet/contract plumbing. Contract bindings and JSON-RPC payloads come
//! from the `contract` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
