//! Browser touch points used by the wave page.
//!
//! TRADE-OFFS
//! ==========
//! Both helpers only do something under `hydrate`. During SSR and in tests
//! there is no wallet and alerts are logged instead of shown.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::logging::warn;

#[cfg(feature = "hydrate")]
pub use crate::net::wallet::BrowserWallet;

/// Show a blocking `window.alert` with `message`.
pub fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    warn!("alert: {message}");
}

/// The injected wallet provider, if the user has one installed.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn injected_wallet() -> Option<BrowserWallet> {
    BrowserWallet::detect()
}
