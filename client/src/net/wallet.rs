//! EIP-1193 wallet provider abstraction.
//!
//! The browser wallet (MetaMask or compatible) injects `window.ethereum`,
//! whose single `request({ method, params })` entry point covers account
//! access, reads, transaction signing and log filters. `Eip1193` mirrors that
//! entry point so the adapter and session code stay testable off-browser.
//!
//! The real provider lives behind `#[cfg(feature = "hydrate")]`.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

/// EIP-1193 code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Failure reported by the wallet provider or the JS bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// The provider rejected the request with an EIP-1193 error object.
    #[error("wallet rejected {method}: {message} (code {code})")]
    Rejected { method: String, code: i64, message: String },

    /// Calling into the provider or converting its result failed.
    #[error("wallet bridge failed: {0}")]
    Bridge(String),
}

impl WalletError {
    #[must_use]
    pub fn rejected(method: &str, code: i64, message: impl Into<String>) -> Self {
        Self::Rejected { method: method.to_owned(), code, message: message.into() }
    }

    /// Whether the user dismissed the wallet prompt.
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rejected { code: USER_REJECTED_CODE, .. })
    }

    /// Whether the node no longer knows a log filter (expired or node restarted).
    #[must_use]
    pub fn is_missing_filter(&self) -> bool {
        match self {
            Self::Rejected { message, .. } => message.to_ascii_lowercase().contains("filter not found"),
            Self::Bridge(_) => false,
        }
    }
}

/// An injected EIP-1193 provider.
///
/// Futures are `?Send`: the browser provider wraps JS promises that never
/// leave the main thread.
#[async_trait(?Send)]
pub trait Eip1193 {
    /// Send `{ method, params }` and return the JSON `result`.
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;

    /// Suspend the calling task; used between receipt and filter polls.
    async fn sleep(&self, duration: Duration);
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserWallet;

#[cfg(feature = "hydrate")]
mod browser {
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::Value;
    use wasm_bindgen::{JsCast, JsValue};

    use super::{Eip1193, WalletError};

    /// `window.ethereum`, re-read every time an operation starts.
    pub struct BrowserWallet {
        ethereum: JsValue,
    }

    impl BrowserWallet {
        /// Look up the injected provider. `None` when no wallet extension is installed.
        pub fn detect() -> Option<Self> {
            let window = web_sys::window()?;
            let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
            if ethereum.is_undefined() || ethereum.is_null() {
                return None;
            }
            Some(Self { ethereum })
        }
    }

    #[async_trait(?Send)]
    impl Eip1193 for BrowserWallet {
        async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
            let payload = serde_json::json!({ "method": method, "params": params });
            let args = js_sys::JSON::parse(&payload.to_string()).map_err(|e| bridge_error(&e))?;

            let request_fn = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request"))
                .map_err(|e| bridge_error(&e))?
                .dyn_into::<js_sys::Function>()
                .map_err(|e| bridge_error(&e))?;
            let promise = request_fn
                .call1(&self.ethereum, &args)
                .map_err(|e| rejection(method, &e))?
                .dyn_into::<js_sys::Promise>()
                .map_err(|e| bridge_error(&e))?;

            let result = wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(|e| rejection(method, &e))?;
            if result.is_undefined() || result.is_null() {
                return Ok(Value::Null);
            }
            let text: String = js_sys::JSON::stringify(&result)
                .map_err(|e| bridge_error(&e))?
                .into();
            serde_json::from_str(&text).map_err(|e| WalletError::Bridge(e.to_string()))
        }

        async fn sleep(&self, duration: Duration) {
            gloo_timers::future::sleep(duration).await;
        }
    }

    fn bridge_error(err: &JsValue) -> WalletError {
        WalletError::Bridge(format!("{err:?}"))
    }

    /// Translate a rejected provider promise (`{ code, message }`) into a typed error.
    fn rejection(method: &str, err: &JsValue) -> WalletError {
        #[allow(clippy::cast_possible_truncation)]
        let code = js_sys::Reflect::get(err, &JsValue::from_str("code"))
            .ok()
            .and_then(|v| v.as_f64())
            .map_or(-1, |c| c as i64);
        let message = js_sys::Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        WalletError::rejected(method, code, message)
    }
}
