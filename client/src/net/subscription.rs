//! Live `NewWave` subscription.
//!
//! DESIGN
//! ======
//! The subscription is a scoped resource: the page acquires a
//! [`SubscriptionGuard`] on mount and releases it on cleanup. Release is
//! idempotent and takes effect immediately: a listener whose guard was
//! released drops every later notification, even one already in flight, and
//! the polling loop uninstalls its filter on the next tick.
//!
//! ERROR HANDLING
//! ==============
//! A rejected poll is logged and polling continues at the same interval; a
//! filter the node has forgotten is installed again. Only undecodable logs
//! end the subscription early.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use contract::WaveRecord;
use leptos::logging::{log, warn};

use super::ClientError;
use super::portal::WavePortal;
use super::wallet::Eip1193;

/// Delay between `eth_getFilterChanges` polls.
pub const FILTER_POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Ownership token for one live subscription.
///
/// Clones share the same flag; `Send + Sync` so it can be moved into Leptos
/// cleanup callbacks.
#[derive(Clone, Debug)]
pub struct SubscriptionGuard {
    active: Arc<AtomicBool>,
}

impl SubscriptionGuard {
    #[must_use]
    pub fn acquire() -> Self {
        Self { active: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Release the subscription. Returns `true` only for the call that
    /// actually released it.
    pub fn release(&self) -> bool {
        self.active.swap(false, Ordering::AcqRel)
    }
}

/// Hands decoded notifications to `on_wave` while its guard is held.
pub struct NewWaveListener<F> {
    guard: SubscriptionGuard,
    on_wave: F,
}

impl<F: Fn(WaveRecord)> NewWaveListener<F> {
    pub fn new(guard: SubscriptionGuard, on_wave: F) -> Self {
        Self { guard, on_wave }
    }

    /// Deliver one notification. Returns `false` (and drops it) after release.
    pub fn deliver(&self, record: WaveRecord) -> bool {
        if !self.guard.is_active() {
            return false;
        }
        log!("NewWave {} {} {}", record.address, record.timestamp, record.message);
        (self.on_wave)(record);
        true
    }
}

/// Install a `NewWave` filter and poll it until `guard` is released.
///
/// The filter is uninstalled when polling stops, whether by release or by an
/// undecodable log.
///
/// # Errors
///
/// Fails if the filter cannot be installed at start, or if a polled log does
/// not decode as `NewWave`.
pub async fn run_new_wave_subscription<W: Eip1193 + ?Sized>(
    wallet: &W,
    guard: SubscriptionGuard,
    on_wave: impl Fn(WaveRecord),
) -> Result<(), ClientError> {
    let portal = WavePortal::connect(wallet).await?;
    let mut filter_id = portal.install_new_wave_filter().await?;
    let listener = NewWaveListener::new(guard.clone(), on_wave);

    let outcome = poll_new_waves(wallet, &portal, &mut filter_id, &guard, &listener).await;

    match portal.uninstall_filter(&filter_id).await {
        Ok(_) => log!("NewWave filter {filter_id} removed"),
        Err(e) => warn!("failed to remove NewWave filter {filter_id}: {e}"),
    }
    outcome
}

async fn poll_new_waves<W: Eip1193 + ?Sized, F: Fn(WaveRecord)>(
    wallet: &W,
    portal: &WavePortal<'_, W>,
    filter_id: &mut String,
    guard: &SubscriptionGuard,
    listener: &NewWaveListener<F>,
) -> Result<(), ClientError> {
    while guard.is_active() {
        wallet.sleep(FILTER_POLL_INTERVAL).await;
        if !guard.is_active() {
            break;
        }
        match portal.new_wave_changes(filter_id).await {
            Ok(records) => {
                for record in records {
                    listener.deliver(record);
                }
            }
            Err(ClientError::Wallet(e)) if e.is_missing_filter() => {
                warn!("NewWave filter {filter_id} lost: {e}");
                match portal.install_new_wave_filter().await {
                    Ok(id) => {
                        log!("NewWave filter reinstalled as {id}");
                        *filter_id = id;
                    }
                    Err(e) => warn!("reinstalling NewWave filter failed: {e}"),
                }
            }
            Err(ClientError::Wallet(e)) => warn!("NewWave poll failed: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
