//! User-facing wallet and contract operations.
//!
//! Every operation takes the wallet as `Option<&W>` (`None` when no provider is
//! injected), re-derives the contract adapter itself, reports state changes
//! through `dispatch`, and returns its outcome. Nothing here retries.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use contract::rpc::{self, ETH_ACCOUNTS, ETH_REQUEST_ACCOUNTS, TransactionReceipt};
use leptos::logging::log;
use serde_json::json;

use super::ClientError;
use super::portal::WavePortal;
use super::wallet::Eip1193;
use crate::state::wave::WaveEvent;

/// Shown when the user asks to connect but no wallet extension is installed.
pub const INSTALL_WALLET_ALERT: &str = "Kindly install Metamask!";

async fn first_account<W: Eip1193 + ?Sized>(wallet: &W, method: &str) -> Result<Option<String>, ClientError> {
    let raw = wallet.request(method, json!([])).await?;
    let accounts: Vec<String> = rpc::from_result(raw)?;
    Ok(accounts.into_iter().next())
}

/// Adopt an already-authorized account, without prompting the user.
///
/// Returns the adopted account, or `None` when the wallet has not authorized
/// this site yet.
///
/// # Errors
///
/// `WalletMissing` without a provider; wallet errors are passed through.
pub async fn check_existing_authorization<W: Eip1193 + ?Sized>(
    wallet: Option<&W>,
    dispatch: impl Fn(WaveEvent),
) -> Result<Option<String>, ClientError> {
    let wallet = wallet.ok_or(ClientError::WalletMissing)?;
    let account = first_account(wallet, ETH_ACCOUNTS).await?;
    match &account {
        Some(found) => {
            log!("Found an authorized account {found}");
            dispatch(WaveEvent::AccountAdopted(found.clone()));
        }
        None => log!("No authorized account found"),
    }
    Ok(account)
}

/// Prompt the wallet for account access.
///
/// Without a provider, `alert` is invoked with [`INSTALL_WALLET_ALERT`] and
/// nothing else happens.
///
/// # Errors
///
/// `WalletMissing` without a provider; a dismissed prompt surfaces as a
/// wallet rejection.
pub async fn request_connection<W: Eip1193 + ?Sized>(
    wallet: Option<&W>,
    alert: impl FnOnce(&str),
    dispatch: impl Fn(WaveEvent),
) -> Result<Option<String>, ClientError> {
    let Some(wallet) = wallet else {
        alert(INSTALL_WALLET_ALERT);
        return Err(ClientError::WalletMissing);
    };
    let account = first_account(wallet, ETH_REQUEST_ACCOUNTS).await?;
    if let Some(connected) = &account {
        log!("Connected {connected}");
        dispatch(WaveEvent::AccountAdopted(connected.clone()));
    }
    Ok(account)
}

/// Submit `message` as a wave and wait for it to be mined.
///
/// Emits `MiningStarted` as soon as the wallet accepts the transaction and
/// `WaveConfirmed` once its receipt is in. History and count are left to the
/// live subscription. On failure after acceptance nothing resets the mining
/// state.
///
/// # Errors
///
/// `WalletMissing`, `NoSigner`, wallet rejections, or `Reverted`.
pub async fn submit_wave<W: Eip1193 + ?Sized>(
    wallet: Option<&W>,
    message: &str,
    dispatch: impl Fn(WaveEvent),
) -> Result<TransactionReceipt, ClientError> {
    let wallet = wallet.ok_or(ClientError::WalletMissing)?;
    let portal = WavePortal::connect(wallet).await?;

    let pending = portal.wave(message).await?;
    let tx_hash = format!("{:#x}", pending.tx_hash());
    log!("Mining... {tx_hash}");
    dispatch(WaveEvent::MiningStarted { tx_hash: tx_hash.clone() });

    let receipt = pending.wait().await?;
    match receipt.block_number {
        Some(block) => log!("Mined... {tx_hash} in block {block}"),
        None => log!("Mined... {tx_hash}"),
    }
    dispatch(WaveEvent::WaveConfirmed);
    Ok(receipt)
}

/// Load the contract's total wave count.
///
/// # Errors
///
/// `WalletMissing`, wallet rejections, or undecodable return data.
pub async fn fetch_wave_count<W: Eip1193 + ?Sized>(
    wallet: Option<&W>,
    dispatch: impl Fn(WaveEvent),
) -> Result<u64, ClientError> {
    let wallet = wallet.ok_or(ClientError::WalletMissing)?;
    let count = WavePortal::connect(wallet).await?.total_waves().await?;
    log!("Retrieved total wave count: {count}");
    dispatch(WaveEvent::WaveCountLoaded(count));
    Ok(count)
}

/// Load the full wave history, replacing whatever is shown.
///
/// Returns the number of records loaded.
///
/// # Errors
///
/// `WalletMissing`, wallet rejections, or undecodable return data.
pub async fn get_all_waves<W: Eip1193 + ?Sized>(
    wallet: Option<&W>,
    dispatch: impl Fn(WaveEvent),
) -> Result<usize, ClientError> {
    let wallet = wallet.ok_or(ClientError::WalletMissing)?;
    let waves = WavePortal::connect(wallet).await?.all_waves().await?;
    let loaded = waves.len();
    dispatch(WaveEvent::HistoryLoaded(waves));
    Ok(loaded)
}
