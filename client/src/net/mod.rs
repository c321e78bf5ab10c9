//! Wallet and contract plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wallet` abstracts the EIP-1193 provider injected by the browser wallet,
//! `portal` is the `WavePortal` adapter built on top of it, `session` holds
//! the user-facing operations, and `subscription` drives live `NewWave`
//! notifications.
//!
//! ERROR HANDLING
//! ==============
//! Operations return `ClientError` to their caller. Only the page layer logs
//! and drops failures, which is where the user-visible "state just does not
//! update" behavior lives.

pub mod portal;
pub mod session;
pub mod subscription;
pub mod wallet;

#[cfg(test)]
pub(crate) mod mock;


use leptos::logging::{log, warn};

pub use wallet::WalletError;

/// Failure of a wallet-backed client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No injected EIP-1193 provider (`window.ethereum`) was found.
    #[error("no Ethereum wallet found")]
    WalletMissing,

    /// A transaction needs a signer but the wallet exposes no account.
    #[error("wallet has no authorized account to sign with")]
    NoSigner,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Contract(#[from] contract::ContractError),

    /// The transaction was mined but its receipt reports failure.
    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },
}

impl ClientError {
    /// Whether the user dismissed the wallet prompt.
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Wallet(e) if e.is_user_rejection())
    }
}

/// Log a failed operation. A dismissed wallet prompt is a user choice, not a
/// fault, so it is logged at info level.
pub fn report_failure(operation: &str, err: &ClientError) {
    if err.is_user_rejection() {
        log!("{operation} cancelled in wallet: {err}");
    } else {
        warn!("{operation} failed: {err}");
    }
}
