//! `WavePortal` contract adapter.
//!
//! DESIGN
//! ======
//! An adapter is a cheap borrow of the wallet plus the signer account read
//! from it at construction time. Callers build a fresh one at every operation
//! boundary with [`WavePortal::connect`] instead of caching one, so the
//! signer always matches the account the wallet currently exposes.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::time::Duration;

use alloy_primitives::{Address, B256, Bytes};
use contract::rpc::{
    self, CallRequest, ETH_ACCOUNTS, ETH_CALL, ETH_GET_FILTER_CHANGES, ETH_GET_TRANSACTION_RECEIPT,
    ETH_NEW_FILTER, ETH_SEND_TRANSACTION, ETH_UNINSTALL_FILTER, LogFilter, RawLog, TransactionReceipt,
    TransactionRequest,
};
use contract::{WaveRecord, decode_all_waves, decode_new_wave, decode_total_waves};
use serde_json::json;

use super::ClientError;
use super::wallet::Eip1193;

/// Delay between `eth_getTransactionReceipt` polls while a wave is mining.
pub const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Handle bound to the fixed contract address, ABI and current signer.
pub struct WavePortal<'w, W: Eip1193 + ?Sized> {
    wallet: &'w W,
    signer: Option<Address>,
}

impl<'w, W: Eip1193 + ?Sized> WavePortal<'w, W> {
    /// Bind to the contract, using the wallet's first authorized account as signer.
    ///
    /// Never prompts: reads `eth_accounts`. With no authorized account the
    /// handle can still read, but [`WavePortal::wave`] fails with `NoSigner`.
    ///
    /// # Errors
    ///
    /// Fails if the wallet rejects `eth_accounts` or returns a malformed account.
    pub async fn connect(wallet: &'w W) -> Result<Self, ClientError> {
        let raw = wallet.request(ETH_ACCOUNTS, json!([])).await?;
        let accounts: Vec<String> = rpc::from_result(raw)?;
        let signer = accounts
            .first()
            .map(|account| contract::parse_account(account))
            .transpose()?;
        Ok(Self { wallet, signer })
    }

    #[must_use]
    pub fn signer(&self) -> Option<Address> {
        self.signer
    }

    async fn call(&self, data: Bytes) -> Result<Bytes, ClientError> {
        let request = CallRequest::wave_portal(self.signer, data);
        let raw = self.wallet.request(ETH_CALL, request.params()).await?;
        Ok(rpc::from_result(raw)?)
    }

    /// `getTotalWaves()`.
    ///
    /// # Errors
    ///
    /// Fails on wallet rejection or undecodable return data.
    pub async fn total_waves(&self) -> Result<u64, ClientError> {
        let out = self.call(contract::encode_get_total_waves()).await?;
        Ok(decode_total_waves(&out)?)
    }

    /// `getAllWaves()`, in contract order.
    ///
    /// # Errors
    ///
    /// Fails on wallet rejection or undecodable return data.
    pub async fn all_waves(&self) -> Result<Vec<WaveRecord>, ClientError> {
        let out = self.call(contract::encode_get_all_waves()).await?;
        Ok(decode_all_waves(&out)?)
    }

    /// Submit `wave(message)` with the fixed gas ceiling.
    ///
    /// Resolves as soon as the wallet accepts and broadcasts the transaction;
    /// await [`PendingWave::wait`] for confirmation.
    ///
    /// # Errors
    ///
    /// Fails with `NoSigner` if no account is authorized, or if the wallet
    /// rejects the transaction.
    pub async fn wave(&self, message: &str) -> Result<PendingWave<'w, W>, ClientError> {
        let from = self.signer.ok_or(ClientError::NoSigner)?;
        let tx = TransactionRequest::wave_portal(from, contract::encode_wave(message));
        let raw = self.wallet.request(ETH_SEND_TRANSACTION, tx.params()).await?;
        let tx_hash: B256 = rpc::from_result(raw)?;
        Ok(PendingWave { wallet: self.wallet, tx_hash })
    }

    /// Install a log filter for `NewWave` and return its id.
    ///
    /// # Errors
    ///
    /// Fails if the wallet rejects the filter.
    pub async fn install_new_wave_filter(&self) -> Result<String, ClientError> {
        let raw = self.wallet.request(ETH_NEW_FILTER, LogFilter::new_waves().params()).await?;
        Ok(rpc::from_result(raw)?)
    }

    /// `NewWave` logs seen by `filter_id` since the last poll. Reorged logs are skipped.
    ///
    /// # Errors
    ///
    /// Fails on wallet rejection (e.g. expired filter) or an undecodable log.
    pub async fn new_wave_changes(&self, filter_id: &str) -> Result<Vec<WaveRecord>, ClientError> {
        let raw = self.wallet.request(ETH_GET_FILTER_CHANGES, json!([filter_id])).await?;
        let logs: Vec<RawLog> = rpc::from_result(raw)?;
        let records = logs
            .iter()
            .filter(|log| !log.removed)
            .map(decode_new_wave)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Remove a filter installed by [`WavePortal::install_new_wave_filter`].
    ///
    /// # Errors
    ///
    /// Fails if the wallet rejects the request.
    pub async fn uninstall_filter(&self, filter_id: &str) -> Result<bool, ClientError> {
        let raw = self.wallet.request(ETH_UNINSTALL_FILTER, json!([filter_id])).await?;
        Ok(rpc::from_result(raw)?)
    }
}

/// A `wave` transaction the wallet accepted but that may not be mined yet.
pub struct PendingWave<'w, W: Eip1193 + ?Sized> {
    wallet: &'w W,
    tx_hash: B256,
}

impl<W: Eip1193 + ?Sized> PendingWave<'_, W> {
    #[must_use]
    pub fn tx_hash(&self) -> B256 {
        self.tx_hash
    }

    /// Poll for the receipt until the transaction is mined.
    ///
    /// There is no timeout: a transaction that never mines keeps this future
    /// pending.
    ///
    /// # Errors
    ///
    /// Fails with `Reverted` if the receipt reports failure, or if a poll is rejected.
    pub async fn wait(self) -> Result<TransactionReceipt, ClientError> {
        loop {
            let raw = self
                .wallet
                .request(ETH_GET_TRANSACTION_RECEIPT, json!([self.tx_hash]))
                .await?;
            if !raw.is_null() {
                let receipt: TransactionReceipt = rpc::from_result(raw)?;
                if receipt.succeeded() {
                    return Ok(receipt);
                }
                return Err(ClientError::Reverted { tx_hash: format!("{:#x}", self.tx_hash) });
            }
            self.wallet.sleep(RECEIPT_POLL_INTERVAL).await;
        }
    }
}
