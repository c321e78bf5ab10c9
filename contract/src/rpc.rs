//! JSON-RPC request and response shapes exchanged with an EIP-1193 wallet.
//!
//! DESIGN
//! ======
//! Requests serialize to the exact `params` arrays the wallet expects so the
//! client never hand-builds JSON. Responses deserialize only the fields the
//! client reads; everything else the node returns is ignored.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use alloy_primitives::{Address, B256, Bytes, U64};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{ContractError, WAVE_GAS_LIMIT, WAVE_PORTAL_ADDRESS, new_wave_topic};

pub const ETH_ACCOUNTS: &str = "eth_accounts";
pub const ETH_REQUEST_ACCOUNTS: &str = "eth_requestAccounts";
pub const ETH_CALL: &str = "eth_call";
pub const ETH_SEND_TRANSACTION: &str = "eth_sendTransaction";
pub const ETH_GET_TRANSACTION_RECEIPT: &str = "eth_getTransactionReceipt";
pub const ETH_NEW_FILTER: &str = "eth_newFilter";
pub const ETH_GET_FILTER_CHANGES: &str = "eth_getFilterChanges";
pub const ETH_UNINSTALL_FILTER: &str = "eth_uninstallFilter";

/// Read-only contract call (`eth_call`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    pub to: Address,
    pub data: Bytes,
}

impl CallRequest {
    /// Call against the `WavePortal` contract, optionally attributed to `from`.
    #[must_use]
    pub fn wave_portal(from: Option<Address>, data: Bytes) -> Self {
        Self { from, to: WAVE_PORTAL_ADDRESS, data }
    }

    /// `eth_call` params, evaluated at the latest block.
    #[must_use]
    pub fn params(&self) -> Value {
        json!([self, "latest"])
    }
}

/// State-mutating contract call (`eth_sendTransaction`), signed by the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    /// Gas ceiling as a hex quantity.
    pub gas: String,
}

impl TransactionRequest {
    /// Transaction to the `WavePortal` contract with the fixed gas ceiling.
    #[must_use]
    pub fn wave_portal(from: Address, data: Bytes) -> Self {
        Self { from, to: WAVE_PORTAL_ADDRESS, data, gas: quantity(WAVE_GAS_LIMIT) }
    }

    #[must_use]
    pub fn params(&self) -> Value {
        json!([self])
    }
}

/// Log filter installed with `eth_newFilter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogFilter {
    pub address: Address,
    pub topics: Vec<B256>,
}

impl LogFilter {
    /// Filter matching every `NewWave` emitted by the `WavePortal` contract.
    #[must_use]
    pub fn new_waves() -> Self {
        Self { address: WAVE_PORTAL_ADDRESS, topics: vec![new_wave_topic()] }
    }

    #[must_use]
    pub fn params(&self) -> Value {
        json!([self])
    }
}

/// A log entry as returned by `eth_getFilterChanges`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    /// Set when a reorg dropped the log.
    #[serde(default)]
    pub removed: bool,
}

/// Mined transaction receipt (`eth_getTransactionReceipt`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub block_number: Option<U64>,
    /// `0x1` on success, `0x0` on revert; absent on pre-Byzantium chains.
    #[serde(default)]
    pub status: Option<U64>,
}

impl TransactionReceipt {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status.is_none_or(|status| status == U64::from(1))
    }
}

/// Encode an integer as an RPC hex quantity (`0x`-prefixed, no leading zeros).
#[must_use]
pub fn quantity(value: u64) -> String {
    format!("{value:#x}")
}

/// Deserialize a JSON-RPC result value into `T`.
///
/// # Errors
///
/// Returns [`ContractError::Payload`] if the value has the wrong shape.
pub fn from_result<T: DeserializeOwned>(value: Value) -> Result<T, ContractError> {
    Ok(serde_json::from_value(value)?)
}
