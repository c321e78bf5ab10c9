//! Wire layer for the `WavePortal` contract.
//!
//! This crate owns everything the client needs to talk to the deployed
//! contract through an EIP-1193 wallet: the fixed address and gas ceiling,
//! Solidity bindings, calldata/return/log codecs, and the JSON-RPC request and
//! response shapes. It has no browser dependencies so the codecs can be tested
//! natively.

mod abi;
mod record;
pub mod rpc;

use alloy_primitives::{Address, U256, address};

pub use abi::{
    NewWave, Wave, decode_all_waves, decode_new_wave, decode_total_waves, encode_get_all_waves,
    encode_get_total_waves, encode_wave, new_wave_topic,
};
pub use record::{WaveRecord, timestamp_from_seconds};

/// Deployed `WavePortal` contract the client is bound to.
pub const WAVE_PORTAL_ADDRESS: Address = address!("0xfAa4660e2b62f09a74a1f6746803E06c07625Ad3");

/// Gas ceiling attached to every `wave(string)` transaction.
pub const WAVE_GAS_LIMIT: u64 = 300_000;

/// Errors produced while encoding requests or decoding contract data.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Return data or log data did not match the contract ABI.
    #[error("ABI decode failed: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    /// A JSON-RPC result did not have the expected shape.
    #[error("malformed RPC payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A contract timestamp (seconds) cannot be represented as an instant.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(U256),

    /// `getTotalWaves` returned a value wider than `u64`.
    #[error("wave count does not fit in u64: {0}")]
    CountOverflow(U256),

    /// A wallet account string is not a 20-byte hex address.
    #[error("invalid account address {0:?}")]
    InvalidAccount(String),
}

/// Parse a wallet account string (as returned by `eth_accounts`) into an address.
///
/// # Errors
///
/// Returns [`ContractError::InvalidAccount`] if the string is not a hex address.
pub fn parse_account(account: &str) -> Result<Address, ContractError> {
    account
        .parse::<Address>()
        .map_err(|_| ContractError::InvalidAccount(account.to_owned()))
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
