//! Solidity bindings and codecs for the three contract methods and one event.

#[cfg(test)]
#[path = "abi_test.rs"]
mod abi_test;

use alloy_primitives::{B256, Bytes};
use alloy_sol_types::{SolCall, SolEvent, sol};

use crate::ContractError;
use crate::record::WaveRecord;
use crate::rpc::RawLog;

sol! {
    /// One stored wave as returned by `getAllWaves`.
    #[derive(Debug, PartialEq, Eq)]
    struct Wave {
        address waver;
        string message;
        uint256 timestamp;
    }

    function wave(string _message) external;
    function getTotalWaves() external view returns (uint256);
    function getAllWaves() external view returns (Wave[] memory);

    /// Emitted by `wave` once the transaction is mined.
    #[derive(Debug, PartialEq, Eq)]
    event NewWave(address indexed from, uint256 timestamp, string message);
}

/// Calldata for `wave(message)`.
#[must_use]
pub fn encode_wave(message: &str) -> Bytes {
    waveCall { _message: message.to_owned() }.abi_encode().into()
}

/// Calldata for `getTotalWaves()`.
#[must_use]
pub fn encode_get_total_waves() -> Bytes {
    getTotalWavesCall {}.abi_encode().into()
}

/// Calldata for `getAllWaves()`.
#[must_use]
pub fn encode_get_all_waves() -> Bytes {
    getAllWavesCall {}.abi_encode().into()
}

/// Decode the `getTotalWaves()` return data.
///
/// # Errors
///
/// Fails if the data is not a single `uint256` or the value exceeds `u64`.
pub fn decode_total_waves(data: &[u8]) -> Result<u64, ContractError> {
    let total = getTotalWavesCall::abi_decode_returns(data)?;
    u64::try_from(total).map_err(|_| ContractError::CountOverflow(total))
}

/// Decode the `getAllWaves()` return data into records, preserving contract order.
///
/// # Errors
///
/// Fails if the data is not a `Wave[]` or any timestamp is out of range.
pub fn decode_all_waves(data: &[u8]) -> Result<Vec<WaveRecord>, ContractError> {
    getAllWavesCall::abi_decode_returns(data)?
        .into_iter()
        .map(WaveRecord::from_stored)
        .collect()
}

/// Topic 0 of the `NewWave` event.
#[must_use]
pub fn new_wave_topic() -> B256 {
    NewWave::SIGNATURE_HASH
}

/// Decode a `NewWave` log delivered by a log filter.
///
/// # Errors
///
/// Fails if the log is not a `NewWave` emission or its timestamp is out of range.
pub fn decode_new_wave(log: &RawLog) -> Result<WaveRecord, ContractError> {
    let event = NewWave::decode_raw_log(log.topics.iter().copied(), &log.data)?;
    WaveRecord::from_event(event)
}
