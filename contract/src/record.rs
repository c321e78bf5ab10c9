//! Client-side projection of one wave.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use alloy_primitives::U256;
use time::OffsetDateTime;

use crate::ContractError;
use crate::abi::{NewWave, Wave};

/// A wave as shown in the history list. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveRecord {
    /// Sender address (EIP-55 checksummed when decoded from the chain).
    pub address: String,
    /// Block time the wave was recorded at.
    pub timestamp: OffsetDateTime,
    /// Free-form wave text.
    pub message: String,
}

impl WaveRecord {
    #[must_use]
    pub fn new(address: impl Into<String>, timestamp: OffsetDateTime, message: impl Into<String>) -> Self {
        Self { address: address.into(), timestamp, message: message.into() }
    }

    /// Build a record from one element of `getAllWaves()`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::TimestampOutOfRange`] for unrepresentable timestamps.
    pub fn from_stored(wave: Wave) -> Result<Self, ContractError> {
        Ok(Self {
            address: wave.waver.to_checksum(None),
            timestamp: timestamp_from_seconds(wave.timestamp)?,
            message: wave.message,
        })
    }

    /// Build a record from a decoded `NewWave` event.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::TimestampOutOfRange`] for unrepresentable timestamps.
    pub fn from_event(event: NewWave) -> Result<Self, ContractError> {
        Ok(Self {
            address: event.from.to_checksum(None),
            timestamp: timestamp_from_seconds(event.timestamp)?,
            message: event.message,
        })
    }
}

/// Convert a contract timestamp in seconds to an instant.
///
/// # Errors
///
/// Returns [`ContractError::TimestampOutOfRange`] if the value does not fit the
/// range supported by [`OffsetDateTime`].
pub fn timestamp_from_seconds(seconds: U256) -> Result<OffsetDateTime, ContractError> {
    let secs = u64::try_from(seconds).map_err(|_| ContractError::TimestampOutOfRange(seconds))?;
    let secs = i64::try_from(secs).map_err(|_| ContractError::TimestampOutOfRange(seconds))?;
    OffsetDateTime::from_unix_timestamp(secs).map_err(|_| ContractError::TimestampOutOfRange(seconds))
}
