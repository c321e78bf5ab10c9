//! Scripted in-memory wallet for driving net code in unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use alloy_primitives::{B256, U256};
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use serde_json::{Value, json};

use super::wallet::{Eip1193, WalletError};

pub(crate) const ACCOUNT: &str = "0x00000000000000000000000000000000000abc01";

/// Responses are looked up per method: queued one-shot replies first, then a
/// sticky reply. Unscripted methods fail with JSON-RPC `-32601`.
#[derive(Default)]
pub(crate) struct MockWallet {
    queued: RefCell<HashMap<String, VecDeque<Result<Value, WalletError>>>>,
    sticky: RefCell<HashMap<String, Value>>,
    requests: RefCell<Vec<(String, Value)>>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl MockWallet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Wallet with one authorized account.
    pub(crate) fn with_account() -> Self {
        let wallet = Self::new();
        wallet.respond("eth_accounts", json!([ACCOUNT]));
        wallet
    }

    pub(crate) fn respond(&self, method: &str, result: Value) {
        self.sticky.borrow_mut().insert(method.to_owned(), result);
    }

    pub(crate) fn enqueue(&self, method: &str, result: Value) {
        self.push(method, Ok(result));
    }

    pub(crate) fn fail(&self, method: &str, err: WalletError) {
        self.push(method, Err(err));
    }

    fn push(&self, method: &str, reply: Result<Value, WalletError>) {
        self.queued
            .borrow_mut()
            .entry(method.to_owned())
            .or_default()
            .push_back(reply);
    }

    /// Shared call log: one entry per request (method name) and per sleep.
    pub(crate) fn journal(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.journal)
    }

    pub(crate) fn calls(&self, method: &str) -> usize {
        self.requests.borrow().iter().filter(|(m, _)| m == method).count()
    }

    pub(crate) fn params_of(&self, method: &str) -> Vec<Value> {
        self.requests
            .borrow()
            .iter()
            .filter(|(m, _)| m == method)
            .map(|(_, p)| p.clone())
            .collect()
    }
}

#[async_trait(?Send)]
impl Eip1193 for MockWallet {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.journal.borrow_mut().push(method.to_owned());
        self.requests.borrow_mut().push((method.to_owned(), params));

        let queued = self
            .queued
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front);
        if let Some(reply) = queued {
            return reply;
        }
        self.sticky
            .borrow()
            .get(method)
            .cloned()
            .ok_or_else(|| WalletError::rejected(method, -32601, "method not scripted"))
    }

    async fn sleep(&self, _duration: Duration) {
        self.journal.borrow_mut().push("sleep".to_owned());
    }
}

/// Hex-encoded `eth_call` result for a single `uint256`.
pub(crate) fn uint_result(value: u64) -> Value {
    hex_value(&(U256::from(value),).abi_encode_params())
}

/// Hex-encoded `eth_call` result for `getAllWaves()`.
pub(crate) fn waves_result(waves: Vec<contract::Wave>) -> Value {
    hex_value(&(waves,).abi_encode_params())
}

/// A `NewWave` log as returned by `eth_getFilterChanges`.
pub(crate) fn new_wave_log(from: &str, timestamp: u64, message: &str) -> Value {
    let from = contract::parse_account(from).unwrap();
    json!({
        "address": contract::WAVE_PORTAL_ADDRESS.to_checksum(None),
        "topics": [
            format!("{:#x}", contract::new_wave_topic()),
            format!("{:#x}", from.into_word()),
        ],
        "data": hex_value(&(U256::from(timestamp), message.to_owned()).abi_encode_params()),
        "removed": false
    })
}

pub(crate) fn receipt(status: u64) -> Value {
    json!({
        "transactionHash": format!("{:#x}", tx_hash()),
        "blockNumber": "0x2a",
        "status": format!("{status:#x}")
    })
}

pub(crate) fn tx_hash() -> B256 {
    B256::repeat_byte(0xfe)
}

fn hex_value(bytes: &[u8]) -> Value {
    Value::String(format!("0x{}", alloy_primitives::hex::encode(bytes)))
}
