use super::*;
use crate::net::mock::{self, ACCOUNT, MockWallet};
use crate::net::wallet::WalletError;
use alloy_primitives::U256;
use futures::executor::block_on;
use serde_json::Value;

// =============================================================
// connect
// =============================================================

#[test]
fn connect_adopts_first_account_as_signer() {
    let wallet = MockWallet::new();
    wallet.respond("eth_accounts", json!([ACCOUNT, "0x00000000000000000000000000000000000abc02"]));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();
    assert_eq!(portal.signer(), Some(contract::parse_account(ACCOUNT).unwrap()));
}

#[test]
fn connect_without_accounts_has_no_signer() {
    let wallet = MockWallet::new();
    wallet.respond("eth_accounts", json!([]));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();
    assert!(portal.signer().is_none());
}

#[test]
fn connect_rejects_malformed_account() {
    let wallet = MockWallet::new();
    wallet.respond("eth_accounts", json!(["nope"]));
    let err = block_on(WavePortal::connect(&wallet)).err().unwrap();
    assert!(matches!(err, ClientError::Contract(_)));
}

// =============================================================
// reads
// =============================================================

#[test]
fn total_waves_issues_eth_call_to_contract() {
    let wallet = MockWallet::with_account();
    wallet.respond("eth_call", mock::uint_result(7));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    assert_eq!(block_on(portal.total_waves()).unwrap(), 7);

    let params = wallet.params_of("eth_call");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0][1], "latest");
    assert_eq!(
        params[0][0]["to"].as_str().map(str::to_lowercase).as_deref(),
        Some("0xfaa4660e2b62f09a74a1f6746803e06c07625ad3")
    );
}

#[test]
fn all_waves_decodes_history() {
    let wallet = MockWallet::with_account();
    wallet.respond(
        "eth_call",
        mock::waves_result(vec![contract::Wave {
            waver: contract::parse_account(ACCOUNT).unwrap(),
            message: "gm".to_owned(),
            timestamp: U256::from(1_000u64),
        }]),
    );
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    let waves = block_on(portal.all_waves()).unwrap();
    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].message, "gm");
    assert_eq!(waves[0].timestamp.unix_timestamp(), 1_000);
}

#[test]
fn read_failure_surfaces_wallet_error() {
    let wallet = MockWallet::with_account();
    wallet.fail("eth_call", WalletError::rejected("eth_call", -32000, "header not found"));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();
    let err = block_on(portal.total_waves()).unwrap_err();
    assert!(matches!(err, ClientError::Wallet(WalletError::Rejected { code: -32000, .. })));
}

// =============================================================
// wave + confirmation
// =============================================================

#[test]
fn wave_requires_signer() {
    let wallet = MockWallet::new();
    wallet.respond("eth_accounts", json!([]));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();
    let err = block_on(portal.wave("hi")).err().unwrap();
    assert!(matches!(err, ClientError::NoSigner));
    assert_eq!(wallet.calls("eth_sendTransaction"), 0);
}

#[test]
fn wave_sends_transaction_with_gas_ceiling() {
    let wallet = MockWallet::with_account();
    wallet.respond("eth_sendTransaction", json!(format!("{:#x}", mock::tx_hash())));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    let pending = block_on(portal.wave("hello")).unwrap();
    assert_eq!(pending.tx_hash(), mock::tx_hash());

    let params = wallet.params_of("eth_sendTransaction");
    assert_eq!(params[0][0]["gas"], "0x493e0");
    assert_eq!(params[0][0]["from"].as_str().map(str::to_lowercase).as_deref(), Some(ACCOUNT));
}

#[test]
fn wait_polls_until_receipt_appears() {
    let wallet = MockWallet::with_account();
    wallet.respond("eth_sendTransaction", json!(format!("{:#x}", mock::tx_hash())));
    wallet.enqueue("eth_getTransactionReceipt", Value::Null);
    wallet.enqueue("eth_getTransactionReceipt", Value::Null);
    wallet.enqueue("eth_getTransactionReceipt", mock::receipt(1));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    let pending = block_on(portal.wave("hello")).unwrap();
    let receipt = block_on(pending.wait()).unwrap();

    assert_eq!(receipt.transaction_hash, mock::tx_hash());
    assert_eq!(wallet.calls("eth_getTransactionReceipt"), 3);
    let sleeps = wallet.journal().borrow().iter().filter(|e| *e == "sleep").count();
    assert_eq!(sleeps, 2);
}

#[test]
fn wait_reports_reverted_receipt() {
    let wallet = MockWallet::with_account();
    wallet.respond("eth_sendTransaction", json!(format!("{:#x}", mock::tx_hash())));
    wallet.respond("eth_getTransactionReceipt", mock::receipt(0));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    let pending = block_on(portal.wave("hello")).unwrap();
    let err = block_on(pending.wait()).unwrap_err();
    assert!(matches!(err, ClientError::Reverted { ref tx_hash } if *tx_hash == format!("{:#x}", mock::tx_hash())));
}

// =============================================================
// filters
// =============================================================

#[test]
fn new_wave_changes_decode_logs_and_skip_removed() {
    let wallet = MockWallet::with_account();
    let mut removed = mock::new_wave_log(ACCOUNT, 5, "dropped");
    removed["removed"] = json!(true);
    wallet.respond(
        "eth_getFilterChanges",
        json!([mock::new_wave_log(ACCOUNT, 1_000, "hi"), removed]),
    );
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    let records = block_on(portal.new_wave_changes("0x1")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message, "hi");
    assert_eq!(records[0].address.to_lowercase(), ACCOUNT);
    assert_eq!(wallet.params_of("eth_getFilterChanges")[0], json!(["0x1"]));
}

#[test]
fn install_filter_targets_contract_and_topic() {
    let wallet = MockWallet::with_account();
    wallet.respond("eth_newFilter", json!("0x9"));
    let portal = block_on(WavePortal::connect(&wallet)).unwrap();

    assert_eq!(block_on(portal.install_new_wave_filter()).unwrap(), "0x9");
    let params = wallet.params_of("eth_newFilter");
    assert_eq!(params[0][0]["topics"][0], format!("{:#x}", contract::new_wave_topic()));
}
