use super::*;

#[test]
fn wave_portal_address_matches_deployment() {
    assert_eq!(
        WAVE_PORTAL_ADDRESS.to_checksum(None),
        "0xfAa4660e2b62f09a74a1f6746803E06c07625Ad3"
    );
}

#[test]
fn gas_limit_is_fixed_ceiling() {
    assert_eq!(WAVE_GAS_LIMIT, 300_000);
}

#[test]
fn parse_account_accepts_lowercase_wallet_output() {
    let addr = parse_account("0xfaa4660e2b62f09a74a1f6746803e06c07625ad3").unwrap();
    assert_eq!(addr, WAVE_PORTAL_ADDRESS);
}

#[test]
fn parse_account_rejects_garbage() {
    let err = parse_account("not-an-address").unwrap_err();
    assert!(matches!(err, ContractError::InvalidAccount(ref s) if s == "not-an-address"));
}
