// oracle-data-core/tests/identifiers.rs
// ============================================================================
// Module: Identifier Tests
// Description: Tests for asset id and status validators.
// Purpose: Pin the Base58 alphabet and the closed status set.
// Dependencies: oracle-data-core, serde_json
// ============================================================================
//! ## Overview
//! Validators are standalone helpers; decode and encode never call them.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use oracle_data_core::AssetStatus;
use oracle_data_core::ProviderVersion;
use oracle_data_core::StatusTier;
use oracle_data_core::core::identifiers::BASE58_ALPHABET;
use oracle_data_core::core::identifiers::MAX_ASSET_ID_LENGTH;
use oracle_data_core::is_valid_asset_id;
use oracle_data_core::is_valid_status;

#[test]
fn asset_ids_accept_base58() {
    assert!(is_valid_asset_id("8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS"));
    assert!(is_valid_asset_id(BASE58_ALPHABET));
    assert!(is_valid_asset_id("1"));
    assert!(is_valid_asset_id(&"z".repeat(MAX_ASSET_ID_LENGTH)));
}

#[test]
fn asset_ids_reject_excluded_characters_and_lengths() {
    for id in ["0abc", "Oabc", "Iabc", "labc", "ab-c", "ab c", "", "абв"] {
        assert!(!is_valid_asset_id(id), "{id} should be rejected");
    }
    assert!(!is_valid_asset_id(&"z".repeat(MAX_ASSET_ID_LENGTH + 1)));
}

#[test]
fn statuses_cover_the_closed_range() {
    for status in -2 ..= 2 {
        assert!(is_valid_status(status));
    }
    assert!(!is_valid_status(-3));
    assert!(!is_valid_status(3));
    let wire: Vec<_> = AssetStatus::ALL.iter().map(|status| status.as_i64()).collect();
    assert_eq!(wire, vec![-2, -1, 0, 1, 2]);
}

#[test]
fn status_tiers_split_on_sign() {
    let tiers: Vec<_> = AssetStatus::ALL.iter().map(|status| status.tier()).collect();
    assert_eq!(
        tiers,
        vec![
            StatusTier::Minimal,
            StatusTier::Minimal,
            StatusTier::Minimal,
            StatusTier::Detailed,
            StatusTier::Detailed
        ]
    );
}

#[test]
fn enums_serialize_as_wire_integers() {
    assert_eq!(serde_json::to_string(&AssetStatus::Suspicious).expect("serialize"), "-1");
    assert_eq!(serde_json::to_string(&ProviderVersion::Beta).expect("serialize"), "0");
    let status: AssetStatus = serde_json::from_str("2").expect("deserialize");
    assert_eq!(status, AssetStatus::Verified);
    assert!(serde_json::from_str::<AssetStatus>("7").is_err());
}
