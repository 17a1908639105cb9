// oracle-data-core/tests/common/mod.rs
// =============================================================================
// Module: Oracle Data Test Fixtures
// Description: Shared provider and asset fixtures for codec tests.
// Purpose: Keep record sets identical across decode, encode, and diff suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeMap;

use oracle_data_core::AssetStatus;
use oracle_data_core::DataField;
use oracle_data_core::DetailedAsset;
use oracle_data_core::MinimalAsset;
use oracle_data_core::ProviderAsset;
use oracle_data_core::ProviderData;
use oracle_data_core::ProviderVersion;

/// Identifier of the verified fixture asset.
pub const VERIFIED_ID: &str = "8LQW8f7P5d5PZM7GtZEBgaqRPGSzS3DfPuiXrURJ4AJS";
/// Identifier of the scam fixture asset.
pub const SCAM_ID: &str = "9M1wcQwS2XvpbeWALsE5n3j4s97nuipZJzVZ1wXJAqdJ";

/// Builds a description map from `(lang, text)` pairs.
pub fn description(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries.iter().map(|(lang, text)| ((*lang).to_string(), (*text).to_string())).collect()
}

/// Provider profile with an English description.
pub fn provider_data() -> ProviderData {
    ProviderData {
        version: ProviderVersion::Beta,
        name: "Provider name".to_string(),
        link: "https://some.provider.com".to_string(),
        email: "provider@mail.ru".to_string(),
        description: Some(description(&[("en", "Some en description!")])),
    }
}

/// Triples encoding [`provider_data`], in storage order.
pub fn provider_fields() -> Vec<DataField> {
    vec![
        DataField::integer("data_provider_version", 0),
        DataField::string("data_provider_name", "Provider name"),
        DataField::string("data_provider_link", "https://some.provider.com"),
        DataField::string("data_provider_email", "provider@mail.ru"),
        DataField::string("data_provider_lang_list", "en"),
        DataField::string("data_provider_description_<en>", "Some en description!"),
    ]
}

/// Verified asset with every detailed attribute set.
pub fn verified_asset() -> ProviderAsset {
    ProviderAsset::Detailed(DetailedAsset {
        id: VERIFIED_ID.to_string(),
        version: ProviderVersion::Beta,
        status: AssetStatus::Verified,
        logo: "some-logo".to_string(),
        link: "https://btc.com".to_string(),
        ticker: "BTC".to_string(),
        email: "support@btc.com".to_string(),
        description: description(&[("en", "Some BTC en description")]),
    })
}

/// Triples encoding [`verified_asset`], in encoder order.
pub fn verified_asset_fields() -> Vec<DataField> {
    vec![
        DataField::integer(format!("version_<{VERIFIED_ID}>"), 0),
        DataField::integer(format!("status_<{VERIFIED_ID}>"), 2),
        DataField::string(format!("logo_<{VERIFIED_ID}>"), "some-logo"),
        DataField::string(format!("link_<{VERIFIED_ID}>"), "https://btc.com"),
        DataField::string(format!("ticker_<{VERIFIED_ID}>"), "BTC"),
        DataField::string(format!("email_<{VERIFIED_ID}>"), "support@btc.com"),
        DataField::string(format!("description_<en>_<{VERIFIED_ID}>"), "Some BTC en description"),
    ]
}

/// Scam asset carrying only the shared attributes.
pub fn scam_asset() -> ProviderAsset {
    ProviderAsset::Minimal(MinimalAsset {
        id: SCAM_ID.to_string(),
        version: ProviderVersion::Beta,
        status: AssetStatus::Scam,
        link: None,
        ticker: None,
        email: None,
        description: None,
    })
}

/// Triples encoding [`scam_asset`].
pub fn scam_asset_fields() -> Vec<DataField> {
    vec![
        DataField::integer(format!("version_<{SCAM_ID}>"), 0),
        DataField::integer(format!("status_<{SCAM_ID}>"), -2),
    ]
}

/// Provider, verified asset, and scam asset triples in one record set.
pub fn full_record_set() -> Vec<DataField> {
    let mut fields = provider_fields();
    fields.extend(verified_asset_fields());
    fields.extend(scam_asset_fields());
    fields
}

/// Returns `fields` without the triple stored under `key`.
pub fn without_key(fields: &[DataField], key: &str) -> Vec<DataField> {
    fields.iter().filter(|field| field.key != key).cloned().collect()
}
