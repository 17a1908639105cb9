// oracle-data-core/tests/proptest_codec.rs
// ============================================================================
// Module: Codec Property-Based Tests
// Description: Property tests for decode/encode/diff invariants.
// Purpose: Detect panics and round-trip drift across wide input ranges.
// ============================================================================

//! Property-based tests for codec invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use oracle_data_core::AssetStatus;
use oracle_data_core::DataField;
use oracle_data_core::DetailedAsset;
use oracle_data_core::EncodeError;
use oracle_data_core::FieldType;
use oracle_data_core::FieldValue;
use oracle_data_core::MinimalAsset;
use oracle_data_core::ProviderAsset;
use oracle_data_core::ProviderData;
use oracle_data_core::ProviderVersion;
use oracle_data_core::ResponseStatus;
use oracle_data_core::decode_assets;
use oracle_data_core::decode_provider;
use oracle_data_core::diff_by_fields;
use oracle_data_core::encode_asset;
use oracle_data_core::encode_provider;
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    ".{0,24}"
}

/// Any language code the lang list can carry, including punctuation.
fn lang() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_<>. -]{1,4}"
}

fn description() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(lang(), text(), 0 .. 4)
}

/// A code that is empty or contains the lang-list separator.
fn bad_lang() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{0,2},[a-z]{0,2}"]
}

fn provider_strategy() -> impl Strategy<Value = ProviderData> {
    (text(), text(), text(), prop::option::of(description())).prop_map(
        |(name, link, email, description)| ProviderData {
            version: ProviderVersion::Beta,
            name,
            link,
            email,
            description,
        },
    )
}

fn asset_strategy() -> impl Strategy<Value = ProviderAsset> {
    let id = "[1-9A-HJ-NP-Za-km-z]{1,44}";
    let minimal = (
        id,
        prop::sample::select(vec![
            AssetStatus::Scam,
            AssetStatus::Suspicious,
            AssetStatus::NotVerified,
        ]),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(description()),
    )
        .prop_map(|(id, status, link, ticker, email, description)| {
            ProviderAsset::Minimal(MinimalAsset {
                id,
                version: ProviderVersion::Beta,
                status,
                link,
                ticker,
                email,
                description,
            })
        });
    let detailed = (
        id,
        prop::sample::select(vec![AssetStatus::Detailed, AssetStatus::Verified]),
        (text(), text(), text(), text()),
        description(),
    )
        .prop_map(|(id, status, (logo, link, ticker, email), description)| {
            ProviderAsset::Detailed(DetailedAsset {
                id,
                version: ProviderVersion::Beta,
                status,
                logo,
                link,
                ticker,
                email,
                description,
            })
        });
    prop_oneof![minimal, detailed]
}

fn field_strategy() -> impl Strategy<Value = DataField> {
    let key = prop_oneof![
        Just("data_provider_version".to_string()),
        Just("data_provider_lang_list".to_string()),
        "(status|version|link|logo|ticker|email)_<[a-c]{1,2}>",
        "data_provider_[a-z]{1,8}",
        ".{0,12}",
    ];
    let field_type = prop::sample::select(vec![
        FieldType::Integer,
        FieldType::String,
        FieldType::Binary,
        FieldType::Boolean,
    ]);
    let value = prop_oneof![
        (-3_i64 ..= 3).prop_map(FieldValue::Integer),
        any::<i64>().prop_map(FieldValue::Integer),
        "[a-z,]{0,8}".prop_map(FieldValue::Text),
        any::<bool>().prop_map(FieldValue::Boolean),
    ];
    (key, field_type, value)
        .prop_map(|(key, field_type, value)| DataField::new(key, field_type, value))
}

/// Keeps the first triple per key; self-diff is empty only without duplicates.
fn unique_keys(fields: Vec<DataField>) -> Vec<DataField> {
    let mut seen = std::collections::BTreeSet::new();
    fields.into_iter().filter(|field| seen.insert(field.key.clone())).collect()
}

/// Language list covering every language of `description`.
fn lang_list_field(description: &BTreeMap<String, String>) -> DataField {
    let langs: Vec<&str> = description.keys().map(String::as_str).collect();
    DataField::string("data_provider_lang_list", langs.join(","))
}

proptest! {
    #[test]
    fn provider_roundtrips(data in provider_strategy()) {
        let fields = encode_provider(&data).expect("encode");
        let response = decode_provider(&fields);
        prop_assert_eq!(response.content(), Some(&data.normalized()));
    }

    #[test]
    fn asset_roundtrips(asset in asset_strategy()) {
        let mut fields = encode_asset(&asset).expect("encode");
        let langs = asset.description().cloned().unwrap_or_default();
        fields.push(lang_list_field(&langs));
        let responses = decode_assets(&fields);
        prop_assert_eq!(responses.len(), 1);
        prop_assert_eq!(responses[0].content(), Some(&asset.normalized()));
    }

    #[test]
    fn unlistable_languages_are_rejected(
        data in provider_strategy(),
        lang in bad_lang(),
        text in text(),
    ) {
        let mut data = data;
        data.description.get_or_insert_with(BTreeMap::new).insert(lang.clone(), text);
        let rejected = matches!(
            encode_provider(&data),
            Err(EncodeError::InvalidLanguage { lang: reported, .. }) if reported == lang
        );
        prop_assert!(rejected);
    }

    #[test]
    fn decode_is_total(fields in prop::collection::vec(field_strategy(), 0 .. 24)) {
        let provider = decode_provider(&fields);
        prop_assert!(matches!(provider.status(), ResponseStatus::Ok | ResponseStatus::Error));
        prop_assert_eq!(provider.is_ok(), provider.errors().is_empty());
        for response in decode_assets(&fields) {
            prop_assert_eq!(response.is_ok(), response.errors().is_empty());
        }
    }

    #[test]
    fn self_diff_is_empty(fields in prop::collection::vec(field_strategy(), 0 .. 24)) {
        let fields = unique_keys(fields);
        prop_assert!(diff_by_fields(&fields, &fields).is_empty());
    }

    #[test]
    fn diff_is_subsequence_of_next(
        previous in prop::collection::vec(field_strategy(), 0 .. 12),
        next in prop::collection::vec(field_strategy(), 0 .. 12),
    ) {
        let delta = diff_by_fields(&previous, &next);
        let mut remaining = next.iter();
        for field in &delta {
            prop_assert!(remaining.any(|candidate| candidate == field));
        }
        prop_assert_eq!(delta, diff_by_fields(&previous, &next));
    }

    #[test]
    fn encoding_is_deterministic(data in provider_strategy(), asset in asset_strategy()) {
        prop_assert_eq!(encode_provider(&data), encode_provider(&data));
        prop_assert_eq!(encode_asset(&asset), encode_asset(&asset));
    }
}
