// oracle-data-core/src/runtime/dispatch.rs
// ============================================================================
// Module: Version and Tier Dispatch
// Description: Closed schema tables keyed by protocol version and status tier.
// Purpose: Select the decode strategy for the provider and for each asset.
// Dependencies: crate::core::*, crate::runtime::{schema, store, template, trace}
// ============================================================================

//! ## Overview
//! Provider records are dispatched on `data_provider_version`. Assets are
//! discovered through their `status_<id>` keys, in the order those keys first
//! appear in the raw list, and dispatched on `(version, status tier)`.
//!
//! Dispatch failures are reported as a single-error response for the entity
//! concerned and never affect other assets:
//! - provider version failures go under `version` with empty content;
//! - asset version failures go under `version`, status failures under
//!   `status`, both with content `{id}`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::constants::ASSET_EMAIL_PATTERN;
use crate::core::constants::ASSET_LINK_PATTERN;
use crate::core::constants::ASSET_LOGO_PATTERN;
use crate::core::constants::ASSET_STATUS_PATTERN;
use crate::core::constants::ASSET_TICKER_PATTERN;
use crate::core::constants::ASSET_VERSION_PATTERN;
use crate::core::constants::AssetStatus;
use crate::core::constants::DATA_PROVIDER_EMAIL_KEY;
use crate::core::constants::DATA_PROVIDER_LINK_KEY;
use crate::core::constants::DATA_PROVIDER_NAME_KEY;
use crate::core::constants::DATA_PROVIDER_VERSION_KEY;
use crate::core::constants::ProviderVersion;
use crate::core::constants::StatusTier;
use crate::core::error::DecodeError;
use crate::core::field::DataField;
use crate::core::field::FieldType;
use crate::core::model::Description;
use crate::core::model::PartialProviderAsset;
use crate::core::model::PartialProviderData;
use crate::core::response::AssetResponse;
use crate::core::response::ProviderResponse;
use crate::core::response::Response;
use crate::core::response::ResponseError;
use crate::runtime::schema::DecodeContext;
use crate::runtime::schema::Processor;
use crate::runtime::schema::Requirement;
use crate::runtime::schema::Schema;
use crate::runtime::store::FieldStore;
use crate::runtime::store::get_integer;
use crate::runtime::template::asset_id_from_key;
use crate::runtime::template::render_asset_key;
use crate::runtime::trace::DecodeTrace;

/// Result path for version dispatch failures.
const VERSION_PATH: &str = "version";
/// Result path for status dispatch failures.
const STATUS_PATH: &str = "status";

// ============================================================================
// SECTION: Provider Schemas
// ============================================================================

/// Provider processors for [`ProviderVersion::Beta`].
static PROVIDER_BETA_PROCESSORS: [Processor<PartialProviderData>; 5] = [
    Processor::Integer {
        pattern: DATA_PROVIDER_VERSION_KEY,
        path: VERSION_PATH,
        requirement: Requirement::Required,
        assign: provider_version,
    },
    Processor::Text {
        pattern: DATA_PROVIDER_NAME_KEY,
        path: "name",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: provider_name,
    },
    Processor::Text {
        pattern: DATA_PROVIDER_LINK_KEY,
        path: "link",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: provider_link,
    },
    Processor::Text {
        pattern: DATA_PROVIDER_EMAIL_KEY,
        path: "email",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: provider_email,
    },
    Processor::Description {
        requirement: Requirement::Required,
        assign: provider_description,
    },
];

/// Provider schema for [`ProviderVersion::Beta`].
static PROVIDER_BETA: Schema<PartialProviderData> =
    Schema::new("provider/beta", &PROVIDER_BETA_PROCESSORS);

/// Assigns the provider version.
fn provider_version(partial: &mut PartialProviderData, value: i64) -> Result<(), DecodeError> {
    partial.version = Some(ProviderVersion::try_from(value)?);
    Ok(())
}

/// Assigns the provider name.
fn provider_name(partial: &mut PartialProviderData, value: String) {
    partial.name = Some(value);
}

/// Assigns the provider link.
fn provider_link(partial: &mut PartialProviderData, value: String) {
    partial.link = Some(value);
}

/// Assigns the provider email.
fn provider_email(partial: &mut PartialProviderData, value: String) {
    partial.email = Some(value);
}

/// Assigns the provider description.
fn provider_description(partial: &mut PartialProviderData, value: Description) {
    partial.description = Some(value);
}

// ============================================================================
// SECTION: Asset Schemas
// ============================================================================

/// Asset processors for [`ProviderVersion::Beta`], minimal tier.
static ASSET_BETA_MINIMAL_PROCESSORS: [Processor<PartialProviderAsset>; 7] = [
    Processor::Integer {
        pattern: ASSET_VERSION_PATTERN,
        path: VERSION_PATH,
        requirement: Requirement::Required,
        assign: asset_version,
    },
    Processor::AssetId {
        assign: asset_id,
    },
    Processor::Integer {
        pattern: ASSET_STATUS_PATTERN,
        path: STATUS_PATH,
        requirement: Requirement::Required,
        assign: asset_status,
    },
    Processor::Text {
        pattern: ASSET_LINK_PATTERN,
        path: "link",
        field_type: FieldType::String,
        requirement: Requirement::Optional,
        assign: asset_link,
    },
    Processor::Text {
        pattern: ASSET_TICKER_PATTERN,
        path: "ticker",
        field_type: FieldType::String,
        requirement: Requirement::Optional,
        assign: asset_ticker,
    },
    Processor::Text {
        pattern: ASSET_EMAIL_PATTERN,
        path: "email",
        field_type: FieldType::String,
        requirement: Requirement::Optional,
        assign: asset_email,
    },
    Processor::Description {
        requirement: Requirement::Optional,
        assign: asset_description,
    },
];

/// Asset processors for [`ProviderVersion::Beta`], detailed tier.
static ASSET_BETA_DETAILED_PROCESSORS: [Processor<PartialProviderAsset>; 8] = [
    Processor::Integer {
        pattern: ASSET_VERSION_PATTERN,
        path: VERSION_PATH,
        requirement: Requirement::Required,
        assign: asset_version,
    },
    Processor::AssetId {
        assign: asset_id,
    },
    Processor::Integer {
        pattern: ASSET_STATUS_PATTERN,
        path: STATUS_PATH,
        requirement: Requirement::Required,
        assign: asset_status,
    },
    Processor::Text {
        pattern: ASSET_LOGO_PATTERN,
        path: "logo",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: asset_logo,
    },
    Processor::Text {
        pattern: ASSET_LINK_PATTERN,
        path: "link",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: asset_link,
    },
    Processor::Text {
        pattern: ASSET_TICKER_PATTERN,
        path: "ticker",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: asset_ticker,
    },
    Processor::Text {
        pattern: ASSET_EMAIL_PATTERN,
        path: "email",
        field_type: FieldType::String,
        requirement: Requirement::Required,
        assign: asset_email,
    },
    Processor::Description {
        requirement: Requirement::Required,
        assign: asset_description,
    },
];

/// Minimal-tier asset schema for [`ProviderVersion::Beta`].
static ASSET_BETA_MINIMAL: Schema<PartialProviderAsset> =
    Schema::new("asset/beta/minimal", &ASSET_BETA_MINIMAL_PROCESSORS);

/// Detailed-tier asset schema for [`ProviderVersion::Beta`].
static ASSET_BETA_DETAILED: Schema<PartialProviderAsset> =
    Schema::new("asset/beta/detailed", &ASSET_BETA_DETAILED_PROCESSORS);

/// Assigns the asset version.
fn asset_version(partial: &mut PartialProviderAsset, value: i64) -> Result<(), DecodeError> {
    partial.version = Some(ProviderVersion::try_from(value)?);
    Ok(())
}

/// Assigns the asset status.
fn asset_status(partial: &mut PartialProviderAsset, value: i64) -> Result<(), DecodeError> {
    partial.status = Some(AssetStatus::try_from(value)?);
    Ok(())
}

/// Assigns the asset identifier.
fn asset_id(partial: &mut PartialProviderAsset, value: String) {
    partial.id = Some(value);
}

/// Assigns the asset logo.
fn asset_logo(partial: &mut PartialProviderAsset, value: String) {
    partial.logo = Some(value);
}

/// Assigns the asset link.
fn asset_link(partial: &mut PartialProviderAsset, value: String) {
    partial.link = Some(value);
}

/// Assigns the asset ticker.
fn asset_ticker(partial: &mut PartialProviderAsset, value: String) {
    partial.ticker = Some(value);
}

/// Assigns the asset email.
fn asset_email(partial: &mut PartialProviderAsset, value: String) {
    partial.email = Some(value);
}

/// Assigns the asset description.
fn asset_description(partial: &mut PartialProviderAsset, value: Description) {
    partial.description = Some(value);
}

// ============================================================================
// SECTION: Dispatch Tables
// ============================================================================

/// Returns the provider schema registered for `version`.
#[must_use]
pub const fn provider_schema(version: ProviderVersion) -> &'static Schema<PartialProviderData> {
    match version {
        ProviderVersion::Beta => &PROVIDER_BETA,
    }
}

/// Returns the asset schema registered for `version` and `tier`.
#[must_use]
pub const fn asset_schema(
    version: ProviderVersion,
    tier: StatusTier,
) -> &'static Schema<PartialProviderAsset> {
    match (version, tier) {
        (ProviderVersion::Beta, StatusTier::Minimal) => &ASSET_BETA_MINIMAL,
        (ProviderVersion::Beta, StatusTier::Detailed) => &ASSET_BETA_DETAILED,
    }
}

// ============================================================================
// SECTION: Provider Decoding
// ============================================================================

/// Decodes the provider profile, reporting events to `trace`.
pub fn decode_provider_with_trace(
    fields: &[DataField],
    trace: &mut dyn DecodeTrace,
) -> ProviderResponse {
    let store = FieldStore::from_fields(fields);
    let version = match get_integer(&store, DATA_PROVIDER_VERSION_KEY)
        .and_then(ProviderVersion::try_from)
    {
        Ok(version) => version,
        Err(error) => {
            trace.on_dispatch_failed(None, &error);
            return dispatch_failure(PartialProviderData::default(), VERSION_PATH, error);
        }
    };
    provider_schema(version).run(&DecodeContext::provider(&store), trace)
}

// ============================================================================
// SECTION: Asset Decoding
// ============================================================================

/// Returns discovered asset identifiers in discovery order.
pub fn discover_asset_ids<'s, 'a>(
    store: &'s FieldStore<'a>,
) -> impl Iterator<Item = &'a str> + 's {
    store.keys().filter_map(asset_id_from_key)
}

/// Decodes every discovered asset, reporting events to `trace`.
pub fn decode_assets_with_trace(
    fields: &[DataField],
    trace: &mut dyn DecodeTrace,
) -> Vec<AssetResponse> {
    let store = FieldStore::from_fields(fields);
    discover_asset_ids(&store).map(|asset_id| decode_asset(&store, asset_id, trace)).collect()
}

/// Decodes one asset after version and status dispatch.
fn decode_asset(
    store: &FieldStore<'_>,
    asset_id: &str,
    trace: &mut dyn DecodeTrace,
) -> AssetResponse {
    let (version, status) = match select_asset_keys(store, asset_id) {
        Ok(selected) => selected,
        Err((path, error)) => {
            trace.on_dispatch_failed(Some(asset_id), &error);
            return dispatch_failure(PartialProviderAsset::with_id(asset_id), path, error);
        }
    };
    asset_schema(version, status.tier()).run(&DecodeContext::asset(store, asset_id), trace)
}

/// Reads and validates the version and status that select an asset schema.
fn select_asset_keys(
    store: &FieldStore<'_>,
    asset_id: &str,
) -> Result<(ProviderVersion, AssetStatus), (&'static str, DecodeError)> {
    let version = get_integer(store, &render_asset_key(ASSET_VERSION_PATTERN, asset_id))
        .map_err(|error| (VERSION_PATH, error))?;
    let status = get_integer(store, &render_asset_key(ASSET_STATUS_PATTERN, asset_id))
        .map_err(|error| (STATUS_PATH, error))?;
    let version = ProviderVersion::try_from(version).map_err(|error| (VERSION_PATH, error))?;
    let status = AssetStatus::try_from(status).map_err(|error| (STATUS_PATH, error))?;
    Ok((version, status))
}

/// Builds the single-error response for a rejected entity.
fn dispatch_failure<T, P>(content: P, path: &str, error: DecodeError) -> Response<T, P> {
    Response::Error {
        content,
        errors: vec![ResponseError::new(path, error)],
    }
}
