// oracle-data-core/src/api.rs
// ============================================================================
// Module: Oracle Data API
// Description: Top-level decode, encode, and diff entry points.
// Purpose: Give callers one stable surface over the runtime modules.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Decoding never fails: every outcome is a [`Response`](crate::Response).
//! Encoding fails at the first attribute that cannot be converted. Diffing is
//! total.

use serde_json::Value;

use crate::core::error::EncodeError;
use crate::core::field::DataField;
use crate::core::model::Entity;
use crate::core::model::ProviderAsset;
use crate::core::model::ProviderData;
use crate::core::response::AssetResponse;
use crate::core::response::ProviderResponse;
use crate::runtime::diff::diff_fields;
use crate::runtime::dispatch::decode_assets_with_trace;
use crate::runtime::dispatch::decode_provider_with_trace;
use crate::runtime::encode;
use crate::runtime::trace::NoopTrace;

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes the provider profile from a triple list.
#[must_use]
pub fn decode_provider(fields: &[DataField]) -> ProviderResponse {
    decode_provider_with_trace(fields, &mut NoopTrace)
}

/// Decodes every asset discovered in a triple list, in discovery order.
#[must_use]
pub fn decode_assets(fields: &[DataField]) -> Vec<AssetResponse> {
    decode_assets_with_trace(fields, &mut NoopTrace)
}

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Encodes either entity kind into triples.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode(entity: &Entity) -> Result<Vec<DataField>, EncodeError> {
    encode::encode_entity(entity)
}

/// Encodes a provider profile into triples.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode_provider(data: &ProviderData) -> Result<Vec<DataField>, EncodeError> {
    encode::encode_provider(data)
}

/// Encodes an asset record into triples.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode_asset(asset: &ProviderAsset) -> Result<Vec<DataField>, EncodeError> {
    encode::encode_asset(asset)
}

/// Encodes an untyped JSON entity, detecting assets by their `id` and `status` keys.
///
/// # Errors
///
/// Returns [`EncodeError::NotAnObject`] for non-object input, otherwise the
/// first attribute failure.
pub fn encode_json(value: &Value) -> Result<Vec<DataField>, EncodeError> {
    encode::encode_json(value)
}

// ============================================================================
// SECTION: Diffing
// ============================================================================

/// Encodes both entities and returns the delta from `previous` to `next`.
///
/// # Errors
///
/// Returns [`EncodeError`] when either entity cannot be encoded.
pub fn diff_by_data(previous: &Entity, next: &Entity) -> Result<Vec<DataField>, EncodeError> {
    Ok(diff_fields(&encode(previous)?, &encode(next)?))
}

/// Returns the triples of `next` that are new or changed relative to `previous`.
#[must_use]
pub fn diff_by_fields(previous: &[DataField], next: &[DataField]) -> Vec<DataField> {
    diff_fields(previous, next)
}
