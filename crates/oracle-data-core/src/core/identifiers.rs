// oracle-data-core/src/core/identifiers.rs
// ============================================================================
// Module: Oracle Data Identifiers
// Description: Format checks for asset identifiers and status values.
// Purpose: Let callers vet identifiers before trusting decoded records.
// Dependencies: crate::core::constants
// ============================================================================

//! ## Overview
//! Asset identifiers are Base58 strings of 1 to 64 characters. The codec never
//! applies these checks itself; decode and encode treat identifiers as opaque.

use crate::core::constants::AssetStatus;

/// Maximum asset identifier length in characters.
pub const MAX_ASSET_ID_LENGTH: usize = 64;

/// Base58 alphabet: digits and letters without `0`, `O`, `I`, and `l`.
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Returns true when `id` is a well-formed asset identifier.
#[must_use]
pub fn is_valid_asset_id(id: &str) -> bool {
    (1..=MAX_ASSET_ID_LENGTH).contains(&id.len()) && id.bytes().all(is_base58_byte)
}

/// Returns true when `status` is a known verification status wire value.
#[must_use]
pub fn is_valid_status(status: i64) -> bool {
    AssetStatus::try_from(status).is_ok()
}

/// Returns true for bytes in the Base58 alphabet.
const fn is_base58_byte(byte: u8) -> bool {
    matches!(
        byte,
        b'1'..=b'9' | b'A'..=b'H' | b'J'..=b'N' | b'P'..=b'Z' | b'a'..=b'k' | b'm'..=b'z'
    )
}
