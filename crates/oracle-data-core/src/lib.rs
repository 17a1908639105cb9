// oracle-data-core/src/lib.rs
// ============================================================================
// Module: Oracle Data Core Library
// Description: Public API surface for the oracle data field codec.
// Purpose: Expose entity types, decode/encode/diff operations, and trace hooks.
// Dependencies: crate::{api, core, runtime}
// ============================================================================

//! ## Overview
//! Oracle data records are flat `{key, type, value}` triple lists. This crate
//! decodes them into a data provider profile and per-asset verification
//! records, encodes those entities back into triples, and computes the delta
//! between two triple lists. It performs no I/O and keeps no state between
//! calls; observers plug in through [`DecodeTrace`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod api;
pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use api::decode_assets;
pub use api::decode_provider;
pub use api::diff_by_data;
pub use api::diff_by_fields;
pub use api::encode;
pub use api::encode_asset;
pub use api::encode_json;
pub use api::encode_provider;
pub use runtime::DecodeTrace;
pub use runtime::FieldStore;
pub use runtime::NoopTrace;
pub use runtime::Requirement;
pub use runtime::decode_assets_with_trace;
pub use runtime::decode_provider_with_trace;
pub use runtime::diff_fields;
