// oracle-data-core/src/runtime/mod.rs
// ============================================================================
// Module: Oracle Data Runtime
// Description: Field store, schema engine, dispatch, encoder, and diff.
// Purpose: Implement the conversions between triples and entities.
// Dependencies: crate::runtime::*
// ============================================================================

//! ## Overview
//! All runtime operations are pure functions over borrowed input. The schema
//! and producer tables are immutable statics; nothing is cached between calls.

pub mod diff;
pub mod dispatch;
pub mod encode;
pub mod schema;
pub mod store;
pub mod template;
pub mod trace;

pub use diff::diff_fields;
pub use dispatch::asset_schema;
pub use dispatch::decode_assets_with_trace;
pub use dispatch::decode_provider_with_trace;
pub use dispatch::discover_asset_ids;
pub use dispatch::provider_schema;
pub use encode::AttributeValue;
pub use encode::EncodeSource;
pub use encode::encode_asset;
pub use encode::encode_entity;
pub use encode::encode_json;
pub use encode::encode_provider;
pub use encode::is_asset_object;
pub use schema::DecodeContext;
pub use schema::Processor;
pub use schema::Requirement;
pub use schema::Schema;
pub use store::FieldStore;
pub use store::get_field_value;
pub use store::get_integer;
pub use store::get_text;
pub use template::asset_id_from_key;
pub use template::parse_lang_list;
pub use template::render_asset_key;
pub use template::render_description_key;
pub use template::render_key;
pub use trace::DecodeTrace;
pub use trace::NoopTrace;
