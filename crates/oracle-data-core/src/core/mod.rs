// oracle-data-core/src/core/mod.rs
// ============================================================================
// Module: Oracle Data Core Types
// Description: Constants, triples, entities, responses, and errors.
// Purpose: Group the value types shared by the runtime codec.
// Dependencies: crate::core::*
// ============================================================================

//! ## Overview
//! Everything in this module is a plain value type. The runtime module owns
//! the behavior that moves data between triples and entities.

pub mod constants;
pub mod error;
pub mod field;
pub mod identifiers;
pub mod model;
pub mod response;

pub use constants::*;
pub use error::DecodeError;
pub use error::EncodeError;
pub use field::DataField;
pub use field::FieldType;
pub use field::FieldValue;
pub use field::ValueKind;
pub use identifiers::is_valid_asset_id;
pub use identifiers::is_valid_status;
pub use model::Description;
pub use model::DetailedAsset;
pub use model::Entity;
pub use model::MinimalAsset;
pub use model::PartialProviderAsset;
pub use model::PartialProviderData;
pub use model::PartialRecord;
pub use model::ProviderAsset;
pub use model::ProviderData;
pub use response::AssetResponse;
pub use response::ProviderResponse;
pub use response::Response;
pub use response::ResponseError;
pub use response::ResponseStatus;
