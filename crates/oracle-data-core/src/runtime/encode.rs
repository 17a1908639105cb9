// oracle-data-core/src/runtime/encode.rs
// ============================================================================
// Module: Entity Encoder
// Description: Converts provider and asset entities back into triples.
// Purpose: Produce deterministic, ordered triple lists for storage.
// Dependencies: crate::core::*, crate::runtime::{schema, template}, serde_json
// ============================================================================

//! ## Overview
//! Encoding runs a closed producer table over an [`EncodeSource`]. Producers
//! run in declaration order and their outputs are concatenated; the first
//! failing producer aborts the whole conversion. Typed entities and legacy
//! JSON objects share the same tables, so both paths emit identical triples
//! for equivalent input.
//!
//! Every encoder writes [`ProviderVersion::CURRENT`], whatever version the
//! source carries. Description languages are emitted in sorted order and must
//! be non-empty and free of the lang-list separator. An empty description map
//! encodes exactly like an absent one.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;

use serde_json::Map;
use serde_json::Value;

use crate::core::constants::ASSET_EMAIL_PATTERN;
use crate::core::constants::ASSET_LINK_PATTERN;
use crate::core::constants::ASSET_LOGO_PATTERN;
use crate::core::constants::ASSET_STATUS_PATTERN;
use crate::core::constants::ASSET_TICKER_PATTERN;
use crate::core::constants::ASSET_VERSION_PATTERN;
use crate::core::constants::DATA_PROVIDER_EMAIL_KEY;
use crate::core::constants::DATA_PROVIDER_LANG_LIST_KEY;
use crate::core::constants::DATA_PROVIDER_LINK_KEY;
use crate::core::constants::DATA_PROVIDER_NAME_KEY;
use crate::core::constants::DATA_PROVIDER_VERSION_KEY;
use crate::core::constants::LANG_LIST_SEPARATOR;
use crate::core::constants::ProviderVersion;
use crate::core::error::EncodeError;
use crate::core::field::DataField;
use crate::core::field::FieldType;
use crate::core::field::FieldValue;
use crate::core::field::ValueKind;
use crate::core::model::Description;
use crate::core::model::Entity;
use crate::core::model::ProviderAsset;
use crate::core::model::ProviderData;
use crate::runtime::schema::Requirement;
use crate::runtime::template::render_description_key;
use crate::runtime::template::render_key;

/// Attribute holding the asset identifier.
const ID_ATTRIBUTE: &str = "id";
/// Attribute holding the asset status.
const STATUS_ATTRIBUTE: &str = "status";
/// Attribute holding the description map.
const DESCRIPTION_ATTRIBUTE: &str = "description";

// ============================================================================
// SECTION: Encode Sources
// ============================================================================

/// Runtime view of one entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeValue<'a> {
    /// Integer number.
    Integer(i64),
    /// Text.
    Text(&'a str),
    /// Boolean.
    Boolean(bool),
    /// Any other runtime kind, by label.
    Other(&'static str),
}

impl AttributeValue<'_> {
    /// Returns the runtime type label used in encode errors.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Integer(_) => ValueKind::Integer.as_str(),
            Self::Text(_) => ValueKind::Text.as_str(),
            Self::Boolean(_) => ValueKind::Boolean.as_str(),
            Self::Other(label) => *label,
        }
    }

    /// Converts to a field value when the runtime kind is `kind`.
    fn to_field_value(self, kind: ValueKind) -> Option<FieldValue> {
        match (self, kind) {
            (Self::Integer(value), ValueKind::Integer) => Some(FieldValue::Integer(value)),
            (Self::Text(value), ValueKind::Text) => Some(FieldValue::Text(value.to_string())),
            (Self::Boolean(value), ValueKind::Boolean) => Some(FieldValue::Boolean(value)),
            _ => None,
        }
    }
}

/// Entity attributes readable by the producer tables.
pub trait EncodeSource {
    /// Returns the attribute named `name`, or `None` when absent or null.
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>>;

    /// Returns the description map, or `None` when absent or null.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::WrongValueType`] when the description or one of
    /// its entries has the wrong runtime type.
    fn description(&self) -> Result<Option<Cow<'_, Description>>, EncodeError>;
}

impl EncodeSource for ProviderData {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        match name {
            "name" => Some(AttributeValue::Text(&self.name)),
            "link" => Some(AttributeValue::Text(&self.link)),
            "email" => Some(AttributeValue::Text(&self.email)),
            _ => None,
        }
    }

    fn description(&self) -> Result<Option<Cow<'_, Description>>, EncodeError> {
        Ok(self.description.as_ref().map(Cow::Borrowed))
    }
}

impl EncodeSource for ProviderAsset {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        match (self, name) {
            (_, ID_ATTRIBUTE) => Some(AttributeValue::Text(self.id())),
            (_, STATUS_ATTRIBUTE) => Some(AttributeValue::Integer(self.status().as_i64())),
            (Self::Minimal(asset), "link") => asset.link.as_deref().map(AttributeValue::Text),
            (Self::Minimal(asset), "ticker") => asset.ticker.as_deref().map(AttributeValue::Text),
            (Self::Minimal(asset), "email") => asset.email.as_deref().map(AttributeValue::Text),
            (Self::Detailed(asset), "logo") => Some(AttributeValue::Text(&asset.logo)),
            (Self::Detailed(asset), "link") => Some(AttributeValue::Text(&asset.link)),
            (Self::Detailed(asset), "ticker") => Some(AttributeValue::Text(&asset.ticker)),
            (Self::Detailed(asset), "email") => Some(AttributeValue::Text(&asset.email)),
            _ => None,
        }
    }

    fn description(&self) -> Result<Option<Cow<'_, Description>>, EncodeError> {
        Ok(ProviderAsset::description(self).map(Cow::Borrowed))
    }
}

impl EncodeSource for Map<String, Value> {
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        match self.get(name)? {
            Value::Null => None,
            Value::Bool(value) => Some(AttributeValue::Boolean(*value)),
            Value::Number(number) => Some(
                number.as_i64().map_or(AttributeValue::Other("float"), AttributeValue::Integer),
            ),
            Value::String(value) => Some(AttributeValue::Text(value)),
            other => Some(AttributeValue::Other(json_label(other))),
        }
    }

    fn description(&self) -> Result<Option<Cow<'_, Description>>, EncodeError> {
        let entries = match self.get(DESCRIPTION_ATTRIBUTE) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(entries)) => entries,
            Some(other) => {
                return Err(EncodeError::wrong_value_type(
                    DESCRIPTION_ATTRIBUTE,
                    "object",
                    json_label(other),
                ));
            }
        };
        let mut description = Description::new();
        for (lang, text) in entries {
            let Value::String(text) = text else {
                return Err(EncodeError::wrong_value_type(
                    format!("{DESCRIPTION_ATTRIBUTE}.{lang}"),
                    ValueKind::Text.as_str(),
                    json_label(text),
                ));
            };
            description.insert(lang.clone(), text.clone());
        }
        Ok(Some(Cow::Owned(description)))
    }
}

/// Returns the runtime type label of a JSON value.
#[must_use]
pub const fn json_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SECTION: Producer Tables
// ============================================================================

/// One step of an encoder table.
#[derive(Debug, Clone, Copy)]
enum Producer {
    /// Writes [`ProviderVersion::CURRENT`] under the rendered pattern.
    Version {
        /// Key pattern.
        pattern: &'static str,
    },
    /// Copies one scalar attribute.
    Attribute {
        /// Attribute name.
        name: &'static str,
        /// Key pattern.
        pattern: &'static str,
        /// Declared type of the emitted triple.
        field_type: FieldType,
        /// Whether absence fails the conversion or omits the triple.
        requirement: Requirement,
    },
    /// Provider description fan-out followed by the language list.
    ProviderDescription,
    /// Asset description fan-out.
    AssetDescription,
}

/// Provider encoder table.
static PROVIDER_PRODUCERS: [Producer; 5] = [
    Producer::Version {
        pattern: DATA_PROVIDER_VERSION_KEY,
    },
    Producer::Attribute {
        name: "name",
        pattern: DATA_PROVIDER_NAME_KEY,
        field_type: FieldType::String,
        requirement: Requirement::Required,
    },
    Producer::Attribute {
        name: "link",
        pattern: DATA_PROVIDER_LINK_KEY,
        field_type: FieldType::String,
        requirement: Requirement::Required,
    },
    Producer::Attribute {
        name: "email",
        pattern: DATA_PROVIDER_EMAIL_KEY,
        field_type: FieldType::String,
        requirement: Requirement::Required,
    },
    Producer::ProviderDescription,
];

/// Asset encoder table.
static ASSET_PRODUCERS: [Producer; 7] = [
    Producer::Version {
        pattern: ASSET_VERSION_PATTERN,
    },
    Producer::Attribute {
        name: STATUS_ATTRIBUTE,
        pattern: ASSET_STATUS_PATTERN,
        field_type: FieldType::Integer,
        requirement: Requirement::Optional,
    },
    Producer::Attribute {
        name: "logo",
        pattern: ASSET_LOGO_PATTERN,
        field_type: FieldType::String,
        requirement: Requirement::Optional,
    },
    Producer::Attribute {
        name: "link",
        pattern: ASSET_LINK_PATTERN,
        field_type: FieldType::String,
        requirement: Requirement::Optional,
    },
    Producer::Attribute {
        name: "ticker",
        pattern: ASSET_TICKER_PATTERN,
        field_type: FieldType::String,
        requirement: Requirement::Optional,
    },
    Producer::Attribute {
        name: "email",
        pattern: ASSET_EMAIL_PATTERN,
        field_type: FieldType::String,
        requirement: Requirement::Optional,
    },
    Producer::AssetDescription,
];

// ============================================================================
// SECTION: Encoding
// ============================================================================

/// Encodes a provider profile.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode_provider(data: &ProviderData) -> Result<Vec<DataField>, EncodeError> {
    run_producers(&PROVIDER_PRODUCERS, data, None)
}

/// Encodes an asset record.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode_asset(asset: &ProviderAsset) -> Result<Vec<DataField>, EncodeError> {
    run_producers(&ASSET_PRODUCERS, asset, Some(asset.id()))
}

/// Encodes either entity kind.
///
/// # Errors
///
/// Returns [`EncodeError`] at the first attribute that cannot be encoded.
pub fn encode_entity(entity: &Entity) -> Result<Vec<DataField>, EncodeError> {
    match entity {
        Entity::Provider(data) => encode_provider(data),
        Entity::Asset(asset) => encode_asset(asset),
    }
}

/// Encodes an untyped JSON entity.
///
/// An object carrying both `id` and `status` keys is encoded as an asset;
/// any other object is encoded as provider data.
///
/// # Errors
///
/// Returns [`EncodeError::NotAnObject`] for non-object input, otherwise the
/// first attribute failure.
pub fn encode_json(value: &Value) -> Result<Vec<DataField>, EncodeError> {
    let Value::Object(object) = value else {
        return Err(EncodeError::NotAnObject {
            actual: json_label(value),
        });
    };
    if is_asset_object(object) {
        let asset_id = match object.attribute(ID_ATTRIBUTE) {
            Some(AttributeValue::Text(asset_id)) => asset_id,
            Some(other) => {
                return Err(EncodeError::wrong_value_type(
                    ID_ATTRIBUTE,
                    ValueKind::Text.as_str(),
                    other.label(),
                ));
            }
            None => return Err(EncodeError::empty_field(ID_ATTRIBUTE)),
        };
        run_producers(&ASSET_PRODUCERS, object, Some(asset_id))
    } else {
        run_producers(&PROVIDER_PRODUCERS, object, None)
    }
}

/// Returns true when a JSON object has the asset-only `id` and `status` keys.
#[must_use]
pub fn is_asset_object(object: &Map<String, Value>) -> bool {
    [ID_ATTRIBUTE, STATUS_ATTRIBUTE].iter().all(|key| object.contains_key(*key))
}

/// Runs `producers` in order and concatenates their output.
fn run_producers(
    producers: &[Producer],
    source: &dyn EncodeSource,
    asset_id: Option<&str>,
) -> Result<Vec<DataField>, EncodeError> {
    let mut fields = Vec::with_capacity(producers.len());
    for producer in producers {
        produce(*producer, source, asset_id, &mut fields)?;
    }
    Ok(fields)
}

/// Appends the triples of one producer.
fn produce(
    producer: Producer,
    source: &dyn EncodeSource,
    asset_id: Option<&str>,
    fields: &mut Vec<DataField>,
) -> Result<(), EncodeError> {
    match producer {
        Producer::Version {
            pattern,
        } => {
            fields.push(DataField::integer(
                render_key(pattern, asset_id, None),
                ProviderVersion::CURRENT.as_i64(),
            ));
        }
        Producer::Attribute {
            name,
            pattern,
            field_type,
            requirement,
        } => {
            let Some(attribute) = source.attribute(name) else {
                if requirement.is_required() {
                    return Err(EncodeError::empty_field(name));
                }
                return Ok(());
            };
            let kind = field_type.value_kind();
            let value = attribute.to_field_value(kind).ok_or_else(|| {
                EncodeError::wrong_value_type(name, kind.as_str(), attribute.label())
            })?;
            fields.push(DataField::new(render_key(pattern, asset_id, None), field_type, value));
        }
        Producer::ProviderDescription => {
            let description = source.description()?.unwrap_or_default();
            let mut lang_list = String::new();
            for (index, (lang, text)) in description.iter().enumerate() {
                check_language(lang)?;
                fields.push(DataField::string(render_description_key(lang, None), text.as_str()));
                if index > 0 {
                    lang_list.push(LANG_LIST_SEPARATOR);
                }
                lang_list.push_str(lang);
            }
            fields.push(DataField::string(DATA_PROVIDER_LANG_LIST_KEY, lang_list));
        }
        Producer::AssetDescription => {
            if let Some(description) = source.description()? {
                for (lang, text) in description.iter() {
                    check_language(lang)?;
                    fields.push(DataField::string(
                        render_description_key(lang, asset_id),
                        text.as_str(),
                    ));
                }
            }
        }
    }
    Ok(())
}

/// Rejects language codes the lang list cannot round-trip.
fn check_language(lang: &str) -> Result<(), EncodeError> {
    if lang.is_empty() || lang.contains(LANG_LIST_SEPARATOR) {
        return Err(EncodeError::InvalidLanguage {
            field: format!("{DESCRIPTION_ATTRIBUTE}.{lang}"),
            lang: lang.to_string(),
        });
    }
    Ok(())
}
