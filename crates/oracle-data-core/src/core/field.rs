// oracle-data-core/src/core/field.rs
// ============================================================================
// Module: Data Fields
// Description: Wire-level key/type/value triples.
// Purpose: Model the flat record unit exchanged with the data store.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`DataField`] is one `{key, type, value}` triple. The declared
//! [`FieldType`] and the runtime [`FieldValue`] are stored separately so that
//! triples read from untrusted input can disagree; the typed constructors
//! always produce agreeing triples and the field accessor rejects the rest.
//!
//! Values outside the three scalar kinds (floats, out-of-range integers,
//! `null`, arrays, objects) still parse, as [`FieldValue::Foreign`], so one
//! odd triple fails its own field instead of the whole record set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Field Types
// ============================================================================

/// Declared type of a data field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Signed integer value.
    Integer,
    /// UTF-8 string value.
    String,
    /// Binary payload carried as a string.
    Binary,
    /// Boolean value.
    Boolean,
}

impl FieldType {
    /// Returns the wire token for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
        }
    }

    /// Returns the runtime value kind this type carries.
    #[must_use]
    pub const fn value_kind(self) -> ValueKind {
        match self {
            Self::Integer => ValueKind::Integer,
            Self::String | Self::Binary => ValueKind::Text,
            Self::Boolean => ValueKind::Boolean,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime kind of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Integer number.
    Integer,
    /// Text (string or binary fields).
    Text,
    /// Boolean.
    Boolean,
    /// Anything the codec never writes.
    Foreign,
}

impl ValueKind {
    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "number",
            Self::Text => "string",
            Self::Boolean => "boolean",
            Self::Foreign => "foreign value",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Field Values
// ============================================================================

/// Scalar value carried by a data field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value.
    Integer(i64),
    /// String or binary value.
    Text(String),
    /// Boolean value.
    Boolean(bool),
    /// Any other JSON value, kept verbatim.
    Foreign(Value),
}

impl FieldValue {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Text(_) => ValueKind::Text,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Foreign(_) => ValueKind::Foreign,
        }
    }

    /// Returns the integer value, if this is one.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value, if this is one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is one.
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

// ============================================================================
// SECTION: Data Field
// ============================================================================

/// One `{key, type, value}` triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    /// Field key.
    pub key: String,
    /// Declared field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Field value.
    pub value: FieldValue,
}

impl DataField {
    /// Creates a triple without checking that `value` agrees with `field_type`.
    #[must_use]
    pub fn new(key: impl Into<String>, field_type: FieldType, value: FieldValue) -> Self {
        Self {
            key: key.into(),
            field_type,
            value,
        }
    }

    /// Creates an integer triple.
    #[must_use]
    pub fn integer(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, FieldType::Integer, FieldValue::Integer(value))
    }

    /// Creates a string triple.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldType::String, FieldValue::Text(value.into()))
    }

    /// Creates a binary triple.
    #[must_use]
    pub fn binary(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldType::Binary, FieldValue::Text(value.into()))
    }

    /// Creates a boolean triple.
    #[must_use]
    pub fn boolean(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, FieldType::Boolean, FieldValue::Boolean(value))
    }

    /// Returns true when the runtime value agrees with the declared type.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.field_type.value_kind() == self.value.kind()
    }
}
