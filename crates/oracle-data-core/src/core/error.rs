// oracle-data-core/src/core/error.rs
// ============================================================================
// Module: Oracle Data Errors
// Description: Decode and encode failure taxonomy.
// Purpose: Give every field-level failure a typed, inspectable shape.
// Dependencies: crate::core::field, serde, thiserror
// ============================================================================

//! ## Overview
//! Decode failures never escape the decoder; they are collected into
//! [`crate::ResponseError`] entries. Encode failures abort the whole entity
//! conversion at the first offending attribute.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::core::field::FieldType;
use crate::core::field::ValueKind;

// ============================================================================
// SECTION: Decode Errors
// ============================================================================

/// Field-level decode failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeError {
    /// No triple exists for the key.
    #[error("Has no field with name {key}")]
    MissingField {
        /// Key that was looked up.
        key: String,
    },
    /// The triple's declared type differs from the type the schema expects.
    #[error("Wrong field type! {declared} is not equal to {expected} (key {key})")]
    TypeMismatch {
        /// Key of the offending triple.
        key: String,
        /// Type declared by the triple.
        declared: FieldType,
        /// Type the schema expects.
        expected: FieldType,
    },
    /// The triple declares the expected type but holds a value of another kind.
    #[error("Wrong field value! {key} declares {declared} but holds a {actual}")]
    ValueKindMismatch {
        /// Key of the offending triple.
        key: String,
        /// Type declared by the triple.
        declared: FieldType,
        /// Kind of the value actually held.
        actual: ValueKind,
    },
    /// The declared protocol version has no registered schema.
    #[error("Unsupported protocol version: {version}")]
    UnsupportedVersion {
        /// Declared version.
        version: i64,
    },
    /// The declared asset status is outside the known enum.
    #[error("Invalid asset status: {status}")]
    InvalidStatus {
        /// Declared status.
        status: i64,
    },
}

// ============================================================================
// SECTION: Encode Errors
// ============================================================================

/// Entity-to-fields conversion failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A required attribute is absent or null.
    #[error("Empty field {field}!")]
    EmptyField {
        /// Attribute name.
        field: String,
    },
    /// An attribute is present with the wrong runtime type.
    #[error("Wrong value type! {actual} is not assignable to type {expected} (field {field})")]
    WrongValueType {
        /// Attribute name.
        field: String,
        /// Expected runtime type label.
        expected: &'static str,
        /// Actual runtime type label.
        actual: &'static str,
    },
    /// A description language cannot be carried by the comma-separated lang list.
    #[error("Invalid description language '{lang}' (field {field})")]
    InvalidLanguage {
        /// Attribute path, `description.<lang>`.
        field: String,
        /// Offending language code.
        lang: String,
    },
    /// A JSON entity was not an object.
    #[error("Entity must be an object, found {actual}")]
    NotAnObject {
        /// Actual JSON type label.
        actual: &'static str,
    },
}

impl EncodeError {
    /// Creates an [`EncodeError::EmptyField`] for `field`.
    pub fn empty_field(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an [`EncodeError::WrongValueType`] for `field`.
    pub fn wrong_value_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::WrongValueType {
            field: field.into(),
            expected,
            actual,
        }
    }
}
