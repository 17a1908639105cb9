// oracle-data-core/src/runtime/store.rs
// ============================================================================
// Module: Field Store
// Description: Keyed lookup over a triple list plus typed field access.
// Purpose: Give every decode path one read-only index of the raw record.
// Dependencies: crate::core::{error, field}
// ============================================================================

//! ## Overview
//! [`FieldStore`] indexes borrowed triples by key. Later triples overwrite
//! earlier ones with the same key, while the position of a key's first
//! appearance is kept so asset discovery follows the raw list order. Keys are
//! plain map keys: no key name carries special meaning.
//!
//! The accessors check the declared type, never the value, against the type
//! the caller expects. A triple whose value disagrees with its own declared
//! type is rejected as malformed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::core::error::DecodeError;
use crate::core::field::DataField;
use crate::core::field::FieldType;
use crate::core::field::FieldValue;

// ============================================================================
// SECTION: Field Store
// ============================================================================

/// Read-only key index over a triple list.
#[derive(Debug, Clone, Default)]
pub struct FieldStore<'a> {
    /// Latest triple per key.
    entries: HashMap<&'a str, &'a DataField>,
    /// Distinct keys in first-seen order.
    order: Vec<&'a str>,
}

impl<'a> FieldStore<'a> {
    /// Builds the index; the last triple wins for duplicate keys.
    #[must_use]
    pub fn from_fields(fields: &'a [DataField]) -> Self {
        let mut entries = HashMap::with_capacity(fields.len());
        let mut order = Vec::with_capacity(fields.len());
        for field in fields {
            let key = field.key.as_str();
            if entries.insert(key, field).is_none() {
                order.push(key);
            }
        }
        Self {
            entries,
            order,
        }
    }

    /// Returns the triple stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a DataField> {
        self.entries.get(key).copied()
    }

    /// Returns true when a triple is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when the store holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates distinct keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }
}

// ============================================================================
// SECTION: Field Accessors
// ============================================================================

/// Returns the value stored under `key` when its declared type is `expected`.
///
/// # Errors
///
/// - [`DecodeError::MissingField`] when no triple has `key`.
/// - [`DecodeError::TypeMismatch`] when the declared type differs from `expected`.
/// - [`DecodeError::ValueKindMismatch`] when the value disagrees with the declared type.
pub fn get_field_value<'a>(
    store: &FieldStore<'a>,
    key: &str,
    expected: FieldType,
) -> Result<&'a FieldValue, DecodeError> {
    let field = store.get(key).ok_or_else(|| DecodeError::MissingField {
        key: key.to_string(),
    })?;
    if field.field_type != expected {
        return Err(DecodeError::TypeMismatch {
            key: key.to_string(),
            declared: field.field_type,
            expected,
        });
    }
    if !field.is_well_formed() {
        return Err(DecodeError::ValueKindMismatch {
            key: key.to_string(),
            declared: field.field_type,
            actual: field.value.kind(),
        });
    }
    Ok(&field.value)
}

/// Returns the integer stored under `key`.
///
/// # Errors
///
/// Same as [`get_field_value`] with `expected = FieldType::Integer`.
pub fn get_integer(store: &FieldStore<'_>, key: &str) -> Result<i64, DecodeError> {
    let value = get_field_value(store, key, FieldType::Integer)?;
    value.as_integer().ok_or_else(|| DecodeError::ValueKindMismatch {
        key: key.to_string(),
        declared: FieldType::Integer,
        actual: value.kind(),
    })
}

/// Returns the text stored under `key`, declared as `expected` (string or binary).
///
/// # Errors
///
/// Same as [`get_field_value`].
pub fn get_text<'a>(
    store: &FieldStore<'a>,
    key: &str,
    expected: FieldType,
) -> Result<&'a str, DecodeError> {
    let value = get_field_value(store, key, expected)?;
    value.as_text().ok_or_else(|| DecodeError::ValueKindMismatch {
        key: key.to_string(),
        declared: expected,
        actual: value.kind(),
    })
}
