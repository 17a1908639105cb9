// oracle-data-core/src/runtime/diff.rs
// ============================================================================
// Module: Field Diff
// Description: Additive delta between two triple lists.
// Purpose: Compute the triples a writer must publish to move to a new state.
// Dependencies: crate::core::field, crate::runtime::store
// ============================================================================

//! ## Overview
//! The delta keeps every triple of `next` whose key is new or whose declared
//! type or value changed. Deletions are never reported: a key present only in
//! `previous` contributes nothing. Output follows `next` order, duplicates
//! included.

use crate::core::field::DataField;
use crate::runtime::store::FieldStore;

/// Returns the triples of `next` that are new or changed relative to `previous`.
#[must_use]
pub fn diff_fields(previous: &[DataField], next: &[DataField]) -> Vec<DataField> {
    let previous = FieldStore::from_fields(previous);
    next.iter()
        .filter(|field| {
            previous.get(&field.key).is_none_or(|prior| {
                prior.field_type != field.field_type || prior.value != field.value
            })
        })
        .cloned()
        .collect()
}
