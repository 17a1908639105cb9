// oracle-data-core/tests/diff.rs
// ============================================================================
// Module: Diff Tests
// Description: Tests for the additive triple delta.
// Purpose: Ensure only new or changed triples are reported, in next order.
// Dependencies: oracle-data-core
// ============================================================================
//! ## Overview
//! Covers key, type, and value changes plus entity-level diffs.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use oracle_data_core::DataField;
use oracle_data_core::Entity;
use oracle_data_core::ProviderData;
use oracle_data_core::diff_by_data;
use oracle_data_core::diff_by_fields;

use crate::common::provider_data;
use crate::common::provider_fields;

/// Verifies a single changed value is the whole delta.
#[test]
fn single_value_change_is_reported() {
    let previous = vec![DataField::integer("a", 1), DataField::string("b", "x")];
    let next = vec![DataField::integer("a", 1), DataField::string("b", "y")];

    assert_eq!(diff_by_fields(&previous, &next), vec![DataField::string("b", "y")]);
}

/// Verifies a declared type change with an equal value is reported.
#[test]
fn type_change_is_reported() {
    let previous = vec![DataField::string("logo", "AAA")];
    let next = vec![DataField::binary("logo", "AAA")];

    assert_eq!(diff_by_fields(&previous, &next), next);
}

/// Verifies new keys are reported and removed keys are not.
#[test]
fn additions_reported_deletions_ignored() {
    let previous = vec![DataField::integer("gone", 1), DataField::integer("kept", 2)];
    let next = vec![DataField::integer("kept", 2), DataField::integer("new", 3)];

    assert_eq!(diff_by_fields(&previous, &next), vec![DataField::integer("new", 3)]);
    assert!(diff_by_fields(&next, &[]).is_empty());
}

/// Verifies the delta preserves next order.
#[test]
fn delta_preserves_next_order() {
    let next =
        vec![DataField::integer("z", 1), DataField::integer("a", 2), DataField::integer("m", 3)];
    assert_eq!(diff_by_fields(&[], &next), next);
}

/// Verifies identical lists have an empty delta.
#[test]
fn identical_lists_have_empty_delta() {
    assert!(diff_by_fields(&provider_fields(), &provider_fields()).is_empty());
}

/// Verifies entity diffs encode both sides first.
#[test]
fn entity_diff_reports_changed_attributes() {
    let previous = Entity::from(provider_data());
    let next = Entity::from(ProviderData {
        name: "Renamed".to_string(),
        ..provider_data()
    });

    let delta = diff_by_data(&previous, &next).expect("diff");
    assert_eq!(delta, vec![DataField::string("data_provider_name", "Renamed")]);
}

/// Verifies `previous` is read last-write-wins, so a shadowed duplicate in
/// `next` is reported even against the same list.
#[test]
fn duplicate_keys_compare_against_last_write() {
    let fields = vec![DataField::integer("a", 1), DataField::integer("a", 2)];

    assert_eq!(diff_by_fields(&fields, &fields), vec![DataField::integer("a", 1)]);
}
