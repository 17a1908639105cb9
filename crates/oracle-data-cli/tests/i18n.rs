// oracle-data-cli/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Exercises the translation catalog and placeholder substitution.
// Purpose: Ensure CLI user-facing strings route through stable i18n helpers.
// Dependencies: oracle-data-cli i18n module and the `t!` macro.
// ============================================================================

//! ## Overview
//! Validates the oracle data CLI i18n catalog behavior:
//! - Message arguments capture key/value substitutions.
//! - Translation falls back to keys on misses.
//! - The [`t!`](oracle_data_cli::t) macro formats placeholders correctly.

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

// ============================================================================
// SECTION: Imports
// ============================================================================

use oracle_data_cli::i18n::MessageArg;
use oracle_data_cli::i18n::translate;
use oracle_data_cli::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Confirms message arguments capture key/value pairs.
#[test]
fn message_arg_new_captures_key_and_value() {
    let arg = MessageArg::new("path", "/tmp/fields.json");
    assert_eq!(arg.key, "path");
    assert_eq!(arg.value, "/tmp/fields.json");
}

/// Confirms catalog entries resolve and replace placeholders.
#[test]
fn translate_substitutes_placeholders() {
    let args = vec![
        MessageArg::new("kind", "entity"),
        MessageArg::new("path", "/tmp/asset.json"),
        MessageArg::new("error", "not found"),
    ];
    let result = translate("input.read_failed", args);
    assert_eq!(result, "Failed to read entity at /tmp/asset.json: not found");
}

/// Confirms missing keys fall back to the key string.
#[test]
fn translate_falls_back_to_key() {
    let result = translate("missing.key", Vec::new());
    assert_eq!(result, "missing.key");
}

/// Confirms the t! macro formats named arguments.
#[test]
fn t_macro_formats_message() {
    let rendered = t!("main.version", version = "0.1.0");
    assert_eq!(rendered, "oracle-data 0.1.0");
}

/// Confirms numeric arguments are rendered through `Display`.
#[test]
fn t_macro_formats_numeric_arguments() {
    let rendered = t!("decode.strict_failed", count = 2_usize, total = 5_usize);
    assert_eq!(rendered, "2 of 5 decoded record(s) reported errors.");
}
