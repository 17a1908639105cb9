// oracle-data-cli/src/lib.rs
// ============================================================================
// Module: Oracle Data CLI Library
// Description: Shared helpers for the oracle data command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: Standard library.
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities, chiefly the message
//! catalog. The binary entry point (`src/main.rs`) imports these helpers so all
//! user-facing output goes through one place.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
