// oracle-data-core/src/runtime/trace.rs
// ============================================================================
// Module: Decode Trace Hooks
// Description: Observer interface for decode events.
// Purpose: Let callers log or audit decoding without the core doing I/O.
// Dependencies: crate::core::error, crate::runtime::schema
// ============================================================================

//! ## Overview
//! The decoder reports schema selection, field outcomes, and dispatch
//! failures to a [`DecodeTrace`]. [`NoopTrace`] is the default used by the
//! plain decode entry points.

use crate::core::error::DecodeError;
use crate::runtime::schema::Requirement;

/// Observer for decode events.
pub trait DecodeTrace {
    /// Called when a schema is selected for an entity.
    fn on_schema_selected(&mut self, schema: &'static str, asset_id: Option<&str>);

    /// Called when a field (or one description language) resolves.
    fn on_field_resolved(&mut self, path: &str, key: &str);

    /// Called when a field fails, whether or not the failure is recorded.
    fn on_field_failed(&mut self, path: &str, error: &DecodeError, requirement: Requirement);

    /// Called when version or status dispatch rejects an entity.
    fn on_dispatch_failed(&mut self, asset_id: Option<&str>, error: &DecodeError);
}

/// No-op trace hook for fast paths
///
/// # Invariants
/// - Zero-sized marker type; carries no state.
#[derive(Debug, Default)]
pub struct NoopTrace;

impl DecodeTrace for NoopTrace {
    fn on_schema_selected(&mut self, _schema: &'static str, _asset_id: Option<&str>) {}

    fn on_field_resolved(&mut self, _path: &str, _key: &str) {}

    fn on_field_failed(&mut self, _path: &str, _error: &DecodeError, _requirement: Requirement) {}

    fn on_dispatch_failed(&mut self, _asset_id: Option<&str>, _error: &DecodeError) {}
}
