// oracle-data-core/src/runtime/schema.rs
// ============================================================================
// Module: Schema Builder
// Description: Ordered field processors that decode one entity.
// Purpose: Accumulate a partial entity and per-field errors in one pass.
// Dependencies: crate::core::{constants, error, field, model, response},
//              crate::runtime::{store, template, trace}
// ============================================================================

//! ## Overview
//! A [`Schema`] is a static, ordered list of [`Processor`]s. Running it starts
//! from an empty partial entity and one shared error list; each processor
//! extracts its field independently and either assigns it or handles the
//! failure according to its [`Requirement`]:
//! - required failures append one `{path, error}` entry;
//! - optional failures are silent.
//!
//! The response is `ok` exactly when no entry was appended. Processor order
//! only fixes the order of error entries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::constants::DATA_PROVIDER_LANG_LIST_KEY;
use crate::core::error::DecodeError;
use crate::core::field::FieldType;
use crate::core::model::Description;
use crate::core::model::PartialRecord;
use crate::core::response::Response;
use crate::core::response::ResponseError;
use crate::runtime::store::FieldStore;
use crate::runtime::store::get_integer;
use crate::runtime::store::get_text;
use crate::runtime::template::parse_lang_list;
use crate::runtime::template::render_description_key;
use crate::runtime::template::render_key;
use crate::runtime::trace::DecodeTrace;

/// Result path for the description map and its lang-list failures.
pub const DESCRIPTION_PATH: &str = "description";

// ============================================================================
// SECTION: Processor Types
// ============================================================================

/// Whether a field failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Failures append an error entry.
    Required,
    /// Failures leave the attribute absent without an error entry.
    Optional,
}

impl Requirement {
    /// Returns true for [`Requirement::Required`].
    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// Assigns a decoded integer; may reject values outside a closed enum.
pub type IntegerAssign<P> = fn(&mut P, i64) -> Result<(), DecodeError>;
/// Assigns a decoded text value.
pub type TextAssign<P> = fn(&mut P, String);
/// Assigns a decoded description map.
pub type DescriptionAssign<P> = fn(&mut P, Description);

/// One field step of a schema.
#[derive(Debug)]
pub enum Processor<P> {
    /// Integer field read from a rendered key pattern.
    Integer {
        /// Key pattern.
        pattern: &'static str,
        /// Result path used for error entries.
        path: &'static str,
        /// Failure handling.
        requirement: Requirement,
        /// Assignment into the partial entity.
        assign: IntegerAssign<P>,
    },
    /// String or binary field read from a rendered key pattern.
    Text {
        /// Key pattern.
        pattern: &'static str,
        /// Result path used for error entries.
        path: &'static str,
        /// Declared type expected on the triple.
        field_type: FieldType,
        /// Failure handling.
        requirement: Requirement,
        /// Assignment into the partial entity.
        assign: TextAssign<P>,
    },
    /// Copies the entity identifier from the decode context.
    AssetId {
        /// Assignment into the partial entity.
        assign: TextAssign<P>,
    },
    /// Multi-language description driven by the provider lang list.
    Description {
        /// Failure handling.
        requirement: Requirement,
        /// Assignment into the partial entity.
        assign: DescriptionAssign<P>,
    },
}

// ============================================================================
// SECTION: Decode Context
// ============================================================================

/// Inputs shared by every processor of one schema run.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    /// Indexed record.
    pub store: &'a FieldStore<'a>,
    /// Asset identifier for asset-scoped patterns.
    pub asset_id: Option<&'a str>,
}

impl<'a> DecodeContext<'a> {
    /// Context for provider-level decoding.
    #[must_use]
    pub const fn provider(store: &'a FieldStore<'a>) -> Self {
        Self {
            store,
            asset_id: None,
        }
    }

    /// Context for one asset.
    #[must_use]
    pub const fn asset(store: &'a FieldStore<'a>, asset_id: &'a str) -> Self {
        Self {
            store,
            asset_id: Some(asset_id),
        }
    }

    /// Renders a key pattern for this context.
    #[must_use]
    pub fn render(&self, pattern: &str) -> String {
        render_key(pattern, self.asset_id, None)
    }
}

// ============================================================================
// SECTION: Schema
// ============================================================================

/// Named, ordered processor list.
#[derive(Debug)]
pub struct Schema<P: 'static> {
    /// Stable schema name reported to traces.
    name: &'static str,
    /// Processors in declaration order.
    processors: &'static [Processor<P>],
}

impl<P: 'static> Schema<P> {
    /// Creates a schema over a static processor table.
    #[must_use]
    pub const fn new(name: &'static str, processors: &'static [Processor<P>]) -> Self {
        Self {
            name,
            processors,
        }
    }

    /// Returns the schema name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Runs every processor and builds the response.
    pub fn run<T>(&self, ctx: &DecodeContext<'_>, trace: &mut dyn DecodeTrace) -> Response<T, P>
    where
        P: PartialRecord<T>,
    {
        trace.on_schema_selected(self.name, ctx.asset_id);
        let mut partial = P::default();
        let mut errors = Vec::new();
        for processor in self.processors {
            apply(processor, ctx, &mut partial, &mut errors, trace);
        }
        finish(partial, errors)
    }
}

/// Turns a filled partial entity and its errors into a response.
pub fn finish<T, P>(partial: P, mut errors: Vec<ResponseError>) -> Response<T, P>
where
    P: PartialRecord<T>,
{
    if errors.is_empty() {
        match partial.complete() {
            Ok(content) => {
                return Response::Ok {
                    content,
                };
            }
            Err(path) => errors.push(ResponseError::new(
                path,
                DecodeError::MissingField {
                    key: path.to_string(),
                },
            )),
        }
    }
    Response::Error {
        content: partial,
        errors,
    }
}

// ============================================================================
// SECTION: Processor Execution
// ============================================================================

/// Runs one processor against the partial entity.
fn apply<P>(
    processor: &Processor<P>,
    ctx: &DecodeContext<'_>,
    partial: &mut P,
    errors: &mut Vec<ResponseError>,
    trace: &mut dyn DecodeTrace,
) {
    match processor {
        Processor::Integer {
            pattern,
            path,
            requirement,
            assign,
        } => {
            let key = ctx.render(pattern);
            match get_integer(ctx.store, &key).and_then(|value| assign(partial, value)) {
                Ok(()) => trace.on_field_resolved(path, &key),
                Err(error) => reject(path, error, *requirement, errors, trace),
            }
        }
        Processor::Text {
            pattern,
            path,
            field_type,
            requirement,
            assign,
        } => {
            let key = ctx.render(pattern);
            match get_text(ctx.store, &key, *field_type) {
                Ok(value) => {
                    assign(partial, value.to_string());
                    trace.on_field_resolved(path, &key);
                }
                Err(error) => reject(path, error, *requirement, errors, trace),
            }
        }
        Processor::AssetId {
            assign,
        } => {
            if let Some(asset_id) = ctx.asset_id {
                assign(partial, asset_id.to_string());
            }
        }
        Processor::Description {
            requirement,
            assign,
        } => {
            if let Some(description) = decode_description(ctx, *requirement, errors, trace) {
                assign(partial, description);
            }
        }
    }
}

/// Reads every language named by the lang list; `None` when none resolved.
fn decode_description(
    ctx: &DecodeContext<'_>,
    requirement: Requirement,
    errors: &mut Vec<ResponseError>,
    trace: &mut dyn DecodeTrace,
) -> Option<Description> {
    let lang_list = match get_text(ctx.store, DATA_PROVIDER_LANG_LIST_KEY, FieldType::String) {
        Ok(list) => list,
        Err(error) => {
            reject(DESCRIPTION_PATH, error, requirement, errors, trace);
            return None;
        }
    };

    let mut description = Description::new();
    for lang in parse_lang_list(lang_list) {
        let key = render_description_key(lang, ctx.asset_id);
        let path = format!("{DESCRIPTION_PATH}.{lang}");
        match get_text(ctx.store, &key, FieldType::String) {
            Ok(text) => {
                description.insert(lang.to_string(), text.to_string());
                trace.on_field_resolved(&path, &key);
            }
            Err(error) => reject(&path, error, requirement, errors, trace),
        }
    }
    (!description.is_empty()).then_some(description)
}

/// Reports a field failure and records it when the field is required.
fn reject(
    path: &str,
    error: DecodeError,
    requirement: Requirement,
    errors: &mut Vec<ResponseError>,
    trace: &mut dyn DecodeTrace,
) {
    trace.on_field_failed(path, &error, requirement);
    if requirement.is_required() {
        errors.push(ResponseError::new(path, error));
    }
}
