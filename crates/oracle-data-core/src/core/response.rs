// oracle-data-core/src/core/response.rs
// ============================================================================
// Module: Decode Responses
// Description: Ok/error envelopes returned by every decode call.
// Purpose: Carry partial content and ordered per-field errors on failure.
// Dependencies: crate::core::{error, model}, serde
// ============================================================================

//! ## Overview
//! Decoding never fails outright. It returns a [`Response`] that is either
//! [`Response::Ok`] with the typed entity or [`Response::Error`] with the
//! partial content that did parse and a non-empty list of [`ResponseError`]s.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::DecodeError;
use crate::core::model::PartialProviderAsset;
use crate::core::model::PartialProviderData;
use crate::core::model::ProviderAsset;
use crate::core::model::ProviderData;

// ============================================================================
// SECTION: Status Tokens
// ============================================================================

/// Response status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// Every required field decoded.
    Ok,
    /// At least one required field failed.
    Error,
}

impl ResponseStatus {
    /// Returns the wire token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Response Errors
// ============================================================================

/// One decode failure attributed to a result path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    /// Attribute path (`email`, `description.en`, ...).
    pub path: String,
    /// Failure detail.
    pub error: DecodeError,
}

impl ResponseError {
    /// Creates a new response error.
    pub fn new(path: impl Into<String>, error: DecodeError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

// ============================================================================
// SECTION: Response Envelope
// ============================================================================

/// Decode outcome for one entity.
///
/// # Invariants
/// - `Error.errors` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response<T, P> {
    /// Complete entity.
    Ok {
        /// Decoded entity.
        content: T,
    },
    /// Partial entity with the failures that prevented completion.
    Error {
        /// Attributes that did decode.
        content: P,
        /// Failures in processor order.
        errors: Vec<ResponseError>,
    },
}

impl<T, P> Response<T, P> {
    /// Returns the status token.
    #[must_use]
    pub const fn status(&self) -> ResponseStatus {
        match self {
            Self::Ok {
                ..
            } => ResponseStatus::Ok,
            Self::Error {
                ..
            } => ResponseStatus::Error,
        }
    }

    /// Returns true for [`Response::Ok`].
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Returns the decoded entity when complete.
    #[must_use]
    pub const fn content(&self) -> Option<&T> {
        match self {
            Self::Ok {
                content,
            } => Some(content),
            Self::Error {
                ..
            } => None,
        }
    }

    /// Returns the partial content when decoding failed.
    #[must_use]
    pub const fn partial(&self) -> Option<&P> {
        match self {
            Self::Ok {
                ..
            } => None,
            Self::Error {
                content, ..
            } => Some(content),
        }
    }

    /// Returns the recorded errors (empty for [`Response::Ok`]).
    #[must_use]
    pub fn errors(&self) -> &[ResponseError] {
        match self {
            Self::Ok {
                ..
            } => &[],
            Self::Error {
                errors, ..
            } => errors,
        }
    }

    /// Consumes the response, returning the entity when complete.
    #[must_use]
    pub fn into_content(self) -> Option<T> {
        match self {
            Self::Ok {
                content,
            } => Some(content),
            Self::Error {
                ..
            } => None,
        }
    }
}

/// Decode outcome for the provider profile.
pub type ProviderResponse = Response<ProviderData, PartialProviderData>;
/// Decode outcome for one asset record.
pub type AssetResponse = Response<ProviderAsset, PartialProviderAsset>;
