// oracle-data-core/src/runtime/template.rs
// ============================================================================
// Module: Key Templating
// Description: Renders and matches placeholder key patterns.
// Purpose: Map entity identifiers and language codes into record keys.
// Dependencies: crate::core::constants
// ============================================================================

//! ## Overview
//! Patterns carry `<ASSET_ID>` and `<LANG>` tokens. Rendering replaces the
//! first occurrence of a token with the value wrapped in angle brackets, so
//! `status_<ASSET_ID>` becomes `status_<8LQW...>`. The wrapping is part of the
//! wire format: [`asset_id_from_key`] recovers identifiers by matching it.

use crate::core::constants::ASSET_DESCRIPTION_PATTERN;
use crate::core::constants::ASSET_ID_PLACEHOLDER;
use crate::core::constants::ASSET_STATUS_PATTERN;
use crate::core::constants::DATA_PROVIDER_DESCRIPTION_PATTERN;
use crate::core::constants::LANG_LIST_SEPARATOR;
use crate::core::constants::LANG_PLACEHOLDER;

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders `pattern`, substituting the language first and the asset id second.
#[must_use]
pub fn render_key(pattern: &str, asset_id: Option<&str>, lang: Option<&str>) -> String {
    let mut key = pattern.to_string();
    if let Some(lang) = lang {
        key = replace_placeholder(&key, LANG_PLACEHOLDER, lang);
    }
    if let Some(asset_id) = asset_id {
        key = replace_placeholder(&key, ASSET_ID_PLACEHOLDER, asset_id);
    }
    key
}

/// Renders an asset-scoped pattern for `asset_id`.
#[must_use]
pub fn render_asset_key(pattern: &str, asset_id: &str) -> String {
    render_key(pattern, Some(asset_id), None)
}

/// Renders the description key for `lang`, asset-scoped when `asset_id` is set.
#[must_use]
pub fn render_description_key(lang: &str, asset_id: Option<&str>) -> String {
    match asset_id {
        Some(asset_id) => render_key(ASSET_DESCRIPTION_PATTERN, Some(asset_id), Some(lang)),
        None => render_key(DATA_PROVIDER_DESCRIPTION_PATTERN, None, Some(lang)),
    }
}

/// Replaces the first `token` in `template` with `<value>`.
fn replace_placeholder(template: &str, token: &str, value: &str) -> String {
    template.replacen(token, &format!("<{value}>"), 1)
}

// ============================================================================
// SECTION: Matching
// ============================================================================

/// Returns the asset identifier when `key` is a rendered asset status key.
///
/// The identifier runs up to the first `>` and must be non-empty and free of
/// line terminators; the key must equal the status pattern rendered with it.
#[must_use]
pub fn asset_id_from_key(key: &str) -> Option<&str> {
    let (prefix, suffix) = ASSET_STATUS_PATTERN.split_once(ASSET_ID_PLACEHOLDER)?;
    let wrapped = key.strip_prefix(prefix)?.strip_prefix('<')?;
    let (asset_id, rest) = wrapped.split_once('>')?;
    if asset_id.is_empty() || asset_id.contains(['\n', '\r', '\u{2028}', '\u{2029}']) {
        return None;
    }
    (rest == suffix).then_some(asset_id)
}

/// Splits a language list into codes, skipping empty segments.
pub fn parse_lang_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(LANG_LIST_SEPARATOR).filter(|lang| !lang.is_empty())
}
