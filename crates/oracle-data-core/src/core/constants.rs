// oracle-data-core/src/core/constants.rs
// ============================================================================
// Module: Oracle Data Constants
// Description: Protocol versions, verification statuses, and key patterns.
// Purpose: Provide the closed constant tables every codec path shares.
// Dependencies: crate::core::error, serde
// ============================================================================

//! ## Overview
//! Oracle data records are flat key/value sets. Keys are either fixed
//! provider-level names or patterns carrying an `<ASSET_ID>` and/or `<LANG>`
//! placeholder. Protocol versions and verification statuses are closed enums;
//! integer wire values outside them are rejected at decode time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::DecodeError;

// ============================================================================
// SECTION: Protocol Versions
// ============================================================================

/// Data provider protocol versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum ProviderVersion {
    /// Initial protocol version (wire value `0`).
    Beta,
}

impl ProviderVersion {
    /// Version written by every encoder.
    pub const CURRENT: Self = Self::Beta;

    /// Returns the integer wire value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Beta => 0,
        }
    }
}

impl From<ProviderVersion> for i64 {
    fn from(version: ProviderVersion) -> Self {
        version.as_i64()
    }
}

impl TryFrom<i64> for ProviderVersion {
    type Error = DecodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Beta),
            version => Err(DecodeError::UnsupportedVersion {
                version,
            }),
        }
    }
}

impl fmt::Display for ProviderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_i64().fmt(f)
    }
}

// ============================================================================
// SECTION: Verification Statuses
// ============================================================================

/// Asset verification status levels.
///
/// # Invariants
/// - Wire values are `-2..=2`; the sign only separates the two schema tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum AssetStatus {
    /// Known scam (`-2`).
    Scam,
    /// Suspicious asset (`-1`).
    Suspicious,
    /// Not verified yet (`0`).
    NotVerified,
    /// Detailed information provided (`1`).
    Detailed,
    /// Fully verified (`2`).
    Verified,
}

impl AssetStatus {
    /// All statuses in wire-value order.
    pub const ALL: [Self; 5] =
        [Self::Scam, Self::Suspicious, Self::NotVerified, Self::Detailed, Self::Verified];

    /// Returns the integer wire value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Scam => -2,
            Self::Suspicious => -1,
            Self::NotVerified => 0,
            Self::Detailed => 1,
            Self::Verified => 2,
        }
    }

    /// Returns the schema tier this status selects.
    #[must_use]
    pub const fn tier(self) -> StatusTier {
        match self {
            Self::Scam | Self::Suspicious | Self::NotVerified => StatusTier::Minimal,
            Self::Detailed | Self::Verified => StatusTier::Detailed,
        }
    }
}

impl From<AssetStatus> for i64 {
    fn from(status: AssetStatus) -> Self {
        status.as_i64()
    }
}

impl TryFrom<i64> for AssetStatus {
    type Error = DecodeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -2 => Ok(Self::Scam),
            -1 => Ok(Self::Suspicious),
            0 => Ok(Self::NotVerified),
            1 => Ok(Self::Detailed),
            2 => Ok(Self::Verified),
            status => Err(DecodeError::InvalidStatus {
                status,
            }),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_i64().fmt(f)
    }
}

/// Schema tier selected by an asset's verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    /// Scam, suspicious, and unverified assets: everything past the status is optional.
    Minimal,
    /// Detailed and verified assets: logo, link, ticker, email, and description are required.
    Detailed,
}

// ============================================================================
// SECTION: Placeholders
// ============================================================================

/// Placeholder substituted with an asset identifier.
pub const ASSET_ID_PLACEHOLDER: &str = "<ASSET_ID>";
/// Placeholder substituted with a language code.
pub const LANG_PLACEHOLDER: &str = "<LANG>";
/// Separator between codes in the language list field.
pub const LANG_LIST_SEPARATOR: char = ',';

// ============================================================================
// SECTION: Provider Keys
// ============================================================================

/// Provider protocol version key.
pub const DATA_PROVIDER_VERSION_KEY: &str = "data_provider_version";
/// Provider display name key.
pub const DATA_PROVIDER_NAME_KEY: &str = "data_provider_name";
/// Provider homepage link key.
pub const DATA_PROVIDER_LINK_KEY: &str = "data_provider_link";
/// Provider contact email key.
pub const DATA_PROVIDER_EMAIL_KEY: &str = "data_provider_email";
/// Comma-separated language list key, shared by provider and asset descriptions.
pub const DATA_PROVIDER_LANG_LIST_KEY: &str = "data_provider_lang_list";
/// Provider logo key. Reserved by the protocol; no schema reads it yet.
pub const DATA_PROVIDER_LOGO_KEY: &str = "data_provider_logo";
/// Provider description key pattern.
pub const DATA_PROVIDER_DESCRIPTION_PATTERN: &str = "data_provider_description_<LANG>";

// ============================================================================
// SECTION: Asset Key Patterns
// ============================================================================

/// Asset protocol version key pattern.
pub const ASSET_VERSION_PATTERN: &str = "version_<ASSET_ID>";
/// Asset verification status key pattern; its presence is what makes an asset discoverable.
pub const ASSET_STATUS_PATTERN: &str = "status_<ASSET_ID>";
/// Asset logo key pattern.
pub const ASSET_LOGO_PATTERN: &str = "logo_<ASSET_ID>";
/// Asset description key pattern.
pub const ASSET_DESCRIPTION_PATTERN: &str = "description_<LANG>_<ASSET_ID>";
/// Asset link key pattern.
pub const ASSET_LINK_PATTERN: &str = "link_<ASSET_ID>";
/// Asset ticker key pattern.
pub const ASSET_TICKER_PATTERN: &str = "ticker_<ASSET_ID>";
/// Asset email key pattern.
pub const ASSET_EMAIL_PATTERN: &str = "email_<ASSET_ID>";
