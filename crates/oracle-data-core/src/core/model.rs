// oracle-data-core/src/core/model.rs
// ============================================================================
// Module: Oracle Data Entities
// Description: Provider profile, asset records, and their partial forms.
// Purpose: Typed targets for decoding and sources for encoding.
// Dependencies: crate::core::constants, serde
// ============================================================================

//! ## Overview
//! A record set carries exactly one [`ProviderData`] profile and any number of
//! [`ProviderAsset`] records. Assets come in two shapes selected by the
//! verification status tier. Decoding fills a partial form first; the partial
//! form is completed into the typed entity only when no field failed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::core::constants::AssetStatus;
use crate::core::constants::ProviderVersion;
use crate::core::constants::StatusTier;

/// Localized description text keyed by language code.
pub type Description = BTreeMap<String, String>;

/// Treats an empty description map as absent.
fn non_empty(description: Option<Description>) -> Option<Description> {
    description.filter(|description| !description.is_empty())
}

// ============================================================================
// SECTION: Provider Data
// ============================================================================

/// Data provider profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderData {
    /// Protocol version.
    pub version: ProviderVersion,
    /// Display name.
    pub name: String,
    /// Homepage link.
    pub link: String,
    /// Contact email.
    pub email: String,
    /// Localized descriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl ProviderData {
    /// Returns the canonical form that decoding its own encoding yields.
    ///
    /// `Some` of an empty description map becomes `None`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.description = non_empty(self.description.take());
        self
    }
}

// ============================================================================
// SECTION: Provider Assets
// ============================================================================

/// Asset record for scam, suspicious, and unverified statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalAsset {
    /// Asset identifier.
    pub id: String,
    /// Protocol version.
    pub version: ProviderVersion,
    /// Verification status.
    pub status: AssetStatus,
    /// Optional project link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Optional ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Optional contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional localized descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

/// Asset record for detailed and verified statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedAsset {
    /// Asset identifier.
    pub id: String,
    /// Protocol version.
    pub version: ProviderVersion,
    /// Verification status.
    pub status: AssetStatus,
    /// Logo payload.
    pub logo: String,
    /// Project link.
    pub link: String,
    /// Ticker.
    pub ticker: String,
    /// Contact email.
    pub email: String,
    /// Localized descriptions.
    pub description: Description,
}

/// Asset verification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProviderAsset {
    /// Minimal-tier record.
    Minimal(MinimalAsset),
    /// Detailed-tier record.
    Detailed(DetailedAsset),
}

impl ProviderAsset {
    /// Returns the asset identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Minimal(asset) => &asset.id,
            Self::Detailed(asset) => &asset.id,
        }
    }

    /// Returns the protocol version.
    #[must_use]
    pub const fn version(&self) -> ProviderVersion {
        match self {
            Self::Minimal(asset) => asset.version,
            Self::Detailed(asset) => asset.version,
        }
    }

    /// Returns the verification status.
    #[must_use]
    pub const fn status(&self) -> AssetStatus {
        match self {
            Self::Minimal(asset) => asset.status,
            Self::Detailed(asset) => asset.status,
        }
    }

    /// Returns the canonical form that decoding its own encoding yields.
    ///
    /// A minimal-tier `Some` of an empty description map becomes `None`; the
    /// detailed tier always carries a map.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Minimal(mut asset) => {
                asset.description = non_empty(asset.description.take());
                Self::Minimal(asset)
            }
            Self::Detailed(asset) => Self::Detailed(asset),
        }
    }

    /// Returns the localized descriptions, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        match self {
            Self::Minimal(asset) => asset.description.as_ref(),
            Self::Detailed(asset) => Some(&asset.description),
        }
    }
}

// ============================================================================
// SECTION: Entity
// ============================================================================

/// Either entity kind a record set can be encoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    /// Provider profile.
    Provider(ProviderData),
    /// Asset record.
    Asset(ProviderAsset),
}

impl Entity {
    /// Returns the canonical form that decoding its own encoding yields.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Provider(data) => Self::Provider(data.normalized()),
            Self::Asset(asset) => Self::Asset(asset.normalized()),
        }
    }
}

impl From<ProviderData> for Entity {
    fn from(data: ProviderData) -> Self {
        Self::Provider(data)
    }
}

impl From<ProviderAsset> for Entity {
    fn from(asset: ProviderAsset) -> Self {
        Self::Asset(asset)
    }
}

// ============================================================================
// SECTION: Partial Forms
// ============================================================================

/// Completion of a partial decode target into its typed entity.
pub trait PartialRecord<T>: Default {
    /// Builds the typed entity, or names the first required attribute still absent.
    ///
    /// # Errors
    ///
    /// Returns the path of the first missing required attribute.
    fn complete(&self) -> Result<T, &'static str>;
}

/// Provider profile with every attribute optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialProviderData {
    /// Protocol version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ProviderVersion>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Homepage link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Localized descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl PartialRecord<ProviderData> for PartialProviderData {
    fn complete(&self) -> Result<ProviderData, &'static str> {
        Ok(ProviderData {
            version: self.version.ok_or("version")?,
            name: self.name.clone().ok_or("name")?,
            link: self.link.clone().ok_or("link")?,
            email: self.email.clone().ok_or("email")?,
            description: self.description.clone(),
        })
    }
}

/// Asset record with every attribute optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialProviderAsset {
    /// Asset identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Protocol version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ProviderVersion>,
    /// Verification status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssetStatus>,
    /// Logo payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Project link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Ticker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Localized descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
}

impl PartialProviderAsset {
    /// Creates a partial record carrying only the identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl PartialRecord<ProviderAsset> for PartialProviderAsset {
    fn complete(&self) -> Result<ProviderAsset, &'static str> {
        let id = self.id.clone().ok_or("id")?;
        let version = self.version.ok_or("version")?;
        let status = self.status.ok_or("status")?;
        match status.tier() {
            StatusTier::Minimal => Ok(ProviderAsset::Minimal(MinimalAsset {
                id,
                version,
                status,
                link: self.link.clone(),
                ticker: self.ticker.clone(),
                email: self.email.clone(),
                description: self.description.clone(),
            })),
            // An empty language list resolves no description; that is an empty map here.
            StatusTier::Detailed => Ok(ProviderAsset::Detailed(DetailedAsset {
                id,
                version,
                status,
                logo: self.logo.clone().ok_or("logo")?,
                link: self.link.clone().ok_or("link")?,
                ticker: self.ticker.clone().ok_or("ticker")?,
                email: self.email.clone().ok_or("email")?,
                description: self.description.clone().unwrap_or_default(),
            })),
        }
    }
}
