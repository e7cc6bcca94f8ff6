//! Wire types for the content delivery API.
//!
//! These mirror the JSON envelopes the API returns; [`Entry`] is the
//! normalized shape handed to the rest of the crate after asset links have
//! been resolved.

use gilded_hamper_core::EntryId;
use serde::Deserialize;
use serde_json::{Map, Value};

/// `sys` metadata block carried by entries, assets, and links.
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    /// Resource identifier.
    pub id: String,
    /// Resource kind (`Entry`, `Asset`, `Link`, ...).
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Target kind for `Link` resources.
    #[serde(rename = "linkType", default)]
    pub link_type: Option<String>,
}

/// A single entry as returned by the API, fields unresolved.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryEnvelope {
    pub sys: Sys,
    /// Raw field map; asset references are still `Link` objects here.
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Included-assets manifest, when the API embedded linked assets.
    #[serde(default)]
    pub includes: Option<IncludedAssets>,
}

/// A list of entries with a shared included-assets manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionEnvelope {
    #[serde(default)]
    pub items: Vec<EntryEnvelope>,
    #[serde(default)]
    pub includes: Option<IncludedAssets>,
}

/// The `includes` block of a response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludedAssets {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<AssetEnvelope>,
}

/// An asset as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetEnvelope {
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

/// Fields of an asset; only the file reference matters here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub file: Option<AssetFile>,
}

/// File block of an asset. URLs may be protocol-relative.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetFile {
    pub url: String,
}

/// A list of assets (asset search responses).
#[derive(Debug, Clone, Deserialize)]
pub struct AssetCollectionEnvelope {
    #[serde(default)]
    pub items: Vec<AssetEnvelope>,
}

/// A normalized entry: identifier plus fields with asset links resolved to
/// absolute URL strings where possible.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry identifier.
    pub id: EntryId,
    /// Field map; resolved asset references appear as URL strings.
    pub fields: Map<String, Value>,
}

impl Entry {
    /// Look up a field by its exact source name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
