//! Content delivery API client implementation.
//!
//! Plain REST-over-HTTPS with `reqwest` and `serde_json`. Responses are
//! deserialized into the envelope types and normalized into [`Entry`]
//! values with asset links resolved.

use std::collections::BTreeSet;
use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use gilded_hamper_core::{AssetId, EntryId};

use crate::config::ContentfulConfig;

use super::ContentUnavailable;
use super::normalize::{absolute_asset_url, asset_link_id, manifest_url};
use super::types::{
    AssetCollectionEnvelope, AssetEnvelope, CollectionEnvelope, Entry, EntryEnvelope,
};

const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";

/// Link-resolution depth for single-entry fetches.
const ENTRY_INCLUDE_DEPTH: u8 = 2;
/// Link-resolution depth for list fetches.
const LIST_INCLUDE_DEPTH: u8 = 10;

/// Content type tag under which products are authored.
pub const PRODUCT_CONTENT_TYPE: &str = "product";

// =============================================================================
// ContentClient
// =============================================================================

/// Client for the content delivery API.
///
/// Cheap to clone. Constructed from optional credentials: an unconfigured
/// client is valid and answers every operation with
/// [`ContentUnavailable::NotConfigured`].
#[derive(Clone)]
pub struct ContentClient {
    inner: Arc<ContentClientInner>,
}

struct ContentClientInner {
    http: reqwest::Client,
    credentials: Option<Credentials>,
}

struct Credentials {
    /// `{base}/spaces/{space_id}`
    space_url: String,
    access_token: String,
}

impl ContentClient {
    /// Create a client against the production content delivery API.
    #[must_use]
    pub fn new(config: Option<&ContentfulConfig>) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    #[must_use]
    pub fn with_base_url(config: Option<&ContentfulConfig>, base_url: &str) -> Self {
        let credentials = config.map(|config| Credentials {
            space_url: format!(
                "{}/spaces/{}",
                base_url.trim_end_matches('/'),
                config.space_id
            ),
            access_token: config.access_token.expose_secret().to_owned(),
        });

        Self {
            inner: Arc::new(ContentClientInner {
                http: reqwest::Client::new(),
                credentials,
            }),
        }
    }

    /// Whether delivery credentials were supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.inner.credentials.is_some()
    }

    fn credentials(&self) -> Result<&Credentials, ContentUnavailable> {
        self.inner
            .credentials
            .as_ref()
            .ok_or(ContentUnavailable::NotConfigured)
    }

    /// Execute a GET request and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ContentUnavailable> {
        let response = self.inner.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentUnavailable::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Entry Methods
    // =========================================================================

    /// Fetch a single entry by id, with asset links resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when unconfigured, on transport or
    /// status failure, or when the body does not parse.
    #[instrument(skip(self), fields(entry_id = %id))]
    pub async fn fetch_entry(&self, id: &EntryId) -> Result<Entry, ContentUnavailable> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/entries/{}?access_token={}&include={}",
            credentials.space_url, id, credentials.access_token, ENTRY_INCLUDE_DEPTH
        );

        let envelope: EntryEnvelope = self.get_json(url).await?;
        Ok(self.resolve_asset_links(envelope).await)
    }

    /// Fetch entries of one content type, with asset links resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when unconfigured, on transport or
    /// status failure, or when the body does not parse. An empty result set
    /// is not an error here; list callers decide what emptiness means.
    #[instrument(skip(self))]
    pub async fn fetch_entries(
        &self,
        content_type: &str,
        limit: u32,
    ) -> Result<Vec<Entry>, ContentUnavailable> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/entries?content_type={}&access_token={}&include={}&limit={}",
            credentials.space_url,
            content_type,
            credentials.access_token,
            LIST_INCLUDE_DEPTH,
            limit
        );

        let envelope: CollectionEnvelope = self.get_json(url).await?;

        // Linked assets arrive once, at the collection level; resolve each
        // item against that shared manifest.
        let manifest = envelope.includes.map(|i| i.assets).unwrap_or_default();
        let mut entries = Vec::with_capacity(envelope.items.len());
        for item in envelope.items {
            entries
                .push(self.resolve_fields(item.sys.id, item.fields, &manifest).await);
        }

        debug!(count = entries.len(), "fetched entries");
        Ok(entries)
    }

    /// Collect the sorted, distinct category keys across all product entries.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable::Missing`] when no product entries
    /// exist, plus the usual unconfigured/transport/parse failures.
    #[instrument(skip(self))]
    pub async fn fetch_distinct_category_keys(&self) -> Result<Vec<String>, ContentUnavailable> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/entries?content_type={}&access_token={}&limit=100",
            credentials.space_url, PRODUCT_CONTENT_TYPE, credentials.access_token
        );

        let envelope: CollectionEnvelope = self.get_json(url).await?;
        if envelope.items.is_empty() {
            return Err(ContentUnavailable::Missing("no product entries".to_owned()));
        }

        let keys: BTreeSet<String> = envelope
            .items
            .iter()
            .filter_map(|item| item.fields.get("category"))
            .filter_map(Value::as_str)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect();

        Ok(keys.into_iter().collect())
    }

    // =========================================================================
    // Asset Methods
    // =========================================================================

    /// Fetch a single asset's absolute file URL.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable::Missing`] when the asset carries no
    /// file, plus the usual unconfigured/transport/parse failures.
    #[instrument(skip(self), fields(asset_id = %id))]
    pub async fn fetch_asset(&self, id: &AssetId) -> Result<String, ContentUnavailable> {
        let credentials = self.credentials()?;
        let url = format!(
            "{}/assets/{}?access_token={}",
            credentials.space_url, id, credentials.access_token
        );

        let envelope: AssetEnvelope = self.get_json(url).await?;
        envelope
            .fields
            .file
            .map(|file| absolute_asset_url(&file.url))
            .ok_or_else(|| ContentUnavailable::Missing(format!("asset {id} has no file")))
    }

    /// Search assets by text and return their absolute file URLs.
    ///
    /// An empty query lists assets without a search filter. Assets without
    /// a file are skipped, so the result may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when unconfigured or on transport,
    /// status, or parse failure.
    #[instrument(skip(self))]
    pub async fn fetch_assets_by_query(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<String>, ContentUnavailable> {
        let credentials = self.credentials()?;
        let search = if query.is_empty() {
            String::new()
        } else {
            format!("&query={}", urlencoding::encode(query))
        };
        let url = format!(
            "{}/assets?access_token={}{}&limit={}",
            credentials.space_url, credentials.access_token, search, limit
        );

        let envelope: AssetCollectionEnvelope = self.get_json(url).await?;
        Ok(envelope
            .items
            .iter()
            .filter_map(|asset| asset.fields.file.as_ref())
            .map(|file| absolute_asset_url(&file.url))
            .collect())
    }

    // =========================================================================
    // Asset Link Resolution
    // =========================================================================

    /// Resolve every asset-reference link in an entry's fields to an
    /// absolute URL, preferring the entry's own included-assets manifest and
    /// falling back to a one-off asset fetch per unresolved reference.
    ///
    /// Non-asset fields are left untouched; a reference that cannot be
    /// resolved at all keeps its raw link value.
    pub async fn resolve_asset_links(&self, envelope: EntryEnvelope) -> Entry {
        let manifest = envelope.includes.map(|i| i.assets).unwrap_or_default();
        self.resolve_fields(envelope.sys.id, envelope.fields, &manifest)
            .await
    }

    async fn resolve_fields(
        &self,
        id: String,
        mut fields: Map<String, Value>,
        manifest: &[AssetEnvelope],
    ) -> Entry {
        for value in fields.values_mut() {
            if let Some(asset_id) = asset_link_id(value).map(str::to_owned) {
                if let Some(url) = self.resolve_link(&asset_id, manifest).await {
                    *value = Value::String(url);
                }
            } else if let Value::Array(items) = value {
                for item in items.iter_mut() {
                    if let Some(asset_id) = asset_link_id(item).map(str::to_owned)
                        && let Some(url) = self.resolve_link(&asset_id, manifest).await
                    {
                        *item = Value::String(url);
                    }
                }
            }
        }

        Entry {
            id: EntryId::new(id),
            fields,
        }
    }

    /// Manifest lookup first, then a direct asset fetch.
    async fn resolve_link(&self, asset_id: &str, manifest: &[AssetEnvelope]) -> Option<String> {
        if let Some(url) = manifest_url(manifest, asset_id) {
            return Some(url);
        }

        match self.fetch_asset(&AssetId::new(asset_id)).await {
            Ok(url) => Some(url),
            Err(err) => {
                debug!(asset_id, error = %err, "failed to resolve asset link");
                None
            }
        }
    }
}
