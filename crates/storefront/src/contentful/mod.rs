//! Content delivery API client.
//!
//! # Architecture
//!
//! - Plain HTTPS GET against the content delivery REST API, credentials in
//!   the query string
//! - The content store is the source of truth - no local sync, no caching,
//!   no retries; each session fetches once on load
//! - Asset-reference links inside entry fields are resolved to absolute
//!   URLs, preferring the response's included-assets manifest and falling
//!   back to one per-asset fetch per unresolved reference
//!
//! # Failure model
//!
//! Every operation fails soft: missing credentials, transport failures,
//! unexpected statuses, and malformed bodies all surface as
//! [`ContentUnavailable`] so callers (and tests) can tell "legitimately
//! zero items" apart from "fetch failed", then degrade the section to
//! absent. Nothing in this module panics or retries.
//!
//! # Example
//!
//! ```rust,ignore
//! use gilded_hamper_storefront::contentful::ContentClient;
//!
//! let client = ContentClient::new(config.contentful.as_ref());
//!
//! // Fetch all product entries with resolved image URLs
//! let products = client.fetch_entries("product", 100).await?;
//!
//! // Fetch a single asset URL
//! let url = client.fetch_asset(&AssetId::new("hero-shot")).await?;
//! ```

mod client;
pub mod normalize;
pub mod types;

pub use client::{ContentClient, PRODUCT_CONTENT_TYPE};
pub use types::{AssetEnvelope, CollectionEnvelope, Entry, EntryEnvelope};

use thiserror::Error;

/// Why a content operation produced no data.
///
/// Callers degrade every variant to an absent section; the distinction
/// exists so behaviour stays observable and testable.
#[derive(Debug, Error)]
pub enum ContentUnavailable {
    /// Content delivery credentials were not supplied.
    #[error("content delivery credentials are not configured")]
    NotConfigured,

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The requested resource does not exist or carries no usable data.
    #[error("not found: {0}")]
    Missing(String),
}
