//! Field normalization for inconsistently-authored content.
//!
//! The content source's field naming is not uniform - the same attribute
//! appears under several casings and spellings across entries. Callers
//! therefore declare *candidate* source names per target attribute and the
//! first present, non-empty one wins. An attribute with no match maps to an
//! explicit `Null`, never an error.

use serde_json::{Map, Value};

use super::types::AssetEnvelope;

/// A target attribute with its candidate source field names, in preference
/// order.
pub type FieldMapping<'a> = (&'a str, &'a [&'a str]);

/// Project raw entry fields onto fixed internal attribute names.
///
/// Each target attribute resolves to the first candidate that is present
/// and non-empty; unresolved attributes are kept with an explicit `Null`
/// value so callers can distinguish "absent" from "never asked for".
#[must_use]
pub fn normalize_fields(fields: &Map<String, Value>, mapping: &[FieldMapping<'_>]) -> Map<String, Value> {
    let mut normalized = Map::new();
    for (target, candidates) in mapping {
        let value = first_present(fields, candidates).cloned().unwrap_or(Value::Null);
        normalized.insert((*target).to_owned(), value);
    }
    normalized
}

/// Find the first candidate field that is present and non-empty.
#[must_use]
pub fn first_present<'a>(fields: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|candidate| fields.get(*candidate))
        .find(|value| !is_empty(value))
}

/// Treat `null` and empty strings as absent.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Make an asset file URL absolute.
///
/// Asset file URLs come back protocol-relative (`//images...`); anything
/// not already starting with `http` gets the `https:` scheme prefixed.
#[must_use]
pub fn absolute_asset_url(url: &str) -> String {
    if url.starts_with("http") {
        url.to_owned()
    } else {
        format!("https:{url}")
    }
}

/// If `value` is an asset-reference link, return the linked asset id.
#[must_use]
pub fn asset_link_id(value: &Value) -> Option<&str> {
    let sys = value.get("sys")?;
    if sys.get("type").and_then(Value::as_str) == Some("Link")
        && sys.get("linkType").and_then(Value::as_str) == Some("Asset")
    {
        sys.get("id").and_then(Value::as_str)
    } else {
        None
    }
}

/// Look up an asset's absolute file URL in an included-assets manifest.
#[must_use]
pub fn manifest_url(manifest: &[AssetEnvelope], asset_id: &str) -> Option<String> {
    manifest
        .iter()
        .find(|asset| asset.sys.id == asset_id)
        .and_then(|asset| asset.fields.file.as_ref())
        .map(|file| absolute_asset_url(&file.url))
}
