//! Conversions from normalized content entries to catalog domain types.
//!
//! Field-level absence is tolerated everywhere: a missing attribute becomes
//! an empty string, a zero price, or `None` - never an error. Attributes the
//! source authors inconsistently go through candidate-name normalization.

use serde_json::Value;

use gilded_hamper_core::{Price, ProductId, Rating, TestimonialId};

use crate::contentful::Entry;
use crate::contentful::normalize::{FieldMapping, absolute_asset_url, first_present, normalize_fields};

use super::{HeroContent, Product, Testimonial};

/// Candidate source names per testimonial attribute, as observed in the
/// content space (including the long-standing `cutomername` typo).
const TESTIMONIAL_MAPPING: &[FieldMapping<'static>] = &[
    (
        "name",
        &["cutomername", "customername", "customerName", "Customer Name"],
    ),
    ("location", &["location", "Location"]),
    ("text", &["quote", "Quote", "testimonial", "Testimonial"]),
    ("rating", &["rating", "Rating"]),
];

/// Hero section attribute names as authored on the home entry.
const HERO_MAPPING: &[FieldMapping<'static>] = &[
    ("main_title_1", &["maintitle1"]),
    ("main_title_2", &["maintitle2"]),
    ("subtext", &["subtext"]),
    ("small_text", &["smalltext"]),
    ("hero_image", &["heroImage"]),
];

pub(crate) fn product_from_entry(entry: &Entry) -> Product {
    Product {
        id: ProductId::new(entry.id.as_str()),
        name: str_field(entry, "name"),
        code: str_field(entry, "code"),
        description: str_field(entry, "description"),
        items: string_list(entry.field("items")),
        price: Price::new(entry.field("price").and_then(Value::as_i64).unwrap_or(0)),
        category: entry
            .field("category")
            .and_then(Value::as_str)
            .filter(|category| !category.is_empty())
            .unwrap_or("default")
            .to_owned(),
        featured: entry
            .field("featured")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        // Asset links were resolved upstream, so a usable image is a URL
        // string by now; anything else stays absent.
        image: first_present(&entry.fields, &["product_image", "productImage"])
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

pub(crate) fn testimonial_from_entry(entry: &Entry) -> Testimonial {
    let fields = normalize_fields(&entry.fields, TESTIMONIAL_MAPPING);

    Testimonial {
        id: TestimonialId::new(entry.id.as_str()),
        name: owned_str(fields.get("name")),
        location: owned_str(fields.get("location")),
        text: owned_str(fields.get("text")),
        rating: fields
            .get("rating")
            .and_then(Value::as_i64)
            .map_or_else(Rating::default, Rating::clamped),
    }
}

pub(crate) fn hero_from_entry(entry: &Entry) -> HeroContent {
    let fields = normalize_fields(&entry.fields, HERO_MAPPING);
    let text = |name: &str| {
        fields
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    HeroContent {
        main_title_1: text("main_title_1"),
        main_title_2: text("main_title_2"),
        subtext: text("subtext"),
        small_text: text("small_text"),
        hero_image: text("hero_image"),
    }
}

/// Pull gallery image URLs out of a gallery entry.
///
/// The image list may contain plain URL strings (already-resolved asset
/// links) or raw asset objects; protocol-relative URLs are normalized.
pub(crate) fn gallery_urls_from_entry(entry: &Entry) -> Vec<String> {
    first_present(&entry.fields, &["galleryImages", "images"])
        .and_then(Value::as_array)
        .map(|images| images.iter().filter_map(gallery_url).collect())
        .unwrap_or_default()
}

fn gallery_url(value: &Value) -> Option<String> {
    let url = match value {
        Value::String(url) if !url.is_empty() => url.as_str(),
        Value::Object(map) => map
            .get("url")
            .and_then(Value::as_str)
            .or_else(|| {
                map.get("fields")
                    .and_then(|fields| fields.get("file"))
                    .and_then(|file| file.get("url"))
                    .and_then(Value::as_str)
            })
            .filter(|url| !url.is_empty())?,
        _ => return None,
    };
    Some(absolute_asset_url(url))
}

fn str_field(entry: &Entry, name: &str) -> String {
    entry
        .field(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn owned_str(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
