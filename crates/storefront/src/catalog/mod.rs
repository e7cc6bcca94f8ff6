//! Session-scoped catalog store.
//!
//! Holds the products, categories, testimonials, gallery images, and hero
//! copy for the current session. Populated once at session start by five
//! independent fetches that race freely - each writes only its own slice,
//! and a failed fetch leaves that slice empty (there is no bundled sample
//! catalog). Read-only for the rest of the session.

pub mod categories;
mod conversions;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use gilded_hamper_core::{Price, ProductId, Rating, TestimonialId};

use crate::config::StorefrontConfig;
use crate::contentful::{ContentClient, PRODUCT_CONTENT_TYPE};

pub use categories::{ALL_CATEGORY_KEY, CategoryDescriptor, CategoryLabel, Locale};

/// Content type tag under which testimonials are authored.
const TESTIMONIAL_CONTENT_TYPE: &str = "testimonial";

/// Result-count ceiling for catalog list fetches.
const CATALOG_FETCH_LIMIT: u32 = 100;
/// Result-count ceiling for the gallery asset-search fallback.
const GALLERY_FETCH_LIMIT: u32 = 50;

// =============================================================================
// Domain Types
// =============================================================================

/// A gift product in the catalog.
///
/// Immutable once fetched; identity is the product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identity, unique within the session's catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short catalogue code (e.g. "WD1"); may be empty.
    pub code: String,
    /// Display description.
    pub description: String,
    /// Labels of the items included in the hamper.
    pub items: Vec<String>,
    /// Whole-rupee price.
    pub price: Price,
    /// Category filter key.
    pub category: String,
    /// Whether the product is highlighted on the home view.
    pub featured: bool,
    /// Resolved image URL, when one is authored.
    pub image: Option<String>,
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub location: String,
    pub text: String,
    pub rating: Rating,
}

/// Hero section copy and image.
///
/// Every field is optional so the shell can render the not-yet-loaded state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub main_title_1: Option<String>,
    pub main_title_2: Option<String>,
    pub subtext: Option<String>,
    pub small_text: Option<String>,
    pub hero_image: Option<String>,
}

// =============================================================================
// CatalogStore
// =============================================================================

/// In-memory content for the current session.
///
/// Constructed by [`CatalogStore::load`] (or [`CatalogStore::empty`] when no
/// content source is reachable) and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<CategoryDescriptor>,
    testimonials: Vec<Testimonial>,
    gallery: Vec<String>,
    hero: Option<HeroContent>,
}

impl CatalogStore {
    /// A store with no content and the default category list.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: categories::default_categories(),
            ..Self::default()
        }
    }

    /// Populate a store from the content source.
    ///
    /// The five fetches run concurrently and race independently; each
    /// failure is logged and degrades only its own slice to empty.
    pub async fn load(client: &ContentClient, config: &StorefrontConfig) -> Self {
        let (categories, hero, products, testimonials, gallery) = tokio::join!(
            load_categories(client),
            load_hero(client, config),
            load_products(client),
            load_testimonials(client),
            load_gallery(client, config),
        );

        debug!(
            products = products.len(),
            testimonials = testimonials.len(),
            gallery = gallery.len(),
            hero = hero.is_some(),
            "catalog loaded"
        );

        Self {
            products,
            categories,
            testimonials,
            gallery,
            hero,
        }
    }

    /// All products, in source order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The category filter list, `all` sentinel first.
    #[must_use]
    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Gallery image URLs.
    #[must_use]
    pub fn gallery_images(&self) -> &[String] {
        &self.gallery
    }

    #[must_use]
    pub fn hero(&self) -> Option<&HeroContent> {
        self.hero.as_ref()
    }

    /// Products passing a category filter key (`all` passes everything).
    #[must_use]
    pub fn filter_by_category(&self, filter: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| categories::matches(filter, &product.category))
            .collect()
    }

    /// Products flagged as featured.
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }
}

// =============================================================================
// Slice Loaders
// =============================================================================

async fn load_categories(client: &ContentClient) -> Vec<CategoryDescriptor> {
    match client.fetch_distinct_category_keys().await {
        Ok(keys) => categories::build_categories(&keys),
        Err(err) => {
            warn!(error = %err, "category fetch unavailable, using defaults");
            categories::default_categories()
        }
    }
}

async fn load_hero(client: &ContentClient, config: &StorefrontConfig) -> Option<HeroContent> {
    let entry_id = config.home_entry_id.as_ref()?;
    match client.fetch_entry(entry_id).await {
        Ok(entry) => Some(conversions::hero_from_entry(&entry)),
        Err(err) => {
            warn!(error = %err, "hero fetch unavailable");
            None
        }
    }
}

async fn load_products(client: &ContentClient) -> Vec<Product> {
    match client
        .fetch_entries(PRODUCT_CONTENT_TYPE, CATALOG_FETCH_LIMIT)
        .await
    {
        Ok(entries) => entries.iter().map(conversions::product_from_entry).collect(),
        Err(err) => {
            warn!(error = %err, "product fetch unavailable");
            Vec::new()
        }
    }
}

async fn load_testimonials(client: &ContentClient) -> Vec<Testimonial> {
    match client
        .fetch_entries(TESTIMONIAL_CONTENT_TYPE, CATALOG_FETCH_LIMIT)
        .await
    {
        Ok(entries) => entries
            .iter()
            .map(conversions::testimonial_from_entry)
            .collect(),
        Err(err) => {
            warn!(error = %err, "testimonial fetch unavailable");
            Vec::new()
        }
    }
}

/// Gallery images come from a dedicated entry when one is configured,
/// otherwise from an asset search.
async fn load_gallery(client: &ContentClient, config: &StorefrontConfig) -> Vec<String> {
    if let Some(entry_id) = config.gallery_entry_id.as_ref() {
        return match client.fetch_entry(entry_id).await {
            Ok(entry) => conversions::gallery_urls_from_entry(&entry),
            Err(err) => {
                warn!(error = %err, "gallery entry fetch unavailable");
                Vec::new()
            }
        };
    }

    match client
        .fetch_assets_by_query(&config.gallery_query, GALLERY_FETCH_LIMIT)
        .await
    {
        Ok(urls) => urls,
        Err(err) => {
            warn!(error = %err, "gallery asset search unavailable");
            Vec::new()
        }
    }
}
