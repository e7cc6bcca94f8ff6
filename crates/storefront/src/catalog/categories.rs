//! Category descriptors and their display labels.
//!
//! Category keys come from product entries; labels are translated locally.
//! The `all` category is synthetic - it never appears in source data and
//! matches every product when used as a filter.
//!
//! The built category list is a plain return value stored in session state;
//! there is deliberately no process-wide category singleton.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Synthetic filter key matching every product.
pub const ALL_CATEGORY_KEY: &str = "all";

/// Display locales supported by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English
    En,
    /// Hindi
    Hi,
    /// Gujarati
    Gu,
}

/// A category label in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    en: String,
    hi: String,
    gu: String,
}

impl CategoryLabel {
    fn new(en: &str, hi: &str, gu: &str) -> Self {
        Self {
            en: en.to_owned(),
            hi: hi.to_owned(),
            gu: gu.to_owned(),
        }
    }

    /// A label that shows the raw key in every locale, for category keys
    /// without a translation entry.
    fn passthrough(key: &str) -> Self {
        Self::new(key, key, key)
    }

    /// The label text for a locale.
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
            Locale::Gu => &self.gu,
        }
    }
}

/// A filterable product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// Filter key as authored on product entries (or the `all` sentinel).
    pub key: String,
    /// Localized display label.
    pub label: CategoryLabel,
}

/// Translated labels for the category keys the shop is known to use.
fn translation(key: &str) -> Option<CategoryLabel> {
    match key {
        "birthday" => Some(CategoryLabel::new("Birthday", "जन्मदिन", "જન્મદિન")),
        "womensday" => Some(CategoryLabel::new("Women's Day", "महिला दिवस", "મહિલા દિવસ")),
        "spa" => Some(CategoryLabel::new("Spa Hampers", "स्पा हैम्पर", "સ્પા હેમ્પર")),
        "wellness" => Some(CategoryLabel::new("Wellness", "वेलनेस", "વેલનેસ")),
        "wedding" => Some(CategoryLabel::new("Wedding", "शादी", "લગ્ન")),
        _ => None,
    }
}

fn all_category() -> CategoryDescriptor {
    CategoryDescriptor {
        key: ALL_CATEGORY_KEY.to_owned(),
        label: CategoryLabel::new("All", "सभी", "બધા"),
    }
}

/// Build the category list from the keys observed on product entries.
///
/// Prepends the synthetic `all` category. Keys without a translation are
/// kept with a passthrough label rather than dropped. An empty key list
/// falls back to [`default_categories`].
#[must_use]
pub fn build_categories(keys: &[String]) -> Vec<CategoryDescriptor> {
    if keys.is_empty() {
        warn!("no category keys observed, using default categories");
        return default_categories();
    }

    let mut categories = vec![all_category()];
    for key in keys {
        let label = translation(key).unwrap_or_else(|| {
            warn!(category = %key, "no translation for category key");
            CategoryLabel::passthrough(key)
        });
        categories.push(CategoryDescriptor {
            key: key.clone(),
            label,
        });
    }
    categories
}

/// The category list shown before (or without) live catalog data.
#[must_use]
pub fn default_categories() -> Vec<CategoryDescriptor> {
    let mut categories = vec![all_category()];
    for key in ["womensday", "spa", "wellness", "wedding"] {
        if let Some(label) = translation(key) {
            categories.push(CategoryDescriptor {
                key: key.to_owned(),
                label,
            });
        }
    }
    categories
}

/// Whether a product category passes a filter key.
#[must_use]
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL_CATEGORY_KEY || filter == category
}
