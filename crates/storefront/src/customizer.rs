//! Build-your-own hamper wizard.
//!
//! A fixed four-step linear flow: choose a base, toggle add-on items,
//! personalize, review. Backward navigation keeps later-step data;
//! completing the review converts the accumulated selection into a single
//! cart line and resets the wizard.
//!
//! Option lists (bases and add-on items) are themselves content: an
//! optional configuration entry carries them, with built-in lists as the
//! fallback. Options authored without a price - plain strings, or a zero
//! price - fall back to a fixed default unit price. This is documented
//! behaviour, not a bug: the option schema allows price-less authoring.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use gilded_hamper_core::{EntryId, Price, ProductId};

use crate::cart::CartLedger;
use crate::catalog::Product;
use crate::contentful::{ContentClient, Entry};

/// Price assumed for a base authored without one.
pub const DEFAULT_BASE_PRICE: Price = Price::new(1499);
/// Price assumed for an add-on item authored without one.
pub const DEFAULT_ITEM_PRICE: Price = Price::new(150);

/// Category assigned to customizer-built products. Distinct from every
/// catalog category so custom hampers never collide with filters.
pub const CUSTOM_PRODUCT_CATEGORY: &str = "hamper";

const CUSTOM_PRODUCT_CODE: &str = "CUSTOM";

/// Recipient names are silently truncated at this many characters.
pub const RECIPIENT_MAX_CHARS: usize = 100;
/// Gift messages are silently truncated at this many characters.
pub const MESSAGE_MAX_CHARS: usize = 500;

// =============================================================================
// Options
// =============================================================================

/// A selectable base or add-on item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOption {
    pub name: String,
    pub price: Price,
}

impl PricedOption {
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Parse one option list element.
    ///
    /// Elements are either plain name strings or objects with `name` (or
    /// `title`) and an optional `price`. Missing and zero prices both take
    /// the default.
    fn from_value(value: &Value, default_price: Price) -> Option<Self> {
        match value {
            Value::String(name) if !name.is_empty() => Some(Self::new(name, default_price)),
            Value::Object(map) => {
                let name = map
                    .get("name")
                    .or_else(|| map.get("title"))
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())?;
                let price = map
                    .get("price")
                    .and_then(Value::as_i64)
                    .map(Price::new)
                    .filter(|price| !price.is_zero())
                    .unwrap_or(default_price);
                Some(Self::new(name, price))
            }
            _ => None,
        }
    }
}

/// The base and add-on option lists offered by the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomizerOptions {
    pub bases: Vec<PricedOption>,
    pub items: Vec<PricedOption>,
}

impl Default for CustomizerOptions {
    /// The built-in lists shown when no configuration entry is reachable.
    fn default() -> Self {
        let base = |name: &str| PricedOption::new(name, DEFAULT_BASE_PRICE);
        let item = |name: &str| PricedOption::new(name, DEFAULT_ITEM_PRICE);

        Self {
            bases: vec![
                base("Wooden Box"),
                base("Wicker Basket"),
                base("Jute Hamper"),
                base("Glass Jar"),
                base("Canvas Tote"),
                base("Cane Tray"),
            ],
            items: vec![
                item("Scented Candle"),
                item("Chocolates"),
                item("Scrunchie"),
                item("Message Card"),
                item("Lip Balm"),
                item("Earrings"),
                item("Face Mask"),
                item("Pocket Mirror"),
            ],
        }
    }
}

impl CustomizerOptions {
    /// Read option lists from a configuration entry.
    ///
    /// Each list replaces its built-in default only when the entry carries
    /// a non-empty, parseable array for it.
    #[must_use]
    pub fn from_entry(entry: &Entry) -> Self {
        let mut options = Self::default();
        if let Some(bases) = parse_option_list(entry.field("byoBase"), DEFAULT_BASE_PRICE)
            && !bases.is_empty()
        {
            options.bases = bases;
        }
        if let Some(items) = parse_option_list(entry.field("byoItems"), DEFAULT_ITEM_PRICE)
            && !items.is_empty()
        {
            options.items = items;
        }
        options
    }

    /// Fetch the configuration entry, degrading to the built-in lists.
    pub async fn load(client: &ContentClient, entry_id: &EntryId) -> Self {
        match client.fetch_entry(entry_id).await {
            Ok(entry) => Self::from_entry(&entry),
            Err(err) => {
                warn!(error = %err, "customizer option fetch unavailable, using built-in lists");
                Self::default()
            }
        }
    }
}

fn parse_option_list(value: Option<&Value>, default_price: Price) -> Option<Vec<PricedOption>> {
    let elements = value?.as_array()?;
    Some(
        elements
            .iter()
            .filter_map(|element| PricedOption::from_value(element, default_price))
            .collect(),
    )
}

// =============================================================================
// Wizard
// =============================================================================

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    ChooseBase,
    ChooseItems,
    Personalize,
    Review,
}

impl Step {
    const fn following(self) -> Option<Self> {
        match self {
            Self::ChooseBase => Some(Self::ChooseItems),
            Self::ChooseItems => Some(Self::Personalize),
            Self::Personalize => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn preceding(self) -> Option<Self> {
        match self {
            Self::ChooseBase => None,
            Self::ChooseItems => Some(Self::ChooseBase),
            Self::Personalize => Some(Self::ChooseItems),
            Self::Review => Some(Self::Personalize),
        }
    }
}

/// The customizer's accumulated selection and current step.
#[derive(Debug, Clone)]
pub struct CustomizerWizard {
    options: CustomizerOptions,
    step: Step,
    base: Option<PricedOption>,
    items: Vec<PricedOption>,
    recipient: String,
    message: String,
}

impl CustomizerWizard {
    #[must_use]
    pub fn new(options: CustomizerOptions) -> Self {
        Self {
            options,
            step: Step::ChooseBase,
            base: None,
            items: Vec::new(),
            recipient: String::new(),
            message: String::new(),
        }
    }

    /// The option lists to render.
    #[must_use]
    pub fn options(&self) -> &CustomizerOptions {
        &self.options
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn base(&self) -> Option<&PricedOption> {
        self.base.as_ref()
    }

    /// Currently toggled-on add-on items.
    #[must_use]
    pub fn selected_items(&self) -> &[PricedOption] {
        &self.items
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Select (or replace) the hamper base.
    pub fn select_base(&mut self, base: PricedOption) {
        self.base = Some(base);
    }

    /// Toggle an add-on item by name: selecting an already-selected item
    /// removes it.
    pub fn toggle_item(&mut self, item: PricedOption) {
        if self.items.iter().any(|selected| selected.name == item.name) {
            self.items.retain(|selected| selected.name != item.name);
        } else {
            self.items.push(item);
        }
    }

    /// Set the recipient name, silently truncated at
    /// [`RECIPIENT_MAX_CHARS`] characters.
    pub fn set_recipient(&mut self, value: &str) {
        self.recipient = truncate_chars(value, RECIPIENT_MAX_CHARS);
    }

    /// Set the gift message, silently truncated at [`MESSAGE_MAX_CHARS`]
    /// characters.
    pub fn set_message(&mut self, value: &str) {
        self.message = truncate_chars(value, MESSAGE_MAX_CHARS);
    }

    /// Move to the next step.
    ///
    /// Returns `false` without moving when leaving [`Step::ChooseBase`]
    /// with no base selected, or when already on [`Step::Review`].
    pub fn advance(&mut self) -> bool {
        if self.step == Step::ChooseBase && self.base.is_none() {
            return false;
        }
        match self.step.following() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move to the previous step, keeping all later-step data.
    pub fn back(&mut self) -> bool {
        match self.step.preceding() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Review total: base price plus the sum of selected item prices, with
    /// the default-price fallback applied to price-less entries.
    #[must_use]
    pub fn total(&self) -> Price {
        let base = self
            .base
            .as_ref()
            .map_or(DEFAULT_BASE_PRICE, |base| effective(base.price, DEFAULT_BASE_PRICE));
        let items: Price = self
            .items
            .iter()
            .map(|item| effective(item.price, DEFAULT_ITEM_PRICE))
            .sum();
        base + items
    }

    /// Convert the selection into one cart line and reset the wizard.
    ///
    /// Returns the synthesized product, or `None` (leaving all state
    /// untouched) when no base has been selected. The product gets a fresh
    /// random identifier and the [`CUSTOM_PRODUCT_CATEGORY`] category.
    pub fn complete(&mut self, cart: &mut CartLedger) -> Option<Product> {
        let base = self.base.as_ref()?;

        let item_names: Vec<String> = self.items.iter().map(|item| item.name.clone()).collect();
        let description = if item_names.is_empty() {
            "Custom hamper".to_owned()
        } else {
            item_names.join(", ")
        };

        let product = Product {
            id: ProductId::new(format!("custom-{}", Uuid::new_v4())),
            name: format!("Custom Gift Hamper ({})", base.name),
            code: CUSTOM_PRODUCT_CODE.to_owned(),
            description,
            items: item_names,
            price: self.total(),
            category: CUSTOM_PRODUCT_CATEGORY.to_owned(),
            featured: false,
            image: None,
        };

        cart.add(&product);
        self.reset();
        Some(product)
    }

    fn reset(&mut self) {
        self.step = Step::ChooseBase;
        self.base = None;
        self.items.clear();
        self.recipient.clear();
        self.message.clear();
    }
}

const fn effective(price: Price, default: Price) -> Price {
    if price.is_zero() { default } else { price }
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
