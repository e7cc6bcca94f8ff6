//! Session state shared with the embedding UI shell.
//!
//! One [`StorefrontSession`] per interactive session. It owns every state
//! container - catalog, cart, customizer - and is the only writer to each,
//! so the shell mutates state exclusively through session methods. All
//! mutation is single-threaded; content loading happens once, up front,
//! into owned stores (a store that has been dropped simply cannot receive a
//! late fetch result).

use tracing::info;

use gilded_hamper_core::ProductId;

use crate::cart::CartLedger;
use crate::catalog::{CatalogStore, Product};
use crate::checkout;
use crate::config::StorefrontConfig;
use crate::contentful::ContentClient;
use crate::customizer::{CustomizerOptions, CustomizerWizard};

/// The ready-to-open checkout handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutHandoff {
    /// Human-readable enquiry message.
    pub message: String,
    /// `wa.me` deep link for the UI shell to open.
    pub deep_link: String,
}

/// All storefront state for one interactive session.
pub struct StorefrontSession {
    config: StorefrontConfig,
    catalog: CatalogStore,
    cart: CartLedger,
    customizer: CustomizerWizard,
}

impl StorefrontSession {
    /// Start a session: load the catalog and customizer options from the
    /// content source named by `config`, then hand back the ready session.
    ///
    /// Content failures degrade to empty sections; this constructor itself
    /// cannot fail.
    pub async fn start(config: StorefrontConfig) -> Self {
        let client = ContentClient::new(config.contentful.as_ref());
        Self::start_with_client(config, &client).await
    }

    /// Start a session against an explicit client (tests point this at a
    /// mock server).
    pub async fn start_with_client(config: StorefrontConfig, client: &ContentClient) -> Self {
        let (catalog, options) = tokio::join!(
            CatalogStore::load(client, &config),
            CustomizerOptions::load(client, &config.customizer_entry_id),
        );

        info!(
            products = catalog.products().len(),
            configured = client.is_configured(),
            "storefront session started"
        );

        Self {
            config,
            catalog,
            cart: CartLedger::new(),
            customizer: CustomizerWizard::new(options),
        }
    }

    /// A session with no content source at all (offline shell, tests).
    #[must_use]
    pub fn offline(config: StorefrontConfig) -> Self {
        Self {
            config,
            catalog: CatalogStore::empty(),
            cart: CartLedger::new(),
            customizer: CustomizerWizard::new(CustomizerOptions::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    #[must_use]
    pub fn customizer(&self) -> &CustomizerWizard {
        &self.customizer
    }

    /// Mutable access for customizer step events.
    pub fn customizer_mut(&mut self) -> &mut CustomizerWizard {
        &mut self.customizer
    }

    /// Products passing the shop view's category filter.
    #[must_use]
    pub fn shop_products(&self, category_filter: &str) -> Vec<&Product> {
        self.catalog.filter_by_category(category_filter)
    }

    /// Add one unit of a catalog product to the cart, returning the name
    /// for the shell's "added" notification.
    pub fn add_to_cart(&mut self, product: &Product) -> String {
        self.cart.add(product);
        product.name.clone()
    }

    /// Remove a cart line.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
    }

    /// Adjust a cart line's quantity (clamped at 1).
    pub fn update_cart_quantity(&mut self, product_id: &ProductId, delta: i64) {
        self.cart.set_quantity_delta(product_id, delta);
    }

    /// Convert the customizer selection into a cart line.
    ///
    /// Returns the synthesized product (the shell navigates to the cart
    /// view on `Some`), or `None` when no base has been selected.
    pub fn complete_customizer(&mut self) -> Option<Product> {
        self.customizer.complete(&mut self.cart)
    }

    /// Build the checkout handoff for the current cart.
    ///
    /// `None` when the cart is empty - there is nothing to enquire about.
    #[must_use]
    pub fn checkout_handoff(&self) -> Option<CheckoutHandoff> {
        if self.cart.is_empty() {
            return None;
        }

        let message = checkout::format_whatsapp_message(self.cart.lines(), self.cart.subtotal());
        let deep_link = checkout::build_deep_link(&self.config.whatsapp_number, &message);
        Some(CheckoutHandoff { message, deep_link })
    }
}
