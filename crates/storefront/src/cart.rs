//! Cart ledger.
//!
//! An ordered collection of product lines keyed by product identity,
//! insertion order preserved. Owned exclusively by the session; count and
//! totals are derived on read, never stored. Single-writer within one
//! interactive session, so no locking is involved.

use serde::{Deserialize, Serialize};

use gilded_hamper_core::{Price, ProductId};

use crate::catalog::Product;

/// One line in the cart: a product snapshot and its quantity.
///
/// Quantity is always at least 1; an update that would drive it below 1
/// clamps to 1 rather than removing the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added.
    pub product: Product,
    /// Number of units, >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// The session's cart.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If a line for the same product id exists its quantity is
    /// incremented; otherwise a new line is appended with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove a product's line. Silent no-op when absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| line.product.id != *product_id);
    }

    /// Adjust a line's quantity by a signed delta, clamping at 1.
    ///
    /// No-op when the product id is absent.
    pub fn set_quantity_delta(&mut self, product_id: &ProductId, delta: i64) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == *product_id)
        {
            let updated = i64::from(line.quantity) + delta;
            line.quantity = u32::try_from(updated.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals, in whole rupees.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
