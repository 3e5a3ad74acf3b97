//! # Cart
//!
//! The shopping cart: which products, how many of each.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller Action            Method                  Cart State Change     │
//! │  ─────────────            ──────                  ─────────────────     │
//! │                                                                         │
//! │  Pick product ──────────► add() ────────────────► push or merge qty    │
//! │                                                                         │
//! │  Drop product ──────────► remove() ─────────────► items.remove(i)      │
//! │                                                                         │
//! │  Start over ────────────► clear() ──────────────► items.clear()        │
//! │                                                                         │
//! │  Checkout ──────────────► items() ──────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Availability at add time
//! Each `add` checks the requested amount against current stock on its own.
//! Two adds of 3 against a stock of 5 both pass, leaving 6 in the cart;
//! checkout re-validates the merged amount and rejects it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductId};
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

/// An item in the shopping cart.
///
/// `name` and `unit_price` are snapshots taken when the product was first
/// added; checkout prices from the catalog, not from these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        CartItem {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding same product increases quantity)
/// - Items keep the order in which products were first added
/// - Maximum distinct items: 100
/// - Maximum quantity per item: 999
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    ///
    /// Checks run in this order, so stock shortfalls are reported even for
    /// requests above the line cap.
    ///
    /// ## Errors
    /// - [`CoreError::Validation`] for a zero quantity
    /// - [`CoreError::OutOfStock`] / [`CoreError::ExpiredProduct`] from the
    ///   product's availability check
    /// - [`CoreError::QuantityTooLarge`] if the line would exceed 999
    /// - [`CoreError::CartTooLarge`] for a 101st distinct product
    pub fn add(&mut self, product: &Product, quantity: u32, today: NaiveDate) -> CoreResult<()> {
        validate_quantity(quantity)?;
        product.check_availability(quantity, today)?;

        let existing = self.quantity_of(&product.id());
        let merged = existing.saturating_add(quantity);
        if merged > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: merged,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id())
        {
            item.quantity = merged;
            debug!(product = %product.name(), quantity = merged, "cart line merged");
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.items.push(CartItem::from_product(product, quantity));
        debug!(product = %product.name(), quantity, "cart line added");
        Ok(())
    }

    /// Removes a product's line. Returns the removed item, if any.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartItem> {
        let index = self
            .items
            .iter()
            .position(|i| &i.product_id == product_id)?;
        Some(self.items.remove(index))
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Quantity requested for a product, zero if absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| &i.product_id == product_id)
            .map_or(0, |i| i.quantity)
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Subtotal from the add-time price snapshots.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
