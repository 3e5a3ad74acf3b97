//! # Products
//!
//! Sellable products and their availability rules.
//!
//! ## Product Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │  id (UUID) · name · price · quantity (stock)                            │
//! │                                                                         │
//! │  ┌───────────────────────────┐   ┌───────────────────────────────────┐  │
//! │  │ Perishable                │   │ NonPerishable                     │  │
//! │  │ ───────────────────────── │   │ ───────────────────────────────── │  │
//! │  │ expires_on (date)         │   │ shipping_weight: Option<Weight>   │  │
//! │  │ weight                    │   │   None = not shippable            │  │
//! │  │                           │   │                                   │  │
//! │  │ available iff stock ok    │   │ available iff stock ok            │  │
//! │  │   AND not expired         │   │                                   │  │
//! │  │ always shippable          │   │ shippable iff weight present      │  │
//! │  └───────────────────────────┘   └───────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock only goes down through [`Product::reduce_quantity`], which checkout
//! calls after payment succeeds. Availability checks never mutate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_non_negative, validate_product_name};
use crate::weight::Weight;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product identity.
///
/// Carts key on this rather than on product fields, which change as stock
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh v4 identifier.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Variant-specific product data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    /// Goods with an expiration date. Always shipped.
    Perishable { expires_on: NaiveDate, weight: Weight },
    /// Goods without an expiry. Shipped only when a weight is given.
    NonPerishable { shipping_weight: Option<Weight> },
}

// =============================================================================
// Shippable
// =============================================================================

/// The shipping capability of a product: what goes on the parcel label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shippable {
    pub name: String,
    pub weight: Weight,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: u32,
    kind: ProductKind,
}

impl Product {
    /// Creates a perishable product.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use checkout_core::{Money, Product, Weight};
    ///
    /// let cheese = Product::perishable(
    ///     "Cheese",
    ///     Money::from_major(100),
    ///     5,
    ///     NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
    ///     Weight::from_grams(200),
    /// )
    /// .unwrap();
    /// assert!(cheese.shippable().is_some());
    /// ```
    pub fn perishable(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        expires_on: NaiveDate,
        weight: Weight,
    ) -> CoreResult<Self> {
        Self::build(
            name.into(),
            price,
            quantity,
            ProductKind::Perishable { expires_on, weight },
        )
    }

    /// Creates a non-perishable product. Pass `None` for goods that are
    /// never shipped (scratch cards, vouchers).
    pub fn non_perishable(
        name: impl Into<String>,
        price: Money,
        quantity: u32,
        shipping_weight: Option<Weight>,
    ) -> CoreResult<Self> {
        Self::build(
            name.into(),
            price,
            quantity,
            ProductKind::NonPerishable { shipping_weight },
        )
    }

    fn build(name: String, price: Money, quantity: u32, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_non_negative("price", price)?;

        Ok(Product {
            id: ProductId::new(),
            name: name.trim().to_string(),
            price,
            quantity,
            kind,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock.
    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Price × quantity.
    #[inline]
    pub fn line_total(&self, quantity: u32) -> Money {
        self.price.multiply_quantity(quantity)
    }

    /// True when the product has an expiry strictly before `today`.
    ///
    /// A product expiring today is still sellable today.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        match self.kind {
            ProductKind::Perishable { expires_on, .. } => expires_on < today,
            ProductKind::NonPerishable { .. } => false,
        }
    }

    /// Checks whether `requested` units can be sold on `today`.
    ///
    /// Stock is checked first, then expiry. Nothing is mutated.
    ///
    /// ## Errors
    /// - [`CoreError::OutOfStock`] when `requested` exceeds stock
    /// - [`CoreError::ExpiredProduct`] for perishables past their date
    pub fn check_availability(&self, requested: u32, today: NaiveDate) -> CoreResult<()> {
        if requested > self.quantity {
            return Err(self.out_of_stock(requested));
        }

        if let ProductKind::Perishable { expires_on, .. } = self.kind {
            if expires_on < today {
                return Err(CoreError::ExpiredProduct {
                    name: self.name.clone(),
                    expired_on: expires_on,
                });
            }
        }

        Ok(())
    }

    /// Removes `amount` units from stock.
    ///
    /// Re-checks stock so the quantity can never underflow.
    pub fn reduce_quantity(&mut self, amount: u32) -> CoreResult<()> {
        if amount > self.quantity {
            return Err(self.out_of_stock(amount));
        }
        self.quantity -= amount;
        Ok(())
    }

    /// The shipping capability, if this product ships.
    pub fn shippable(&self) -> Option<Shippable> {
        let weight = match self.kind {
            ProductKind::Perishable { weight, .. } => weight,
            ProductKind::NonPerishable { shipping_weight } => shipping_weight?,
        };

        Some(Shippable {
            name: self.name.clone(),
            weight,
        })
    }

    fn out_of_stock(&self, requested: u32) -> CoreError {
        CoreError::OutOfStock {
            name: self.name.clone(),
            available: self.quantity,
            requested,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn cheese(expires_on: NaiveDate) -> Product {
        Product::perishable(
            "Cheese",
            Money::from_major(100),
            5,
            expires_on,
            Weight::from_grams(200),
        )
        .unwrap()
    }

    #[test]
    fn test_perishable_available_within_stock() {
        let product = cheese(today() + chrono::Days::new(10));
        assert!(product.check_availability(5, today()).is_ok());
    }

    #[test]
    fn test_out_of_stock() {
        let tv = Product::non_perishable(
            "TV",
            Money::from_major(1000),
            2,
            Some(Weight::from_grams(5000)),
        )
        .unwrap();

        let err = tv.check_availability(3, today()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::OutOfStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(tv.quantity(), 2);
    }

    #[test]
    fn test_expired_perishable() {
        let yesterday = today().pred_opt().unwrap();
        let product = cheese(yesterday);

        let err = product.check_availability(1, today()).unwrap_err();
        assert!(matches!(err, CoreError::ExpiredProduct { expired_on, .. } if expired_on == yesterday));
        assert!(product.is_expired(today()));
    }

    #[test]
    fn test_expiring_today_is_still_available() {
        let product = cheese(today());
        assert!(product.check_availability(1, today()).is_ok());
        assert!(!product.is_expired(today()));
    }

    #[test]
    fn test_stock_checked_before_expiry() {
        let product = cheese(today().pred_opt().unwrap());
        let err = product.check_availability(6, today()).unwrap_err();
        assert!(matches!(err, CoreError::OutOfStock { .. }));
    }

    #[test]
    fn test_reduce_quantity() {
        let mut product = cheese(today());
        product.reduce_quantity(2).unwrap();
        assert_eq!(product.quantity(), 3);

        assert!(product.reduce_quantity(4).is_err());
        assert_eq!(product.quantity(), 3);
    }

    #[test]
    fn test_shippable_capability() {
        let perishable = cheese(today());
        let shippable = perishable.shippable().unwrap();
        assert_eq!(shippable.name, "Cheese");
        assert_eq!(shippable.weight.grams(), 200);

        let card = Product::non_perishable("Mobile Scratch Card", Money::from_major(50), 10, None)
            .unwrap();
        assert!(card.shippable().is_none());
        assert!(card.check_availability(10, today()).is_ok());
    }

    #[test]
    fn test_construction_validates_input() {
        assert!(Product::non_perishable("  ", Money::from_major(1), 1, None).is_err());
        assert!(Product::non_perishable("Pen", Money::from_cents(-1), 1, None).is_err());
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = cheese(today());
        let b = cheese(today());
        assert_ne!(a.id(), b.id());
    }
}
