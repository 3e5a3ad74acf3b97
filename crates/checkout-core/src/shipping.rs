//! # Shipping
//!
//! Weight totals and shipping fees for the shippable part of a cart.
//!
//! ## Fee Formula
//! ```text
//! total_weight = Σ unit_weight × quantity        (shippable items only)
//! fee          = rate.fee × total_weight / rate.per
//!
//! Default rate: 30.00 per 1100 g  (= 30 / 1.1 per kg)
//!   Cheese 200 g × 2 + Biscuits 700 g × 1 = 1100 g → fee 30.00
//! ```
//!
//! The fee is rounded once, to the nearest cent, after the full weight is
//! known. Per-item rounding would drift on large parcels.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::product::Shippable;
use crate::validation::{validate_non_negative, ValidationResult};
use crate::weight::Weight;

// =============================================================================
// Shipping Rate
// =============================================================================

/// A flat rate: `fee` for every `per` of weight, prorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    fee: Money,
    per: Weight,
}

impl ShippingRate {
    /// ## Errors
    /// Rejects a negative fee and a zero-weight basis.
    pub fn new(fee: Money, per: Weight) -> ValidationResult<Self> {
        validate_non_negative("shipping fee", fee)?;
        if per.is_zero() {
            return Err(ValidationError::MustBePositive {
                field: "shipping weight basis".to_string(),
            });
        }
        Ok(ShippingRate { fee, per })
    }

    pub fn fee(&self) -> Money {
        self.fee
    }

    pub fn per(&self) -> Weight {
        self.per
    }

    /// Fee for a parcel of `weight`, or `None` if it does not fit in cents.
    pub fn fee_for(&self, weight: Weight) -> Option<Money> {
        self.fee.prorate(weight.grams(), self.per.grams())
    }
}

impl Default for ShippingRate {
    /// 30.00 per 1.1 kg.
    fn default() -> Self {
        ShippingRate {
            fee: Money::from_major(30),
            per: Weight::from_grams(1100),
        }
    }
}

// =============================================================================
// Shippable Item
// =============================================================================

/// A shippable product paired with the quantity being bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippableItem {
    pub shippable: Shippable,
    pub quantity: u32,
}

impl ShippableItem {
    /// Unit weight × quantity.
    pub fn weight(&self) -> Weight {
        self.shippable.weight.times(self.quantity)
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Result of pricing a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub total_weight: Weight,
    pub fee: Money,
}

/// Pure shipping fee calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingCalculator {
    rate: ShippingRate,
}

impl ShippingCalculator {
    pub fn new(rate: ShippingRate) -> Self {
        ShippingCalculator { rate }
    }

    pub fn rate(&self) -> ShippingRate {
        self.rate
    }

    /// Totals the weight of `items` and prices it. An empty list is free.
    ///
    /// ## Errors
    /// [`CoreError::AmountOutOfRange`] when the parcel weight or its fee
    /// overflows.
    pub fn quote(&self, items: &[ShippableItem]) -> CoreResult<ShippingQuote> {
        let total_weight = items
            .iter()
            .try_fold(Weight::zero(), |total, item| {
                item.shippable
                    .weight
                    .checked_times(item.quantity)
                    .and_then(|w| total.checked_add(w))
            })
            .ok_or(CoreError::AmountOutOfRange {
                what: "parcel weight",
            })?;

        let fee = self
            .rate
            .fee_for(total_weight)
            .ok_or(CoreError::AmountOutOfRange {
                what: "shipping fee",
            })?;

        Ok(ShippingQuote { total_weight, fee })
    }
}
