//! # Weight Module
//!
//! Shipping weight in whole grams. Same reasoning as [`Money`](crate::money::Money):
//! integer units so that parcel totals add up exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A physical weight, stored in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Weight(u64);

impl Weight {
    #[inline]
    pub const fn from_grams(grams: u64) -> Self {
        Weight(grams)
    }

    #[inline]
    pub const fn grams(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Weight of `qty` units.
    #[inline]
    pub const fn times(&self, qty: u32) -> Self {
        Weight(self.0 * qty as u64)
    }

    /// Weight of `qty` units, or `None` on overflow.
    #[inline]
    pub const fn checked_times(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as u64) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_add(&self, other: Weight) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    /// Renders as kilograms with trailing zeros trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_grams(1100).kilograms(), "1.1kg");
    /// assert_eq!(Weight::from_grams(5000).kilograms(), "5kg");
    /// assert_eq!(Weight::from_grams(250).kilograms(), "0.25kg");
    /// ```
    pub fn kilograms(&self) -> String {
        let whole = self.0 / 1000;
        let frac = self.0 % 1000;
        if frac == 0 {
            return format!("{}kg", whole);
        }
        let frac = format!("{:03}", frac);
        format!("{}.{}kg", whole, frac.trim_end_matches('0'))
    }
}

/// Grams: `"400g"`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_and_sum() {
        let cheese = Weight::from_grams(200).times(2);
        let biscuits = Weight::from_grams(700).times(1);
        let total: Weight = [cheese, biscuits].into_iter().sum();
        assert_eq!(total.grams(), 1100);
    }

    #[test]
    fn test_checked_arithmetic() {
        let crate_of_bolts = Weight::from_grams(u64::MAX / 2);
        assert_eq!(Weight::from_grams(200).checked_times(2), Some(Weight::from_grams(400)));
        assert_eq!(crate_of_bolts.checked_times(3), None);
        assert_eq!(crate_of_bolts.checked_add(crate_of_bolts).map(|w| w.grams()), Some(u64::MAX - 1));
        assert_eq!(Weight::from_grams(u64::MAX).checked_add(Weight::from_grams(1)), None);
    }

    #[test]
    fn test_display_grams() {
        assert_eq!(Weight::from_grams(400).to_string(), "400g");
    }

    #[test]
    fn test_kilograms() {
        assert_eq!(Weight::zero().kilograms(), "0kg");
        assert_eq!(Weight::from_grams(1100).kilograms(), "1.1kg");
        assert_eq!(Weight::from_grams(1).kilograms(), "0.001kg");
        assert_eq!(Weight::from_grams(12_340).kilograms(), "12.34kg");
    }
}
