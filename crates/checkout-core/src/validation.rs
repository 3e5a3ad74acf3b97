//! # Validation Module
//!
//! Input validation for product construction and cart operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Construction (THIS MODULE)                                   │
//! │  ├── Product name present and bounded                                  │
//! │  └── Prices non-negative                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart add (THIS MODULE + product rules)                       │
//! │  ├── Quantity positive                                                 │
//! │  ├── Stock and expiry (Product::check_availability)                    │
//! │  └── Line quantity at most 999 (Cart::add)                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checkout                                                     │
//! │  └── Stock and expiry re-checked, then balance                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_product_name, validate_quantity};
//!
//! assert!(validate_product_name("Cheese").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a requested quantity.
///
/// Only rejects zero. The upper bound is a cart rule: stock is checked
/// first so an oversized request still reports what is available.
///
/// ## User Workflow
/// ```text
/// cart.add(product, 5)
///       │
///       ▼
/// validate_quantity(5) ← THIS FUNCTION
///       │
///       ├── qty == 0?  → Error: "quantity must be positive"
///       └── OK → availability check → line cap (999)
/// ```
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a monetary amount that must not be negative (prices, balances).
///
/// Zero is allowed (free items, empty wallets).
pub fn validate_non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
