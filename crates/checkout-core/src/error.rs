//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations during cart/checkout  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-demo errors (separate crate)                                 │
//! │  └── ConfigError      - Bad config file or environment values          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → driver prints "Error: ..."        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, quantities, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every checkout failure is terminal for that checkout only

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;
use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations raised while building a
/// cart or running a checkout. None of them is retried.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout was attempted on a cart with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Requested quantity exceeds current stock.
    ///
    /// ## When This Occurs
    /// - Adding more to the cart than the product has in stock
    /// - Stock dropped between add and checkout
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 3)
    ///      │
    ///      ▼
    /// Check stock: available=2
    ///      │
    ///      ▼
    /// OutOfStock { name: "TV", available: 2, requested: 3 }
    /// ```
    #[error("{name} is out of stock: available {available}, requested {requested}")]
    OutOfStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// A perishable product is past its expiration date.
    #[error("{name} expired on {expired_on}")]
    ExpiredProduct { name: String, expired_on: NaiveDate },

    /// Customer cannot cover the checkout total.
    ///
    /// Raised before any stock is touched.
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Money, required: Money },

    /// Cart references a product the catalog does not hold.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Cart has exceeded maximum allowed items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Merged item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// A parcel weight, fee or total does not fit its integer type.
    #[error("{what} is out of range")]
    AmountOutOfRange { what: &'static str },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Machine-readable code, stable across message wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::EmptyCart => "EMPTY_CART",
            CoreError::OutOfStock { .. } => "OUT_OF_STOCK",
            CoreError::ExpiredProduct { .. } => "EXPIRED_PRODUCT",
            CoreError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            CoreError::ProductNotFound(_) => "NOT_FOUND",
            CoreError::CartTooLarge { .. }
            | CoreError::QuantityTooLarge { .. }
            | CoreError::AmountOutOfRange { .. } => "LIMIT_EXCEEDED",
            CoreError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when constructor or cart input doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
