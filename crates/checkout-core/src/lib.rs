//! # checkout-core: Pure Checkout Logic
//!
//! Products, a customer balance, a cart and the checkout routine that turns
//! them into a paid, stock-adjusted purchase. No I/O: the caller supplies
//! "today" and decides what to do with the receipt.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-demo (console driver)                  │   │
//! │  │   config ──► scenarios ──► stdout (receipts) / stderr (errors)  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  catalog  │  │  weight   │  │ customer  │  │ shipping  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - Perishable / non-perishable products and availability
//! - [`catalog`] - Product store keyed by id
//! - [`customer`] - Customer balance
//! - [`cart`] - Cart lines, merged per product
//! - [`shipping`] - Parcel weight and fee
//! - [`checkout`] - The checkout sequence
//! - [`receipt`] - Checkout output and its console rendering
//! - [`money`] / [`weight`] - Integer units
//! - [`error`] / [`validation`] - Typed errors and input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Days, NaiveDate};
//! use checkout_core::{Cart, Catalog, CheckoutService, Customer, Money, Product, Weight};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let mut catalog = Catalog::new();
//! let cheese = catalog.insert(
//!     Product::perishable("Cheese", Money::from_major(100), 5, today + Days::new(10), Weight::from_grams(200))
//!         .unwrap(),
//! );
//! let biscuits = catalog.insert(
//!     Product::perishable("Biscuits", Money::from_major(150), 3, today + Days::new(5), Weight::from_grams(700))
//!         .unwrap(),
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(catalog.require(&cheese).unwrap(), 2, today).unwrap();
//! cart.add(catalog.require(&biscuits).unwrap(), 1, today).unwrap();
//!
//! let mut customer = Customer::new("Mona", Money::from_major(1000)).unwrap();
//! let receipt = CheckoutService::default()
//!     .checkout(&mut customer, &cart, &mut catalog, today)
//!     .unwrap();
//!
//! // 1.1 kg ships for exactly 30.00
//! assert_eq!(receipt.shipping_fee, Money::from_major(30));
//! assert_eq!(receipt.total, Money::from_major(380));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;
pub mod shipping;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use checkout::CheckoutService;
pub use customer::Customer;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, ProductKind, Shippable};
pub use receipt::{Receipt, ReceiptLine, ShipmentLine, ShipmentNotice};
pub use shipping::{ShippableItem, ShippingCalculator, ShippingQuote, ShippingRate};
pub use weight::Weight;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct products allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single product in a cart.
///
/// Catches typos like 1000 instead of 10.
pub const MAX_ITEM_QUANTITY: u32 = 999;
