//! # Checkout
//!
//! Turns a cart into a paid, stock-adjusted purchase with a receipt.
//!
//! ## Phases
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Sequence                                │
//! │                                                                         │
//! │  1. Cart empty? ─────────────────────────────► EmptyCart               │
//! │  2. Re-check every line (stock, expiry) ─────► OutOfStock / Expired    │
//! │  3. Subtotal = Σ price × qty                                           │
//! │  4. Collect shippable lines                                            │
//! │  5. Shipping fee from total weight                                     │
//! │  6. Deduct subtotal + fee from customer ─────► InsufficientBalance     │
//! │  ─────────────── nothing mutated above this line ───────────────────── │
//! │  7. Reduce stock for every line                                        │
//! │  8. Shipment notice (if anything ships)                                │
//! │  9. Receipt                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failure in phases 1, 2 or 6 leaves the customer and every product as
//! they were. Phase 7 cannot fail in practice: the amounts were validated
//! in phase 2 and nothing runs in between.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::{Receipt, ReceiptLine, ShipmentLine, ShipmentNotice};
use crate::shipping::{ShippableItem, ShippingCalculator, ShippingRate};

/// Stateless checkout orchestration. Holds only the shipping rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutService {
    shipping: ShippingCalculator,
}

impl CheckoutService {
    pub fn new(rate: ShippingRate) -> Self {
        CheckoutService {
            shipping: ShippingCalculator::new(rate),
        }
    }

    pub fn shipping_rate(&self) -> ShippingRate {
        self.shipping.rate()
    }

    /// Runs the full checkout for `cart`, paying from `customer` and taking
    /// stock from `catalog`. `today` drives the expiry checks.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use checkout_core::{Cart, Catalog, CheckoutService, Customer, Money, Product};
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let mut catalog = Catalog::new();
    /// let card = Product::non_perishable("Scratch Card", Money::from_major(50), 10, None).unwrap();
    /// let id = catalog.insert(card);
    ///
    /// let mut cart = Cart::new();
    /// cart.add(catalog.require(&id).unwrap(), 1, today).unwrap();
    ///
    /// let mut customer = Customer::new("Ali", Money::from_major(100)).unwrap();
    /// let receipt = CheckoutService::default()
    ///     .checkout(&mut customer, &cart, &mut catalog, today)
    ///     .unwrap();
    ///
    /// assert_eq!(receipt.total, Money::from_major(50));
    /// assert_eq!(customer.balance(), Money::from_major(50));
    /// assert_eq!(catalog.require(&id).unwrap().quantity(), 9);
    /// ```
    pub fn checkout(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        catalog: &mut Catalog,
        today: NaiveDate,
    ) -> CoreResult<Receipt> {
        self.run(customer, cart, catalog, today)
            .inspect(|receipt| {
                info!(
                    customer = %customer.name(),
                    lines = receipt.lines.len(),
                    subtotal = %receipt.subtotal,
                    shipping = %receipt.shipping_fee,
                    total = %receipt.total,
                    "checkout completed"
                );
            })
            .inspect_err(|err| {
                warn!(customer = %customer.name(), code = err.code(), error = %err, "checkout rejected");
            })
    }

    fn run(
        &self,
        customer: &mut Customer,
        cart: &Cart,
        catalog: &mut Catalog,
        today: NaiveDate,
    ) -> CoreResult<Receipt> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        // Phases 2-4 in one pass, read-only.
        let mut lines = Vec::with_capacity(cart.item_count());
        let mut shippable_items = Vec::new();
        for item in cart.items() {
            let product = catalog.require(&item.product_id)?;
            product.check_availability(item.quantity, today)?;

            lines.push(ReceiptLine {
                name: product.name().to_string(),
                quantity: item.quantity,
                line_total: product.line_total(item.quantity),
            });

            if let Some(shippable) = product.shippable() {
                shippable_items.push(ShippableItem {
                    shippable,
                    quantity: item.quantity,
                });
            }
        }
        debug!(lines = lines.len(), shippable = shippable_items.len(), "cart validated");

        let subtotal: Money = lines.iter().map(|l| l.line_total).sum();
        let quote = self.shipping.quote(&shippable_items)?;
        let total = subtotal
            .checked_add(quote.fee)
            .ok_or(CoreError::AmountOutOfRange { what: "checkout total" })?;
        debug!(%subtotal, weight = %quote.total_weight, fee = %quote.fee, %total, "cart priced");

        customer.deduct_balance(total)?;

        for item in cart.items() {
            catalog
                .require_mut(&item.product_id)?
                .reduce_quantity(item.quantity)?;
        }
        debug!("stock committed");

        let shipment = (!shippable_items.is_empty()).then(|| ShipmentNotice {
            items: shippable_items
                .iter()
                .map(|s| ShipmentLine {
                    name: s.shippable.name.clone(),
                    quantity: s.quantity,
                    weight: s.weight(),
                })
                .collect(),
            total_weight: quote.total_weight,
        });

        Ok(Receipt {
            lines,
            subtotal,
            shipping_fee: quote.fee,
            total,
            balance_after: customer.balance(),
            shipment,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Product, ProductId};
    use crate::weight::Weight;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    struct Shop {
        catalog: Catalog,
        cheese: ProductId,
        biscuits: ProductId,
        card: ProductId,
        tv: ProductId,
    }

    fn shop() -> Shop {
        let mut catalog = Catalog::new();
        let cheese = catalog.insert(
            Product::perishable(
                "Cheese",
                Money::from_major(100),
                5,
                today() + Days::new(10),
                Weight::from_grams(200),
            )
            .unwrap(),
        );
        let biscuits = catalog.insert(
            Product::perishable(
                "Biscuits",
                Money::from_major(150),
                3,
                today() + Days::new(5),
                Weight::from_grams(700),
            )
            .unwrap(),
        );
        let card = catalog.insert(
            Product::non_perishable("Mobile Scratch Card", Money::from_major(50), 10, None)
                .unwrap(),
        );
        let tv = catalog.insert(
            Product::non_perishable(
                "TV",
                Money::from_major(1000),
                2,
                Some(Weight::from_grams(5000)),
            )
            .unwrap(),
        );
        Shop {
            catalog,
            cheese,
            biscuits,
            card,
            tv,
        }
    }

    fn add(cart: &mut Cart, shop: &Shop, id: ProductId, qty: u32) {
        cart.add(shop.catalog.require(&id).unwrap(), qty, today())
            .unwrap();
    }

    fn stock(shop: &Shop, id: ProductId) -> u32 {
        shop.catalog.require(&id).unwrap().quantity()
    }

    #[test]
    fn test_normal_checkout() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.cheese, 2);
        add(&mut cart, &shop, shop.biscuits, 1);
        add(&mut cart, &shop, shop.card, 1);
        let mut customer = Customer::new("Mona", Money::from_major(1000)).unwrap();

        let receipt = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap();

        assert_eq!(receipt.subtotal, Money::from_major(400));
        assert_eq!(receipt.shipping_fee, Money::from_major(30));
        assert_eq!(receipt.total, Money::from_major(430));
        assert_eq!(receipt.balance_after, Money::from_major(570));
        assert_eq!(customer.balance(), Money::from_major(570));

        let shipment = receipt.shipment.as_ref().unwrap();
        assert_eq!(shipment.total_weight.grams(), 1100);
        assert_eq!(shipment.items.len(), 2);
        assert_eq!(shipment.items[0].weight.grams(), 400);

        assert_eq!(stock(&shop, shop.cheese), 3);
        assert_eq!(stock(&shop, shop.biscuits), 2);
        assert_eq!(stock(&shop, shop.card), 9);
        assert_eq!(stock(&shop, shop.tv), 2);
    }

    #[test]
    fn test_normal_checkout_transcript() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.cheese, 2);
        add(&mut cart, &shop, shop.biscuits, 1);
        add(&mut cart, &shop, shop.card, 1);
        let mut customer = Customer::new("Mona", Money::from_major(1000)).unwrap();

        let receipt = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap();

        let expected = "\
** Shipment notice **
2x Cheese 400g
1x Biscuits 700g
Total package weight 1.1kg
** Checkout receipt **
2x Cheese 200.00
1x Biscuits 150.00
1x Mobile Scratch Card 50.00
----------------------
Subtotal 400.00
Shipping 30.00
Amount 430.00
Customer balance after payment: 570.00
";
        assert_eq!(receipt.to_string(), expected);
    }

    #[test]
    fn test_empty_cart() {
        let mut shop = shop();
        let mut customer = Customer::new("Mona", Money::from_major(1000)).unwrap();

        let err = CheckoutService::default()
            .checkout(&mut customer, &Cart::new(), &mut shop.catalog, today())
            .unwrap_err();

        assert!(matches!(err, CoreError::EmptyCart));
        assert_eq!(customer.balance(), Money::from_major(1000));
    }

    #[test]
    fn test_insufficient_balance_mutates_nothing() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.cheese, 2);
        let mut customer = Customer::new("Omar", Money::from_major(100)).unwrap();

        let err = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap_err();

        // 200.00 + 400 g shipping (10.91)
        assert!(matches!(
            err,
            CoreError::InsufficientBalance { required, .. } if required == Money::from_cents(21091)
        ));
        assert_eq!(customer.balance(), Money::from_major(100));
        assert_eq!(stock(&shop, shop.cheese), 5);
    }

    #[test]
    fn test_stock_drop_after_add_fails_checkout() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.tv, 2);

        // Someone else bought one in the meantime.
        shop.catalog.require_mut(&shop.tv).unwrap().reduce_quantity(1).unwrap();

        let mut customer = Customer::new("Mona", Money::from_major(5000)).unwrap();
        let err = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { available: 1, requested: 2, .. }));
        assert_eq!(customer.balance(), Money::from_major(5000));
        assert_eq!(stock(&shop, shop.tv), 1);
    }

    #[test]
    fn test_expiry_crossing_day_boundary_fails_checkout() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.card, 1);
        add(&mut cart, &shop, shop.biscuits, 1);

        let later = today() + Days::new(6);
        let mut customer = Customer::new("Mona", Money::from_major(1000)).unwrap();
        let err = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, later)
            .unwrap_err();

        assert!(matches!(err, CoreError::ExpiredProduct { .. }));
        assert_eq!(customer.balance(), Money::from_major(1000));
        assert_eq!(stock(&shop, shop.card), 10);
        assert_eq!(stock(&shop, shop.biscuits), 3);
    }

    /// Add-time checks are per call, so the cart can hold more than stock.
    /// Checkout catches it against the merged quantity.
    #[test]
    fn test_non_cumulative_add_caught_at_checkout() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.cheese, 3);
        add(&mut cart, &shop, shop.cheese, 3);

        let mut customer = Customer::new("Mona", Money::from_major(5000)).unwrap();
        let err = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { available: 5, requested: 6, .. }));
        assert_eq!(stock(&shop, shop.cheese), 5);
    }

    #[test]
    fn test_unshippable_only_has_no_notice() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.card, 2);
        let mut customer = Customer::new("Mona", Money::from_major(100)).unwrap();

        let receipt = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap();

        assert!(receipt.shipment.is_none());
        assert!(receipt.shipping_fee.is_zero());
        assert_eq!(customer.balance(), Money::zero());
    }

    #[test]
    fn test_total_is_subtotal_plus_weight_fee() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.tv, 1);
        add(&mut cart, &shop, shop.cheese, 1);
        let service = CheckoutService::default();
        let mut customer = Customer::new("Mona", Money::from_major(5000)).unwrap();

        let receipt = service
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap();

        let expected_fee = service.shipping_rate().fee_for(Weight::from_grams(5200)).unwrap();
        assert_eq!(receipt.shipping_fee, expected_fee);
        assert_eq!(receipt.total, receipt.subtotal + expected_fee);
        assert_eq!(
            customer.balance(),
            Money::from_major(5000) - receipt.total
        );
    }

    #[test]
    fn test_missing_product() {
        let shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.card, 1);

        let mut customer = Customer::new("Mona", Money::from_major(100)).unwrap();
        let err = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut Catalog::new(), today())
            .unwrap_err();

        assert!(matches!(err, CoreError::ProductNotFound(id) if id == shop.card));
        assert_eq!(customer.balance(), Money::from_major(100));
        assert_eq!(stock(&shop, shop.card), 10);
    }

    #[test]
    fn test_receipt_serializes() {
        let mut shop = shop();
        let mut cart = Cart::new();
        add(&mut cart, &shop, shop.card, 1);
        let mut customer = Customer::new("Mona", Money::from_major(100)).unwrap();

        let receipt = CheckoutService::default()
            .checkout(&mut customer, &cart, &mut shop.catalog, today())
            .unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], 5000);
        assert_eq!(json["lines"][0]["name"], "Mobile Scratch Card");
        assert!(json["shipment"].is_null());
    }
}
