//! # Scenarios
//!
//! The five fixed checkouts the driver walks through. Each one builds its
//! own catalog, customer and cart, so a failure in one never leaks into
//! the next.
//!
//! ```text
//! 1. Normal Checkout       cheese ×2, biscuits ×1, scratch card ×1, balance 1000
//! 2. Empty Cart            nothing in the cart
//! 3. Insufficient Balance  cheese ×2, balance 100
//! 4. Out of Stock          TV ×3 with 2 in stock (fails at add)
//! 5. Expired Product       cheese that expired yesterday (fails at add)
//! ```

use std::io::Write;

use chrono::{Days, NaiveDate};
use tracing::info;

use checkout_core::{
    Cart, Catalog, CheckoutService, CoreResult, Customer, Money, Product, Receipt, Weight,
};

use crate::config::{DemoConfig, ReceiptFormat};
use crate::error::DemoResult;

/// A named checkout attempt.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub title: &'static str,
    run: fn(&CheckoutService, NaiveDate) -> CoreResult<Receipt>,
}

impl Scenario {
    pub fn run(&self, service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
        (self.run)(service, today)
    }
}

/// All scenarios, in transcript order.
pub const SCENARIOS: [Scenario; 5] = [
    Scenario {
        title: "Normal Checkout",
        run: normal_checkout,
    },
    Scenario {
        title: "Empty Cart",
        run: empty_cart,
    },
    Scenario {
        title: "Insufficient Balance",
        run: insufficient_balance,
    },
    Scenario {
        title: "Out of Stock",
        run: out_of_stock,
    },
    Scenario {
        title: "Expired Product",
        run: expired_product,
    },
];

/// Outcome counts for a full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs every scenario. Receipts go to `out`, one `Error: ...` line per
/// failed scenario goes to `err`.
pub fn run_all<O: Write, E: Write>(
    config: &DemoConfig,
    today: NaiveDate,
    out: &mut O,
    err: &mut E,
) -> DemoResult<RunSummary> {
    let service = CheckoutService::new(config.shipping.rate()?);
    let mut summary = RunSummary::default();

    for (index, scenario) in SCENARIOS.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "=== Test Case {}: {} ===", index + 1, scenario.title)?;

        match scenario.run(&service, today) {
            Ok(receipt) => {
                write_receipt(config, &receipt, out)?;
                summary.succeeded += 1;
            }
            Err(e) => {
                writeln!(err, "Error: {}", e)?;
                summary.failed += 1;
            }
        }
        out.flush()?;
        err.flush()?;
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "scenarios finished"
    );
    Ok(summary)
}

fn write_receipt<O: Write>(config: &DemoConfig, receipt: &Receipt, out: &mut O) -> DemoResult<()> {
    match config.receipt_format {
        ReceiptFormat::Text => write!(out, "{}", receipt.display_with(&config.currency_symbol))?,
        ReceiptFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, receipt)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// =============================================================================
// Fixtures
// =============================================================================

fn cheese(expires_on: NaiveDate) -> CoreResult<Product> {
    Product::perishable(
        "Cheese",
        Money::from_major(100),
        5,
        expires_on,
        Weight::from_grams(200),
    )
}

fn normal_checkout(service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
    let mut catalog = Catalog::new();
    let cheese = catalog.insert(cheese(today + Days::new(10))?);
    let biscuits = catalog.insert(Product::perishable(
        "Biscuits",
        Money::from_major(150),
        3,
        today + Days::new(5),
        Weight::from_grams(700),
    )?);
    let card = catalog.insert(Product::non_perishable(
        "Mobile Scratch Card",
        Money::from_major(50),
        10,
        None,
    )?);

    let mut customer = Customer::new("Customer", Money::from_major(1000))?;
    let mut cart = Cart::new();
    cart.add(catalog.require(&cheese)?, 2, today)?;
    cart.add(catalog.require(&biscuits)?, 1, today)?;
    cart.add(catalog.require(&card)?, 1, today)?;

    service.checkout(&mut customer, &cart, &mut catalog, today)
}

fn empty_cart(service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
    let mut catalog = Catalog::new();
    let mut customer = Customer::new("Customer", Money::from_major(1000))?;
    let cart = Cart::new();

    service.checkout(&mut customer, &cart, &mut catalog, today)
}

fn insufficient_balance(service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
    let mut catalog = Catalog::new();
    let cheese = catalog.insert(cheese(today + Days::new(10))?);

    let mut customer = Customer::new("Poor Customer", Money::from_major(100))?;
    let mut cart = Cart::new();
    cart.add(catalog.require(&cheese)?, 2, today)?;

    service.checkout(&mut customer, &cart, &mut catalog, today)
}

fn out_of_stock(service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
    let mut catalog = Catalog::new();
    let tv = catalog.insert(Product::non_perishable(
        "TV",
        Money::from_major(1000),
        2,
        Some(Weight::from_grams(5000)),
    )?);

    let mut cart = Cart::new();
    cart.add(catalog.require(&tv)?, 3, today)?;

    let mut customer = Customer::new("Customer", Money::from_major(5000))?;
    service.checkout(&mut customer, &cart, &mut catalog, today)
}

fn expired_product(service: &CheckoutService, today: NaiveDate) -> CoreResult<Receipt> {
    let mut catalog = Catalog::new();
    let expired = catalog.insert(cheese(today - Days::new(1))?);

    let mut cart = Cart::new();
    cart.add(catalog.require(&expired)?, 2, today)?;

    let mut customer = Customer::new("Customer", Money::from_major(1000))?;
    service.checkout(&mut customer, &cart, &mut catalog, today)
}
