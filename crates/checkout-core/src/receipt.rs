//! # Receipt
//!
//! What a completed checkout hands back: the priced lines, the shipment
//! notice (when anything ships) and the final balance.
//!
//! ## Rendered Transcript
//! ```text
//! ** Shipment notice **
//! 2x Cheese 400g
//! 1x Biscuits 700g
//! Total package weight 1.1kg
//! ** Checkout receipt **
//! 2x Cheese 200.00
//! 1x Biscuits 150.00
//! 1x Mobile Scratch Card 50.00
//! ----------------------
//! Subtotal 400.00
//! Shipping 30.00
//! Amount 430.00
//! Customer balance after payment: 570.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::weight::Weight;

/// One purchased product on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
}

/// One shipped product on the shipment notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub name: String,
    pub quantity: u32,
    /// Unit weight × quantity.
    pub weight: Weight,
}

/// Parcel contents, present only when the cart held shippable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    pub items: Vec<ShipmentLine>,
    pub total_weight: Weight,
}

/// Outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping_fee: Money,
    pub total: Money,
    pub balance_after: Money,
    pub shipment: Option<ShipmentNotice>,
}

impl Receipt {
    /// Renders with `symbol` in front of every amount.
    pub fn display_with<'a>(&'a self, symbol: &'a str) -> ReceiptDisplay<'a> {
        ReceiptDisplay {
            receipt: self,
            symbol,
        }
    }
}

/// Plain rendering, no currency symbol.
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with(""))
    }
}

/// Console rendering of a [`Receipt`]; see [`Receipt::display_with`].
#[derive(Debug)]
pub struct ReceiptDisplay<'a> {
    receipt: &'a Receipt,
    symbol: &'a str,
}

impl fmt::Display for ReceiptDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.receipt;
        let money = |m: Money| m.format_with(self.symbol);

        if let Some(shipment) = &r.shipment {
            writeln!(f, "** Shipment notice **")?;
            for line in &shipment.items {
                writeln!(f, "{}x {} {}", line.quantity, line.name, line.weight)?;
            }
            writeln!(
                f,
                "Total package weight {}",
                shipment.total_weight.kilograms()
            )?;
        }

        writeln!(f, "** Checkout receipt **")?;
        for line in &r.lines {
            writeln!(f, "{}x {} {}", line.quantity, line.name, money(line.line_total))?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal {}", money(r.subtotal))?;
        writeln!(f, "Shipping {}", money(r.shipping_fee))?;
        writeln!(f, "Amount {}", money(r.total))?;
        writeln!(
            f,
            "Customer balance after payment: {}",
            money(r.balance_after)
        )
    }
}
