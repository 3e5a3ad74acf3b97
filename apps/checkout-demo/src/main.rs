//! # Checkout Demo Entry Point
//!
//! Runs the fixed checkout scenarios and prints the transcript.
//!
//! ```bash
//! cargo run -p checkout-demo
//!
//! # JSON receipts, dollar amounts, every checkout phase logged
//! CHECKOUT_RECEIPT_FORMAT=json CHECKOUT_CURRENCY_SYMBOL='$' RUST_LOG=debug \
//!     cargo run -p checkout-demo
//! ```

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    checkout_demo::run()?;
    Ok(())
}
