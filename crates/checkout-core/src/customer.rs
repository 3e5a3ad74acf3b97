//! # Customer
//!
//! A paying customer and their prepaid balance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_non_negative;

/// A customer with a spendable balance.
///
/// ## Invariants
/// - Balance is never negative
/// - Balance only changes through [`Customer::deduct_balance`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    balance: Money,
}

impl Customer {
    /// Creates a customer. A negative opening balance is rejected.
    pub fn new(name: impl Into<String>, balance: Money) -> CoreResult<Self> {
        validate_non_negative("balance", balance)?;
        Ok(Customer {
            name: name.into(),
            balance,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Deducts `amount` from the balance. All or nothing.
    ///
    /// ## Errors
    /// [`CoreError::InsufficientBalance`] if `amount` exceeds the balance;
    /// the balance is left untouched.
    pub fn deduct_balance(&mut self, amount: Money) -> CoreResult<()> {
        if amount > self.balance {
            return Err(CoreError::InsufficientBalance {
                available: self.balance,
                required: amount,
            });
        }

        self.balance -= amount;
        debug!(customer = %self.name, %amount, balance = %self.balance, "balance deducted");
        Ok(())
    }
}
