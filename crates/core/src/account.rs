//! # Account Module
//!
//! Data shared by every product variant: number, opening date, owner and
//! balance. The balance is only reachable for writing through the
//! crate-private `credit`/`debit`, which the variants call from their
//! deposit and withdraw operations. Both are checked: a result outside the
//! `Decimal` range is an error and leaves the balance untouched.

use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCore {
    product_number: String,
    opening_date: NaiveDate,
    customer: Customer,
    balance: Decimal,
}

impl AccountCore {
    pub fn new(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
    ) -> Self {
        Self {
            product_number: product_number.into(),
            opening_date,
            customer,
            balance,
        }
    }

    pub fn product_number(&self) -> &str {
        &self.product_number
    }

    pub fn opening_date(&self) -> NaiveDate {
        self.opening_date
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance a credit of `amount` would produce, without applying it
    pub(crate) fn balance_after_credit(&self, amount: Decimal) -> FinanceResult<Decimal> {
        self.balance
            .checked_add(amount)
            .ok_or_else(FinanceError::out_of_range)
    }

    pub(crate) fn credit(&mut self, amount: Decimal) -> FinanceResult<()> {
        self.balance = self.balance_after_credit(amount)?;
        Ok(())
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> FinanceResult<()> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(FinanceError::out_of_range)?;
        Ok(())
    }
}

/// Rejects zero and negative operation amounts
pub(crate) fn ensure_positive(amount: Decimal, action: &str) -> FinanceResult<()> {
    if amount <= Decimal::ZERO {
        return Err(FinanceError::invalid(format!(
            "{} amount must be greater than zero",
            action
        )));
    }
    Ok(())
}

/// Renders an amount as `$1234.50`
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

/// Local calendar date, used for opening and operation dates
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
