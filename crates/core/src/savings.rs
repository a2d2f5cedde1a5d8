//! Savings account - every deposit accrues interest on the new balance

use crate::account::{ensure_positive, format_money, today, AccountCore};
use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Interest applied to the post-deposit balance (3%)
pub const DEFAULT_SAVINGS_INTEREST_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2); // 0.03

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsAccount {
    core: AccountCore,
    interest_rate: Decimal,
    accumulated_interest: Decimal,
    last_deposit_date: Option<NaiveDate>,
    last_deposit_amount: Decimal,
}

impl SavingsAccount {
    pub fn new(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
    ) -> Self {
        Self::with_rate(
            product_number,
            opening_date,
            customer,
            balance,
            DEFAULT_SAVINGS_INTEREST_RATE,
        )
    }

    /// Create with a custom interest rate
    pub fn with_rate(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            core: AccountCore::new(product_number, opening_date, customer, balance),
            interest_rate,
            accumulated_interest: Decimal::ZERO,
            last_deposit_date: None,
            last_deposit_amount: Decimal::ZERO,
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn balance(&self) -> Decimal {
        self.core.balance()
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    pub fn accumulated_interest(&self) -> Decimal {
        self.accumulated_interest
    }

    pub fn last_deposit_date(&self) -> Option<NaiveDate> {
        self.last_deposit_date
    }

    pub fn last_deposit_amount(&self) -> Decimal {
        self.last_deposit_amount
    }

    pub fn deposit(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Deposit")?;

        let new_balance = self.core.balance_after_credit(amount)?;
        let interest = new_balance
            .checked_mul(self.interest_rate)
            .ok_or_else(FinanceError::out_of_range)?;
        let accumulated = self
            .accumulated_interest
            .checked_add(interest)
            .ok_or_else(FinanceError::out_of_range)?;

        self.core.credit(amount)?;
        self.accumulated_interest = accumulated;
        self.last_deposit_date = Some(today());
        self.last_deposit_amount = amount;

        Ok(format!(
            "Deposit successful. New balance: {}. Interest generated: {}",
            format_money(self.core.balance()),
            format_money(interest)
        ))
    }

    pub fn withdraw(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Withdrawal")?;

        if amount > self.core.balance() {
            return Err(FinanceError::insufficient_funds());
        }
        self.core.debit(amount)?;

        Ok(format!(
            "Withdrawal successful. New balance: {}",
            format_money(self.core.balance())
        ))
    }
}
