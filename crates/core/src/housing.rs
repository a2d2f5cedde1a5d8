//! Housing savings account - programmed payments toward a home purchase

use crate::account::{ensure_positive, format_money, today, AccountCore};
use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use crate::shared::HousingClassification;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingSavingsAccount {
    core: AccountCore,
    total_housing_value: Decimal,
    classification: HousingClassification,
    total_paid: Decimal,
    last_payment_date: Option<NaiveDate>,
    last_payment_amount: Decimal,
}

impl HousingSavingsAccount {
    pub fn new(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
        total_housing_value: Decimal,
        classification: HousingClassification,
    ) -> Self {
        Self {
            core: AccountCore::new(product_number, opening_date, customer, balance),
            total_housing_value,
            classification,
            total_paid: Decimal::ZERO,
            last_payment_date: None,
            last_payment_amount: Decimal::ZERO,
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn balance(&self) -> Decimal {
        self.core.balance()
    }

    pub fn total_housing_value(&self) -> Decimal {
        self.total_housing_value
    }

    pub fn classification(&self) -> HousingClassification {
        self.classification
    }

    pub fn total_paid(&self) -> Decimal {
        self.total_paid
    }

    pub fn last_payment_date(&self) -> Option<NaiveDate> {
        self.last_payment_date
    }

    pub fn last_payment_amount(&self) -> Decimal {
        self.last_payment_amount
    }

    /// Whether payments so far exceed the value of the home
    pub fn is_overpaid(&self) -> bool {
        self.total_paid > self.total_housing_value
    }

    /// Record a payment. Paying past the housing value still succeeds; the
    /// returned message flags the overage.
    pub fn deposit(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Deposit")?;

        let total_paid = self
            .total_paid
            .checked_add(amount)
            .ok_or_else(FinanceError::out_of_range)?;
        self.core.credit(amount)?;
        self.total_paid = total_paid;
        self.last_payment_date = Some(today());
        self.last_payment_amount = amount;

        if self.is_overpaid() {
            return Ok(format!(
                "Deposit successful. New balance: {}. TOTAL PAID EXCEEDS THE HOUSING VALUE.",
                format_money(self.core.balance())
            ));
        }

        Ok(format!(
            "Deposit successful. New balance: {}. Total paid: {} of {}",
            format_money(self.core.balance()),
            format_money(self.total_paid),
            format_money(self.total_housing_value)
        ))
    }

    /// Plain balance-checked withdrawal.
    ///
    /// Not reachable through `Product`: the housing-savings capability set
    /// has no withdraw, so dispatch rejects it before it gets here.
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
