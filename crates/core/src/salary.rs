//! Salary account - a single withdrawal may not exceed the salary amount

use crate::account::{ensure_positive, format_money, today, AccountCore};
use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAccount {
    core: AccountCore,
    salary_amount: Decimal,
    last_withdrawal_date: Option<NaiveDate>,
    last_withdrawal_amount: Decimal,
}

impl SalaryAccount {
    pub fn new(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
        salary_amount: Decimal,
    ) -> Self {
        Self {
            core: AccountCore::new(product_number, opening_date, customer, balance),
            salary_amount,
            last_withdrawal_date: None,
            last_withdrawal_amount: Decimal::ZERO,
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn balance(&self) -> Decimal {
        self.core.balance()
    }

    pub fn salary_amount(&self) -> Decimal {
        self.salary_amount
    }

    pub fn set_salary_amount(&mut self, salary_amount: Decimal) -> FinanceResult<()> {
        if salary_amount <= Decimal::ZERO {
            return Err(FinanceError::invalid("salary amount must be positive"));
        }
        self.salary_amount = salary_amount;
        Ok(())
    }

    pub fn last_withdrawal_date(&self) -> Option<NaiveDate> {
        self.last_withdrawal_date
    }

    pub fn last_withdrawal_amount(&self) -> Decimal {
        self.last_withdrawal_amount
    }

    pub fn deposit(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Deposit")?;

        self.core.credit(amount)?;

        Ok(format!(
            "Deposit successful. New balance: {}",
            format_money(self.core.balance())
        ))
    }

    /// Balance is checked before the salary ceiling.
    pub fn withdraw(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Withdrawal")?;

        if amount > self.core.balance() {
            return Err(FinanceError::insufficient_funds());
        }
        if amount > self.salary_amount {
            return Err(FinanceError::invalid(format!(
                "withdrawal ({}) cannot exceed the salary limit ({})",
                format_money(amount),
                format_money(self.salary_amount)
            )));
        }

        self.core.debit(amount)?;
        self.last_withdrawal_date = Some(today());
        self.last_withdrawal_amount = amount;

        Ok(format!(
            "Withdrawal successful. New balance: {}",
            format_money(self.core.balance())
        ))
    }
}
