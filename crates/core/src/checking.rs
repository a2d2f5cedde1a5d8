//! Checking account - withdrawals may dip below zero up to the overdraft limit

use crate::account::{ensure_positive, format_money, today, AccountCore};
use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use crate::shared::OperationType;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingAccount {
    core: AccountCore,
    overdraft_limit: Decimal,
    last_operation_date: Option<NaiveDate>,
    last_operation_amount: Decimal,
    last_operation_type: Option<OperationType>,
}

impl CheckingAccount {
    pub fn new(
        product_number: impl Into<String>,
        opening_date: NaiveDate,
        customer: Customer,
        balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self {
            core: AccountCore::new(product_number, opening_date, customer, balance),
            overdraft_limit,
            last_operation_date: None,
            last_operation_amount: Decimal::ZERO,
            last_operation_type: None,
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn balance(&self) -> Decimal {
        self.core.balance()
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Most that can be withdrawn right now (balance + overdraft)
    pub fn available_funds(&self) -> FinanceResult<Decimal> {
        self.core
            .balance()
            .checked_add(self.overdraft_limit)
            .ok_or_else(FinanceError::out_of_range)
    }

    pub fn last_operation_date(&self) -> Option<NaiveDate> {
        self.last_operation_date
    }

    pub fn last_operation_amount(&self) -> Decimal {
        self.last_operation_amount
    }

    pub fn last_operation_type(&self) -> Option<OperationType> {
        self.last_operation_type
    }

    pub fn deposit(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Deposit")?;

        self.core.credit(amount)?;
        self.record(amount, OperationType::Deposit);

        Ok(format!(
            "Deposit successful. New balance: {}",
            format_money(self.core.balance())
        ))
    }

    pub fn withdraw(&mut self, amount: Decimal) -> FinanceResult<String> {
        ensure_positive(amount, "Withdrawal")?;

        // Compared as amount - limit <= balance so it cannot overflow
        let within_allowance = amount
            .checked_sub(self.overdraft_limit)
            .is_some_and(|excess| excess <= self.core.balance());
        if !within_allowance {
            return Err(FinanceError::overdraft_exceeded(
                self.core.balance(),
                self.overdraft_limit,
                amount,
            ));
        }
        self.core.debit(amount)?;
        self.record(amount, OperationType::Withdrawal);

        Ok(format!(
            "Withdrawal successful. New balance: {}",
            format_money(self.core.balance())
        ))
    }

    fn record(&mut self, amount: Decimal, operation: OperationType) {
        self.last_operation_date = Some(today());
        self.last_operation_amount = amount;
        self.last_operation_type = Some(operation);
    }
}
