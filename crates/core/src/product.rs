//! # Product Module
//!
//! `Product` is the tagged union of the four account variants. Deposits and
//! withdrawals are dispatched through the variant's capability set, so a
//! variant that does not offer an operation fails with
//! `FinanceError::UnsupportedOperation` instead of reaching its own code.

use crate::account::AccountCore;
use crate::checking::CheckingAccount;
use crate::customer::Customer;
use crate::error::{FinanceError, FinanceResult};
use crate::housing::HousingSavingsAccount;
use crate::salary::SalaryAccount;
use crate::savings::SavingsAccount;
use crate::shared::{Capability, OperationType, ProductKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Product {
    Savings(SavingsAccount),
    Checking(CheckingAccount),
    HousingSavings(HousingSavingsAccount),
    Salary(SalaryAccount),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::Savings(_) => ProductKind::Savings,
            Product::Checking(_) => ProductKind::Checking,
            Product::HousingSavings(_) => ProductKind::HousingSavings,
            Product::Salary(_) => ProductKind::Salary,
        }
    }

    fn core(&self) -> &AccountCore {
        match self {
            Product::Savings(acc) => acc.core(),
            Product::Checking(acc) => acc.core(),
            Product::HousingSavings(acc) => acc.core(),
            Product::Salary(acc) => acc.core(),
        }
    }

    pub fn product_number(&self) -> &str {
        self.core().product_number()
    }

    pub fn opening_date(&self) -> NaiveDate {
        self.core().opening_date()
    }

    pub fn customer(&self) -> &Customer {
        self.core().customer()
    }

    pub fn balance(&self) -> Decimal {
        self.core().balance()
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.kind().capabilities()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.kind().supports(capability)
    }

    fn require(&self, capability: Capability) -> FinanceResult<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(FinanceError::UnsupportedOperation {
                operation: capability,
                kind: self.kind(),
            })
        }
    }

    pub fn deposit(&mut self, amount: Decimal) -> FinanceResult<String> {
        self.require(Capability::Deposit)?;
        match self {
            Product::Savings(acc) => acc.deposit(amount),
            Product::Checking(acc) => acc.deposit(amount),
            Product::HousingSavings(acc) => acc.deposit(amount),
            Product::Salary(acc) => acc.deposit(amount),
        }
    }

    pub fn withdraw(&mut self, amount: Decimal) -> FinanceResult<String> {
        self.require(Capability::Withdraw)?;
        match self {
            Product::Savings(acc) => acc.withdraw(amount),
            Product::Checking(acc) => acc.withdraw(amount),
            Product::HousingSavings(acc) => acc.withdraw(amount),
            Product::Salary(acc) => acc.withdraw(amount),
        }
    }

    pub fn perform(&mut self, operation: OperationType, amount: Decimal) -> FinanceResult<String> {
        match operation {
            OperationType::Deposit => self.deposit(amount),
            OperationType::Withdrawal => self.withdraw(amount),
        }
    }

    // === Variant access ===

    pub fn as_savings(&self) -> Option<&SavingsAccount> {
        match self {
            Product::Savings(acc) => Some(acc),
            _ => None,
        }
    }

    pub fn as_checking(&self) -> Option<&CheckingAccount> {
        match self {
            Product::Checking(acc) => Some(acc),
            _ => None,
        }
    }

    pub fn as_housing_savings(&self) -> Option<&HousingSavingsAccount> {
        match self {
            Product::HousingSavings(acc) => Some(acc),
            _ => None,
        }
    }

    pub fn as_salary(&self) -> Option<&SalaryAccount> {
        match self {
            Product::Salary(acc) => Some(acc),
            _ => None,
        }
    }

    pub fn as_salary_mut(&mut self) -> Option<&mut SalaryAccount> {
        match self {
            Product::Salary(acc) => Some(acc),
            _ => None,
        }
    }
}

impl From<SavingsAccount> for Product {
    fn from(acc: SavingsAccount) -> Self {
        Product::Savings(acc)
    }
}

impl From<CheckingAccount> for Product {
    fn from(acc: CheckingAccount) -> Self {
        Product::Checking(acc)
    }
}

impl From<HousingSavingsAccount> for Product {
    fn from(acc: HousingSavingsAccount) -> Self {
        Product::HousingSavings(acc)
    }
}

impl From<SalaryAccount> for Product {
    fn from(acc: SalaryAccount) -> Self {
        Product::Salary(acc)
    }
}
