//! Shared enums - capabilities, operation types, product kinds, housing classes

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Operation contract a product variant may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Deposit,
    Withdraw,
}

/// Kind of an operation performed on a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Deposit,
    Withdrawal,
}

impl OperationType {
    /// Capability a product needs to accept this operation
    pub fn required_capability(&self) -> Capability {
        match self {
            OperationType::Deposit => Capability::Deposit,
            OperationType::Withdrawal => Capability::Withdraw,
        }
    }
}

/// Regulatory class of a housing-savings account. Stored only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HousingClassification {
    Vis,
    Vip,
    VisRenovacion,
    NoVis,
}

/// The four product variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    #[strum(serialize = "Savings Account")]
    Savings,
    #[strum(serialize = "Checking Account")]
    Checking,
    #[strum(serialize = "Housing Savings Account")]
    HousingSavings,
    #[strum(serialize = "Salary Account")]
    Salary,
}

const DEPOSIT_AND_WITHDRAW: &[Capability] = &[Capability::Deposit, Capability::Withdraw];
const DEPOSIT_ONLY: &[Capability] = &[Capability::Deposit];

impl ProductKind {
    /// Capability set offered by this kind.
    ///
    /// Housing-savings accounts accept payments only; withdrawals are
    /// rejected at dispatch.
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            ProductKind::Savings | ProductKind::Checking | ProductKind::Salary => {
                DEPOSIT_AND_WITHDRAW
            }
            ProductKind::HousingSavings => DEPOSIT_ONLY,
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}
