//! # Error Module
//!
//! Domain errors for financial products, built with thiserror.

use crate::shared::{Capability, ProductKind};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Why a withdrawal was refused for lack of funds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shortfall {
    /// Amount exceeds the available balance
    Balance,
    /// Amount exceeds balance plus the overdraft allowance (checking accounts)
    Overdraft {
        balance: Decimal,
        overdraft_limit: Decimal,
        attempted: Decimal,
    },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::Balance => write!(f, "Insufficient funds"),
            Shortfall::Overdraft {
                balance,
                overdraft_limit,
                attempted,
            } => write!(
                f,
                "Insufficient funds - overdraft limit exceeded (balance: {}, overdraft: {}, attempted: {})",
                crate::account::format_money(*balance),
                crate::account::format_money(*overdraft_limit),
                crate::account::format_money(*attempted),
            ),
        }
    }
}

/// Errors returned by products, the repository and the company service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    /// Malformed or out-of-range input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("{0}")]
    InsufficientFunds(Shortfall),

    #[error("Operation {operation} is not supported by {kind}")]
    UnsupportedOperation {
        operation: Capability,
        kind: ProductKind,
    },
}

/// Result type alias with FinanceError
pub type FinanceResult<T> = Result<T, FinanceError>;

impl FinanceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Arithmetic on an amount left the representable `Decimal` range
    pub fn out_of_range() -> Self {
        Self::InvalidArgument("amount out of range".to_string())
    }

    pub fn insufficient_funds() -> Self {
        Self::InsufficientFunds(Shortfall::Balance)
    }

    pub fn overdraft_exceeded(balance: Decimal, overdraft_limit: Decimal, attempted: Decimal) -> Self {
        Self::InsufficientFunds(Shortfall::Overdraft {
            balance,
            overdraft_limit,
            attempted,
        })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FinanceError::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FinanceError::ProductNotFound(_))
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, FinanceError::InsufficientFunds(_))
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, FinanceError::UnsupportedOperation { .. })
    }
}
