//! Finco Core - Domain types
//!
//! This crate contains the financial-product domain shared across Finco:
//! - `Customer`: immutable identification and contact data
//! - `Product`: tagged enum over the four account variants
//! - `Capability` / `ProductKind`: which operations each variant offers
//! - `FinanceError`: the error taxonomy returned by every layer

pub mod account;
pub mod checking;
pub mod customer;
pub mod error;
pub mod housing;
pub mod product;
pub mod salary;
pub mod savings;
pub mod shared;

pub use account::AccountCore;
pub use checking::CheckingAccount;
pub use customer::Customer;
pub use error::{FinanceError, FinanceResult, Shortfall};
pub use housing::HousingSavingsAccount;
pub use product::Product;
pub use salary::SalaryAccount;
pub use savings::{SavingsAccount, DEFAULT_SAVINGS_INTEREST_RATE};
pub use shared::{Capability, HousingClassification, OperationType, ProductKind};
