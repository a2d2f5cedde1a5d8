//! Finco Company - service layer
//!
//! The company validates caller input, opens typed financial products with
//! today's date, stores them through a `ProductRepository`, and routes
//! deposits and withdrawals to the stored products.
//!
//! ## Key Components
//!
//! - [`config::CompanyConfig`] - Tunable rates (savings interest)
//! - [`validation`] - Fail-fast creation rules
//! - [`company::FinancialCompany`] - The service itself

pub mod company;
pub mod config;
pub mod validation;

pub use company::FinancialCompany;
pub use config::{CompanyConfig, ConfigError};
