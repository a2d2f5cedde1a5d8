//! Creation rules
//!
//! Each check returns the first violated rule as `InvalidArgument`; errors
//! are never accumulated.

use finco_core::{Customer, FinanceError, FinanceResult};
use rust_decimal::Decimal;

/// Validation result with the violated rule
pub type ValidationResult = FinanceResult<()>;

/// Rules shared by every product variant, checked in order:
/// number present, customer present, balance non-negative, number numeric.
pub fn validate_product_creation(
    product_number: &str,
    customer: &Customer,
    initial_balance: Decimal,
) -> ValidationResult {
    let number = product_number.trim();
    if number.is_empty() {
        return Err(FinanceError::invalid("product number is required"));
    }
    if customer.identification().trim().is_empty() {
        return Err(FinanceError::invalid("customer data is required"));
    }
    if initial_balance < Decimal::ZERO {
        return Err(FinanceError::invalid("initial balance cannot be negative"));
    }
    if number.parse::<i32>().is_err() {
        return Err(FinanceError::invalid(
            "product number must be a valid integer",
        ));
    }
    Ok(())
}

pub fn validate_overdraft_limit(overdraft_limit: Decimal) -> ValidationResult {
    if overdraft_limit < Decimal::ZERO {
        return Err(FinanceError::invalid("overdraft limit cannot be negative"));
    }
    Ok(())
}

pub fn validate_housing_value(housing_value: Decimal) -> ValidationResult {
    if housing_value <= Decimal::ZERO {
        return Err(FinanceError::invalid("housing value must be positive"));
    }
    Ok(())
}

pub fn validate_salary_amount(salary_amount: Decimal) -> ValidationResult {
    if salary_amount <= Decimal::ZERO {
        return Err(FinanceError::invalid("salary amount must be positive"));
    }
    Ok(())
}
