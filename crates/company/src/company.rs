//! FinancialCompany - opens products and routes operations to them

use finco_core::account::today;
use finco_core::{
    CheckingAccount, Customer, FinanceError, FinanceResult, HousingClassification,
    HousingSavingsAccount, OperationType, Product, ProductKind, SalaryAccount, SavingsAccount,
};
use finco_repository::{InMemoryProductRepository, ProductRepository};
use rust_decimal::Decimal;

use crate::config::CompanyConfig;
use crate::validation::{
    validate_housing_value, validate_overdraft_limit, validate_product_creation,
    validate_salary_amount,
};

/// Service layer over a product repository.
///
/// The repository is injected and exclusively owned; every mutation goes
/// through `&mut self`.
pub struct FinancialCompany<R: ProductRepository = InMemoryProductRepository> {
    repository: R,
    config: CompanyConfig,
}

impl FinancialCompany<InMemoryProductRepository> {
    /// Company over an empty in-memory repository with default config
    pub fn in_memory() -> Self {
        Self::new(InMemoryProductRepository::new())
    }
}

impl<R: ProductRepository> FinancialCompany<R> {
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, CompanyConfig::default())
    }

    pub fn with_config(repository: R, config: CompanyConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &CompanyConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Store the product and log the opening
    fn register(&mut self, product: Product) -> FinanceResult<()> {
        let number = product.product_number().to_string();
        let kind = product.kind();
        let customer = product.customer().identification().to_string();
        let balance = product.balance();

        self.repository.add_product(product)?;

        tracing::info!(
            product_number = %number,
            kind = %kind,
            customer = %customer,
            initial_balance = %balance,
            "Product opened"
        );
        Ok(())
    }

    // === Product creation ===

    pub fn create_savings_account(
        &mut self,
        product_number: &str,
        customer: Customer,
        initial_balance: Decimal,
    ) -> FinanceResult<SavingsAccount> {
        validate_product_creation(product_number, &customer, initial_balance)?;

        let account = SavingsAccount::with_rate(
            product_number.trim(),
            today(),
            customer,
            initial_balance,
            self.config.savings_interest_rate,
        );
        self.register(account.clone().into())?;
        Ok(account)
    }

    pub fn create_checking_account(
        &mut self,
        product_number: &str,
        customer: Customer,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> FinanceResult<CheckingAccount> {
        validate_product_creation(product_number, &customer, initial_balance)?;
        validate_overdraft_limit(overdraft_limit)?;

        let account = CheckingAccount::new(
            product_number.trim(),
            today(),
            customer,
            initial_balance,
            overdraft_limit,
        );
        self.register(account.clone().into())?;
        Ok(account)
    }

    pub fn create_housing_savings_account(
        &mut self,
        product_number: &str,
        customer: Customer,
        initial_balance: Decimal,
        housing_value: Decimal,
        classification: HousingClassification,
    ) -> FinanceResult<HousingSavingsAccount> {
        validate_product_creation(product_number, &customer, initial_balance)?;
        validate_housing_value(housing_value)?;

        let account = HousingSavingsAccount::new(
            product_number.trim(),
            today(),
            customer,
            initial_balance,
            housing_value,
            classification,
        );
        self.register(account.clone().into())?;
        Ok(account)
    }

    pub fn create_salary_account(
        &mut self,
        product_number: &str,
        customer: Customer,
        initial_balance: Decimal,
        salary_amount: Decimal,
    ) -> FinanceResult<SalaryAccount> {
        validate_product_creation(product_number, &customer, initial_balance)?;
        validate_salary_amount(salary_amount)?;

        let account = SalaryAccount::new(
            product_number.trim(),
            today(),
            customer,
            initial_balance,
            salary_amount,
        );
        self.register(account.clone().into())?;
        Ok(account)
    }

    // === Operations ===

    fn product_mut(&mut self, product_number: &str) -> FinanceResult<&mut Product> {
        self.repository
            .find_by_product_number_mut(product_number)
            .ok_or_else(|| not_found_by_number(product_number))
    }

    pub fn perform_deposit(&mut self, product_number: &str, amount: Decimal) -> FinanceResult<String> {
        self.perform_operation(product_number, OperationType::Deposit, amount)
    }

    pub fn perform_withdrawal(
        &mut self,
        product_number: &str,
        amount: Decimal,
    ) -> FinanceResult<String> {
        self.perform_operation(product_number, OperationType::Withdrawal, amount)
    }

    /// Look up the product and dispatch the operation through its
    /// capability set.
    pub fn perform_operation(
        &mut self,
        product_number: &str,
        operation: OperationType,
        amount: Decimal,
    ) -> FinanceResult<String> {
        let product = self.product_mut(product_number)?;
        let message = product.perform(operation, amount)?;

        tracing::debug!(
            product_number = %product.product_number(),
            operation = %operation,
            amount = %amount,
            balance = %product.balance(),
            "Operation completed"
        );
        Ok(message)
    }

    /// Change the withdrawal ceiling of a salary account
    pub fn update_salary_amount(
        &mut self,
        product_number: &str,
        salary_amount: Decimal,
    ) -> FinanceResult<()> {
        let product = self.product_mut(product_number)?;
        let kind = product.kind();
        let account = product.as_salary_mut().ok_or_else(|| {
            FinanceError::invalid(format!(
                "product {} is a {}, not a {}",
                product_number.trim(),
                kind,
                ProductKind::Salary
            ))
        })?;
        account.set_salary_amount(salary_amount)?;

        tracing::info!(
            product_number = %product_number.trim(),
            salary_amount = %salary_amount,
            "Salary amount updated"
        );
        Ok(())
    }

    // === Queries ===

    pub fn consult_by_product_number(&self, product_number: &str) -> FinanceResult<&Product> {
        self.repository
            .find_by_product_number(product_number)
            .ok_or_else(|| not_found_by_number(product_number))
    }

    pub fn consult_by_customer(&self, identification: &str) -> FinanceResult<&Product> {
        self.repository
            .find_by_customer_identification(identification)
            .ok_or_else(|| {
                FinanceError::ProductNotFound(format!(
                    "no product for customer with identification {}",
                    identification
                ))
            })
    }

    pub fn all_products(&self) -> Vec<Product> {
        self.repository.all_products()
    }
}

impl Default for FinancialCompany<InMemoryProductRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

fn not_found_by_number(product_number: &str) -> FinanceError {
    FinanceError::ProductNotFound(format!("no product with number {}", product_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn customer(id: &str) -> Customer {
        Customer::new(id, "Ana", "Gomez", "3001234567")
    }

    #[test]
    fn test_create_savings_account() {
        let mut company = FinancialCompany::in_memory();
        let acc = company
            .create_savings_account("1001", customer("C1"), dec!(500))
            .unwrap();

        assert_eq!(acc.balance(), dec!(500));
        assert_eq!(acc.accumulated_interest(), Decimal::ZERO);
        assert_eq!(acc.core().opening_date(), today());
        assert_eq!(company.repository().len(), 1);
    }

    #[test]
    fn test_creation_trims_product_number() {
        let mut company = FinancialCompany::in_memory();
        let acc = company
            .create_checking_account(" 2001 ", customer("C1"), dec!(0), dec!(100))
            .unwrap();
        assert_eq!(acc.core().product_number(), "2001");
        assert!(company.consult_by_product_number("2001").is_ok());
    }

    #[test]
    fn test_config_rate_reaches_savings_accounts() {
        let config = CompanyConfig {
            savings_interest_rate: dec!(0.1),
        };
        let mut company = FinancialCompany::with_config(InMemoryProductRepository::new(), config);
        company
            .create_savings_account("1001", customer("C1"), dec!(0))
            .unwrap();
        company.perform_deposit("1001", dec!(100)).unwrap();

        let product = company.consult_by_product_number("1001").unwrap();
        assert_eq!(product.as_savings().unwrap().accumulated_interest(), dec!(10));
    }

    #[test]
    fn test_variant_validation() {
        let mut company = FinancialCompany::in_memory();

        let err = company
            .create_checking_account("1", customer("C1"), dec!(0), dec!(-1))
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let err = company
            .create_housing_savings_account("2", customer("C2"), dec!(0), dec!(0), HousingClassification::Vis)
            .unwrap_err();
        assert!(err.is_invalid_argument());

        let err = company
            .create_salary_account("3", customer("C3"), dec!(0), dec!(0))
            .unwrap_err();
        assert!(err.is_invalid_argument());

        assert!(company.repository().is_empty());
    }

    #[test]
    fn test_operations_near_decimal_max_return_errors() {
        let mut company = FinancialCompany::in_memory();
        company
            .create_checking_account("1", customer("C1"), Decimal::MAX, Decimal::MAX)
            .unwrap();
        company
            .create_salary_account("2", customer("C2"), Decimal::MAX, dec!(10))
            .unwrap();

        company.perform_withdrawal("1", dec!(1)).unwrap();
        assert_eq!(
            company.consult_by_product_number("1").unwrap().balance(),
            Decimal::MAX - dec!(1)
        );

        let err = company.perform_deposit("2", Decimal::MAX).unwrap_err();
        assert_eq!(err, FinanceError::out_of_range());
        assert_eq!(
            company.consult_by_product_number("2").unwrap().balance(),
            Decimal::MAX
        );
    }

    #[test]
    fn test_update_salary_amount() {
        let mut company = FinancialCompany::in_memory();
        company
            .create_salary_account("4001", customer("C1"), dec!(5000), dec!(1000))
            .unwrap();
        company
            .create_savings_account("4002", customer("C2"), dec!(0))
            .unwrap();

        company.update_salary_amount("4001", dec!(3000)).unwrap();
        company.perform_withdrawal("4001", dec!(2500)).unwrap();

        assert!(company
            .update_salary_amount("4001", dec!(-5))
            .unwrap_err()
            .is_invalid_argument());
        assert!(company
            .update_salary_amount("4002", dec!(10))
            .unwrap_err()
            .is_invalid_argument());
        assert!(company
            .update_salary_amount("9999", dec!(10))
            .unwrap_err()
            .is_not_found());
    }
}
