//! In-memory product repository

use std::collections::HashMap;

use finco_core::{FinanceError, FinanceResult, Product};

use crate::traits::ProductRepository;

/// Products in insertion order plus two slot indexes.
///
/// Products are never removed, so a slot stays valid once handed out.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    /// product number -> slot
    by_number: HashMap<String, usize>,
    /// customer identification -> slot
    by_customer: HashMap<String, usize>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(key: &str) -> Option<&str> {
        let key = key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    fn slot_by_number(&self, product_number: &str) -> Option<usize> {
        Self::normalize(product_number).and_then(|key| self.by_number.get(key).copied())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn add_product(&mut self, product: Product) -> FinanceResult<()> {
        let number = Self::normalize(product.product_number())
            .ok_or_else(|| FinanceError::invalid("product number is required"))?
            .to_string();
        let customer_id = Self::normalize(product.customer().identification())
            .ok_or_else(|| FinanceError::invalid("customer data is required"))?
            .to_string();

        if self.by_number.contains_key(&number) {
            return Err(FinanceError::invalid(format!(
                "a product with number {} already exists",
                number
            )));
        }
        if self.by_customer.contains_key(&customer_id) {
            return Err(FinanceError::invalid(format!(
                "customer {} already has a registered product; each customer may hold only one",
                customer_id
            )));
        }

        let slot = self.products.len();
        tracing::debug!(
            product_number = %number,
            customer = %customer_id,
            kind = %product.kind(),
            slot,
            "Product stored"
        );
        self.products.push(product);
        self.by_number.insert(number, slot);
        self.by_customer.insert(customer_id, slot);
        Ok(())
    }

    fn find_by_product_number(&self, product_number: &str) -> Option<&Product> {
        self.slot_by_number(product_number)
            .map(|slot| &self.products[slot])
    }

    fn find_by_product_number_mut(&mut self, product_number: &str) -> Option<&mut Product> {
        let slot = self.slot_by_number(product_number)?;
        self.products.get_mut(slot)
    }

    fn find_by_customer_identification(&self, identification: &str) -> Option<&Product> {
        Self::normalize(identification)
            .and_then(|key| self.by_customer.get(key))
            .map(|&slot| &self.products[slot])
    }

    fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finco_core::{CheckingAccount, Customer, SavingsAccount};
    use rust_decimal_macros::dec;

    fn savings(number: &str, customer_id: &str) -> Product {
        SavingsAccount::new(
            number,
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            Customer::new(customer_id, "Ana", "Gomez", "300"),
            dec!(100),
        )
        .into()
    }

    #[test]
    fn test_add_and_find() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();

        assert_eq!(repo.len(), 1);
        assert!(!repo.is_empty());
        assert_eq!(repo.find_by_product_number("1001").unwrap().product_number(), "1001");
        assert_eq!(
            repo.find_by_customer_identification("C1").unwrap().product_number(),
            "1001"
        );
        assert!(repo.exists_by_product_number("1001"));
        assert!(repo.exists_by_customer_identification("C1"));
        assert!(!repo.exists_by_product_number("9999"));
    }

    #[test]
    fn test_lookups_trim_and_ignore_blank() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();

        assert!(repo.find_by_product_number("  1001 ").is_some());
        assert!(repo.find_by_customer_identification(" C1").is_some());
        assert!(repo.find_by_product_number("").is_none());
        assert!(repo.find_by_customer_identification("   ").is_none());
    }

    #[test]
    fn test_duplicate_product_number_rejected() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();

        let err = repo.add_product(savings("1001", "C2")).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("1001"));
        assert_eq!(repo.len(), 1);
        assert!(!repo.exists_by_customer_identification("C2"));
    }

    #[test]
    fn test_one_product_per_customer() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();

        let checking: Product = CheckingAccount::new(
            "1002",
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            Customer::new("C1", "Other", "Name", "999"),
            dec!(0),
            dec!(10),
        )
        .into();
        let err = repo.add_product(checking).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!repo.exists_by_product_number("1002"));
    }

    #[test]
    fn test_blank_keys_rejected() {
        let mut repo = InMemoryProductRepository::new();

        let err = repo.add_product(savings("  ", "C1")).unwrap_err();
        assert_eq!(err, FinanceError::invalid("product number is required"));
        let err = repo.add_product(savings("1001", " ")).unwrap_err();
        assert_eq!(err, FinanceError::invalid("customer data is required"));
        assert!(repo.is_empty());

        // The customer's slot was not taken by the rejected product
        repo.add_product(savings("1001", "C1")).unwrap();
        assert!(repo.exists_by_customer_identification("C1"));
    }

    #[test]
    fn test_padded_customer_counts_as_same_owner() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1 ")).unwrap();

        let err = repo.add_product(savings("1002", "C1")).unwrap_err();
        assert!(err.is_invalid_argument());
        let stored = repo.find_by_customer_identification("C1").unwrap();
        assert_eq!(stored.customer(), &Customer::new("C1", "Ana", "Gomez", "300"));
    }

    #[test]
    fn test_all_products_is_a_copy() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();
        repo.add_product(savings("1002", "C2")).unwrap();

        let mut copy = repo.all_products();
        assert_eq!(copy.len(), 2);
        assert_eq!(copy[0].product_number(), "1001");
        assert_eq!(copy[1].product_number(), "1002");

        copy[0].deposit(dec!(500)).unwrap();
        copy.clear();

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find_by_product_number("1001").unwrap().balance(), dec!(100));
    }

    #[test]
    fn test_find_mut_mutates_stored_product() {
        let mut repo = InMemoryProductRepository::new();
        repo.add_product(savings("1001", "C1")).unwrap();

        repo.find_by_product_number_mut("1001")
            .unwrap()
            .withdraw(dec!(40))
            .unwrap();

        assert_eq!(repo.find_by_product_number("1001").unwrap().balance(), dec!(60));
        assert_eq!(repo.find_by_customer_identification("C1").unwrap().balance(), dec!(60));
    }
}
