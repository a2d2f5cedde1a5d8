//! Storage trait for financial products

use finco_core::{FinanceResult, Product};

/// Product storage.
///
/// Implementations must keep product numbers unique and allow at most one
/// product per customer identification. Keys are trimmed on insert and
/// lookup; blank keys are never stored and never match.
pub trait ProductRepository {
    /// Store a new product.
    ///
    /// Fails with `InvalidArgument` when either key is blank or already
    /// taken (a customer may own only one product).
    fn add_product(&mut self, product: Product) -> FinanceResult<()>;

    fn find_by_product_number(&self, product_number: &str) -> Option<&Product>;

    fn find_by_product_number_mut(&mut self, product_number: &str) -> Option<&mut Product>;

    fn find_by_customer_identification(&self, identification: &str) -> Option<&Product>;

    fn exists_by_product_number(&self, product_number: &str) -> bool {
        self.find_by_product_number(product_number).is_some()
    }

    fn exists_by_customer_identification(&self, identification: &str) -> bool {
        self.find_by_customer_identification(identification).is_some()
    }

    /// Owned copy of every product, in insertion order
    fn all_products(&self) -> Vec<Product>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
