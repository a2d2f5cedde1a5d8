//! # Customer Module
//!
//! Customer - the owner of a financial product. Immutable once created.

use serde::{Deserialize, Serialize};

/// Identification and contact data of a customer.
///
/// Two customers are equal when their identifications are equal once
/// surrounding whitespace is ignored, the same key the repository indexes
/// owners by. The remaining fields do not take part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    identification: String,
    first_name: String,
    last_name: String,
    phone: String,
}

impl Customer {
    pub fn new(
        identification: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            identification: identification.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }

    pub fn identification(&self) -> &str {
        &self.identification
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.identification.trim() == other.identification.trim()
    }
}

impl Eq for Customer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_fields() {
        let ana = Customer::new("1001", "Ana", "Gomez", "3001234567");
        assert_eq!(ana.identification(), "1001");
        assert_eq!(ana.phone(), "3001234567");
        assert_eq!(ana.full_name(), "Ana Gomez");
    }

    #[test]
    fn test_equality_by_identification() {
        let a = Customer::new("1001", "Ana", "Gomez", "300");
        let b = Customer::new("1001", "Ana Maria", "Gomez", "311");
        let c = Customer::new("1002", "Ana", "Gomez", "300");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_equality_ignores_surrounding_whitespace() {
        let padded = Customer::new("C1 ", "Ana", "Gomez", "300");
        let plain = Customer::new("C1", "Ana", "Gomez", "300");
        assert_eq!(padded, plain);
        assert_eq!(padded.identification(), "C1 ");
        assert_ne!(padded, Customer::new("C 1", "Ana", "Gomez", "300"));
    }
}
