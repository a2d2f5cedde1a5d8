//! Company configuration
//!
//! Rates live here instead of in the products so they can be tuned from a
//! JSON file without recompiling.

use finco_core::DEFAULT_SAVINGS_INTEREST_RATE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Configuration for the FinancialCompany
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Interest applied to the post-deposit balance of savings accounts
    #[serde(default = "default_savings_interest_rate")]
    pub savings_interest_rate: Decimal,
}

fn default_savings_interest_rate() -> Decimal {
    DEFAULT_SAVINGS_INTEREST_RATE
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            savings_interest_rate: default_savings_interest_rate(),
        }
    }
}

impl CompanyConfig {
    /// Load configuration from JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.savings_interest_rate < Decimal::ZERO {
            return Err(ConfigError::Invalid(format!(
                "savings_interest_rate cannot be negative: {}",
                self.savings_interest_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CompanyConfig::default();
        assert_eq!(config.savings_interest_rate, dec!(0.03));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json() {
        let config = CompanyConfig::from_json_str("{}").unwrap();
        assert_eq!(config.savings_interest_rate, dec!(0.03));

        let config = CompanyConfig::from_json_str(r#"{ "savings_interest_rate": "0.05" }"#).unwrap();
        assert_eq!(config.savings_interest_rate, dec!(0.05));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = CompanyConfig::from_json_str(r#"{ "savings_interest_rate": "-0.01" }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = CompanyConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "savings_interest_rate": "0.04" }}"#).unwrap();

        let config = CompanyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.savings_interest_rate, dec!(0.04));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CompanyConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
