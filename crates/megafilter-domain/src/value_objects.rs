//! Value objects representing immutable domain concepts

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Store identifier, compared by exact (case-sensitive) equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    /// Create a store ID without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a store ID, rejecting blank input
    pub fn parse(s: &str) -> DomainResult<Self> {
        if s.trim().is_empty() {
            return Err(DomainError::ValidationError {
                field: "store_id".to_string(),
                reason: "Store ID cannot be empty".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StoreId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StoreId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Product identifier, compared by exact (case-sensitive) equality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a product ID, rejecting blank input
    pub fn parse(s: &str) -> DomainResult<Self> {
        if s.trim().is_empty() {
            return Err(DomainError::ValidationError {
                field: "product_id".to_string(),
                reason: "Product ID cannot be empty".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_id_parse_rejects_blank() {
        let result = StoreId::parse("   ");
        assert!(matches!(
            result,
            Err(DomainError::ValidationError { ref field, .. }) if field == "store_id"
        ));
    }

    #[test]
    fn test_product_id_parse_keeps_input_verbatim() {
        let id = ProductId::parse("Coffee-01").unwrap();
        assert_eq!(id.as_str(), "Coffee-01");
        assert_eq!(id.to_string(), "Coffee-01");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&StoreId::new("s-1")).unwrap();
        assert_eq!(json, "\"s-1\"");

        let id: ProductId = serde_json::from_str("\"p-9\"").unwrap();
        assert_eq!(id, ProductId::from("p-9"));
    }
}
