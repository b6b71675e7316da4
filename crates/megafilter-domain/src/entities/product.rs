//! Product record

use serde::{Deserialize, Serialize};

use crate::{candidate::*, value_objects::*};

/// A product offered by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in minor currency units
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
}

impl Product {
    /// Create a product that is not tied to a store
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            store_id: None,
        }
    }

    /// Attach the store that sells this product
    pub fn with_store(mut self, store_id: impl Into<StoreId>) -> Self {
        self.store_id = Some(store_id.into());
        self
    }
}

impl Priced for Product {
    fn price(&self) -> Option<f64> {
        Some(self.price as f64)
    }
}

impl StoreScoped for Product {
    fn store_id(&self) -> Option<&str> {
        self.store_id.as_ref().map(StoreId::as_str)
    }
}
