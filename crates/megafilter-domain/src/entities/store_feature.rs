//! Store feature record

use serde::{Deserialize, Serialize};

use crate::{candidate::*, value_objects::*};

/// A store location in GeoJSON feature form
///
/// Only `properties` is read by the specifications; `geometry` is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreFeature {
    pub properties: StoreProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
}

/// The `properties` object of a store feature
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
    #[serde(default)]
    pub products: Vec<ProductId>,
}

impl StoreFeature {
    /// Create a feature for a store stocking the given products
    pub fn new<I, P>(store_id: impl Into<StoreId>, products: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductId>,
    {
        Self {
            properties: StoreProperties {
                store_id: Some(store_id.into()),
                products: products.into_iter().map(Into::into).collect(),
            },
            geometry: None,
        }
    }

    /// Attach a GeoJSON geometry
    pub fn with_geometry(mut self, geometry: serde_json::Value) -> Self {
        self.geometry = Some(geometry);
        self
    }
}

impl StoreScoped for StoreFeature {
    fn store_id(&self) -> Option<&str> {
        self.properties.store_id.as_ref().map(StoreId::as_str)
    }
}

impl ProductCatalog for StoreFeature {
    fn product_ids(&self) -> Option<Vec<&str>> {
        Some(self.properties.products.iter().map(ProductId::as_str).collect())
    }
}
