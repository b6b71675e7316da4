//! Field access for specification candidates
//!
//! Leaf specifications never look at a concrete record type. They read the
//! one field they care about through these capability traits, so any caller
//! record (or raw JSON) can be filtered once it exposes the field.
//!
//! A `None` from any accessor means the field is absent or malformed. Leaf
//! specifications treat that as "not satisfied" unless their wildcard rule
//! applies first.

use serde_json::Value;

/// A candidate carrying a price in minor currency units
pub trait Priced {
    fn price(&self) -> Option<f64>;
}

/// A candidate belonging to a single store
pub trait StoreScoped {
    fn store_id(&self) -> Option<&str>;
}

/// A candidate listing the products it stocks
pub trait ProductCatalog {
    fn product_ids(&self) -> Option<Vec<&str>>;
}

impl<T: Priced + ?Sized> Priced for &T {
    fn price(&self) -> Option<f64> {
        (**self).price()
    }
}

impl<T: StoreScoped + ?Sized> StoreScoped for &T {
    fn store_id(&self) -> Option<&str> {
        (**self).store_id()
    }
}

impl<T: ProductCatalog + ?Sized> ProductCatalog for &T {
    fn product_ids(&self) -> Option<Vec<&str>> {
        (**self).product_ids()
    }
}

// JSON candidates use the feature layout:
// `{ "price": 150, "properties": { "storeId": "s1", "products": ["p1"] } }`

impl Priced for Value {
    fn price(&self) -> Option<f64> {
        match self.get("price")? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
            _ => None,
        }
    }
}

impl StoreScoped for Value {
    fn store_id(&self) -> Option<&str> {
        self.get("properties")?.get("storeId")?.as_str()
    }
}

impl ProductCatalog for Value {
    fn product_ids(&self) -> Option<Vec<&str>> {
        let products = self.get("properties")?.get("products")?.as_array()?;
        Some(products.iter().filter_map(Value::as_str).collect())
    }
}
