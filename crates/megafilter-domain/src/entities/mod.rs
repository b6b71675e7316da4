//! Candidate records the specifications are usually applied to
//!
//! - `product`: a sellable product with a price in minor units
//! - `store_feature`: a GeoJSON-style store feature listing its products

mod product;
mod store_feature;

pub use product::*;
pub use store_feature::*;
