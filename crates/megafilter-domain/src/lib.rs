#![forbid(unsafe_code)]

//! # MegaFilter Domain
//!
//! Composable business rules (the Specification pattern) for filtering
//! product and store records.
//!
//! ## Features
//!
//! - **Leaf Specifications**: price ranges, store membership, product overlap
//! - **Compound Specifications**: AND / OR over any number of children, plus NOT
//! - **Filter Engine**: order-preserving selection over any slice of candidates
//! - **Open Candidates**: typed records or raw `serde_json::Value` features
//!
//! ## Usage
//!
//! ```rust
//! use megafilter_domain::entities::StoreFeature;
//! use megafilter_domain::filter::MegaFilter;
//! use megafilter_domain::specification::*;
//!
//! let stores = vec![
//!     StoreFeature::new("north", ["espresso"]),
//!     StoreFeature::new("south", ["tea"]),
//!     StoreFeature::new("east", ["espresso", "tea"]),
//! ];
//!
//! let spec = MembershipSpecification::new(["north", "east"])
//!     .and(SetMembershipSpecification::new(["tea"]));
//!
//! let matched = MegaFilter::filter(&stores, &spec);
//! assert_eq!(matched, vec![&stores[2]]);
//! ```

pub mod candidate;
pub mod config;
pub mod entities;
pub mod errors;
pub mod filter;
pub mod specification;
pub mod value_objects;

pub use candidate::{Priced, ProductCatalog, StoreScoped};
pub use config::{FilterConfig, MINOR_UNITS_PER_MAJOR_UNIT};
pub use entities::{Product, StoreFeature, StoreProperties};
pub use errors::{DomainError, DomainResult};
pub use filter::MegaFilter;
pub use specification::{
    AndSpecification, BoxedSpecification, MembershipSpecification, NotSpecification,
    OrSpecification, RangeSpecification, SetMembershipSpecification, Specification,
    SpecificationExt,
};
pub use value_objects::{ProductId, StoreId};
