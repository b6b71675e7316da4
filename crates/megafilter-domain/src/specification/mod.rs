//! Specification pattern
//!
//! A specification is a single boolean business rule that can be tested
//! against a candidate record. Specifications compose into trees:
//! - Leaf rules own their comparison parameters (`RangeSpecification`,
//!   `MembershipSpecification`, `SetMembershipSpecification`)
//! - Compound rules own an ordered list of children (`AndSpecification`,
//!   `OrSpecification`) or a single child (`NotSpecification`)
//! - Trees are immutable once built and may be evaluated any number of times
//!
//! # Example
//!
//! ```
//! use megafilter_domain::specification::*;
//! use serde_json::json;
//!
//! let cheap_in_berlin: AndSpecification<serde_json::Value> = RangeSpecification::new(0.0, 5.0)
//!     .and(MembershipSpecification::new(["berlin-1", "berlin-2"]));
//!
//! let candidate = json!({ "price": 450, "properties": { "storeId": "berlin-2" } });
//! assert!(cheap_in_berlin.is_satisfied(&candidate));
//! ```

mod composite;
mod membership;
mod range;
mod set_membership;

pub use composite::{AndSpecification, NotSpecification, OrSpecification};
pub use membership::MembershipSpecification;
pub use range::RangeSpecification;
pub use set_membership::SetMembershipSpecification;

/// A boolean rule over candidates of type `T`
///
/// Evaluation must be a pure function of the candidate and the
/// specification's construction-time parameters.
pub trait Specification<T: ?Sized>: Send + Sync {
    /// Check whether the candidate satisfies this rule
    fn is_satisfied(&self, candidate: &T) -> bool;

    /// Human-readable rendering of the rule
    fn description(&self) -> String;
}

/// An owned, type-erased specification
pub type BoxedSpecification<T> = Box<dyn Specification<T>>;

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, candidate: &T) -> bool {
        (**self).is_satisfied(candidate)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, candidate: &T) -> bool {
        (**self).is_satisfied(candidate)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Combinator helpers available on every specification
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized + 'static {
    /// Both `self` and `other` must hold
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        S: Specification<T> + 'static,
    {
        AndSpecification::new().with_spec(self).with_spec(other)
    }

    /// Either `self` or `other` must hold
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        S: Specification<T> + 'static,
    {
        OrSpecification::new().with_spec(self).with_spec(other)
    }

    /// `self` must not hold
    fn not(self) -> NotSpecification<T> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type
    fn boxed(self) -> BoxedSpecification<T> {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T> + 'static> SpecificationExt<T> for S {}
