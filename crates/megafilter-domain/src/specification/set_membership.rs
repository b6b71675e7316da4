//! Product overlap specification

use tracing::trace;

use super::Specification;
use crate::candidate::ProductCatalog;
use crate::value_objects::ProductId;

/// Matches candidates stocking at least one of the allowed products.
///
/// Unlike [`MembershipSpecification`](super::MembershipSpecification), which
/// compares a single scalar, this checks for any overlap between the
/// candidate's product collection and the allowed list. An empty allowed list
/// is a wildcard. A candidate without a product collection never matches
/// otherwise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetMembershipSpecification {
    allowed_products: Vec<ProductId>,
}

impl SetMembershipSpecification {
    /// Create from an ordered list of allowed product IDs
    pub fn new<I, P>(allowed_products: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ProductId>,
    {
        Self {
            allowed_products: allowed_products.into_iter().map(Into::into).collect(),
        }
    }

    /// Wildcard specification that matches every candidate
    pub fn any() -> Self {
        Self::default()
    }

    pub fn allowed_products(&self) -> &[ProductId] {
        &self.allowed_products
    }

    /// True when no product restriction applies
    pub fn is_wildcard(&self) -> bool {
        self.allowed_products.is_empty()
    }

    fn allows(&self, product_id: &str) -> bool {
        self.allowed_products
            .iter()
            .any(|id| id.as_str() == product_id)
    }
}

impl<T: ProductCatalog + ?Sized> Specification<T> for SetMembershipSpecification {
    fn is_satisfied(&self, candidate: &T) -> bool {
        if self.is_wildcard() {
            return true;
        }

        match candidate.product_ids() {
            // Stops at the first overlap
            Some(products) => products.into_iter().any(|product| self.allows(product)),
            None => {
                trace!("candidate has no product list; overlap not satisfied");
                false
            }
        }
    }

    fn description(&self) -> String {
        if self.is_wildcard() {
            "products(any)".to_string()
        } else {
            let ids: Vec<&str> = self
                .allowed_products
                .iter()
                .map(ProductId::as_str)
                .collect();
            format!("products overlap [{}]", ids.join(", "))
        }
    }
}
