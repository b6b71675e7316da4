//! Store membership specification

use tracing::trace;

use super::Specification;
use crate::candidate::StoreScoped;
use crate::value_objects::StoreId;

/// Matches candidates whose store identifier is in an allowed list.
///
/// An empty list is a wildcard and matches every candidate, including ones
/// with no store identifier at all. Otherwise a missing identifier never
/// matches. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MembershipSpecification {
    allowed_ids: Vec<StoreId>,
}

impl MembershipSpecification {
    /// Create from an ordered list of allowed store IDs (duplicates are harmless)
    pub fn new<I, S>(allowed_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StoreId>,
    {
        Self {
            allowed_ids: allowed_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Wildcard specification that matches every candidate
    pub fn any() -> Self {
        Self::default()
    }

    pub fn allowed_ids(&self) -> &[StoreId] {
        &self.allowed_ids
    }

    /// True when no store restriction applies
    pub fn is_wildcard(&self) -> bool {
        self.allowed_ids.is_empty()
    }

    fn allows(&self, store_id: &str) -> bool {
        self.allowed_ids.iter().any(|id| id.as_str() == store_id)
    }
}

impl<T: StoreScoped + ?Sized> Specification<T> for MembershipSpecification {
    fn is_satisfied(&self, candidate: &T) -> bool {
        if self.is_wildcard() {
            return true;
        }

        match candidate.store_id() {
            Some(store_id) => self.allows(store_id),
            None => {
                trace!("candidate has no store id; membership not satisfied");
                false
            }
        }
    }

    fn description(&self) -> String {
        if self.is_wildcard() {
            "store(any)".to_string()
        } else {
            let ids: Vec<&str> = self.allowed_ids.iter().map(StoreId::as_str).collect();
            format!("store in [{}]", ids.join(", "))
        }
    }
}
