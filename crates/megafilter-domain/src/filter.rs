//! Filter engine applying a specification to a collection

use tracing::debug;

use crate::specification::Specification;

/// Applies specifications to collections of candidates.
///
/// Every operation preserves the input order and leaves the input untouched.
///
/// # Example
///
/// ```
/// use megafilter_domain::entities::Product;
/// use megafilter_domain::filter::MegaFilter;
/// use megafilter_domain::specification::RangeSpecification;
///
/// let products = vec![
///     Product::new("gum", "Gum", 50),
///     Product::new("soda", "Soda", 150),
///     Product::new("chips", "Chips", 250),
/// ];
///
/// let matched = MegaFilter::filter(&products, &RangeSpecification::new(1.0, 2.0));
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "Soda");
/// ```
pub struct MegaFilter;

impl MegaFilter {
    /// Select the candidates satisfying `spec`
    ///
    /// # Arguments
    ///
    /// * `items` - Candidates to test, in caller order
    /// * `spec` - Root of the specification tree
    ///
    /// # Returns
    ///
    /// References to the matching candidates, in their original order
    pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
    where
        S: Specification<T> + ?Sized,
    {
        let matched: Vec<&T> = items.iter().filter(|item| spec.is_satisfied(item)).collect();
        debug!(
            total = items.len(),
            matched = matched.len(),
            spec = %spec.description(),
            "filtered collection"
        );
        matched
    }

    /// Like [`MegaFilter::filter`], but clones the matches into an owned vector
    pub fn filter_cloned<T, S>(items: &[T], spec: &S) -> Vec<T>
    where
        T: Clone,
        S: Specification<T> + ?Sized,
    {
        Self::filter(items, spec).into_iter().cloned().collect()
    }

    /// Count the candidates satisfying `spec`
    pub fn count<T, S>(items: &[T], spec: &S) -> usize
    where
        S: Specification<T> + ?Sized,
    {
        items.iter().filter(|item| spec.is_satisfied(item)).count()
    }

    /// Split candidates into `(matched, rejected)`, each in original order
    pub fn partition<'a, T, S>(items: &'a [T], spec: &S) -> (Vec<&'a T>, Vec<&'a T>)
    where
        S: Specification<T> + ?Sized,
    {
        let (matched, rejected): (Vec<&T>, Vec<&T>) =
            items.iter().partition(|item| spec.is_satisfied(item));
        debug!(
            total = items.len(),
            matched = matched.len(),
            rejected = rejected.len(),
            spec = %spec.description(),
            "partitioned collection"
        );
        (matched, rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Product, StoreFeature};
    use crate::specification::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("gum", "Gum", 50),
            Product::new("soda", "Soda", 150),
            Product::new("chips", "Chips", 250),
        ]
    }

    #[test]
    fn test_filter_selects_by_price() {
        let items = products();
        let matched = MegaFilter::filter(&items, &RangeSpecification::new(1.0, 2.0));

        assert_eq!(matched, vec![&items[1]]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let items = products();
        let matched = MegaFilter::filter(&items, &RangeSpecification::at_least(0.0));

        let names: Vec<&str> = matched.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Gum", "Soda", "Chips"]);
    }

    #[test]
    fn test_filter_empty_collection() {
        let items: Vec<Product> = Vec::new();

        assert!(MegaFilter::filter(&items, &AndSpecification::new()).is_empty());
        assert!(MegaFilter::filter(&items, &RangeSpecification::new(0.0, 1.0)).is_empty());
    }

    #[test]
    fn test_filter_always_false_spec() {
        let items = products();
        assert!(MegaFilter::filter(&items, &OrSpecification::new()).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = products();
        let before = items.clone();

        let _ = MegaFilter::filter(&items, &RangeSpecification::new(1.0, 2.0));
        let _ = MegaFilter::partition(&items, &RangeSpecification::new(1.0, 2.0));

        assert_eq!(items, before);
    }

    #[test]
    fn test_filter_with_trait_object() {
        let features = vec![
            StoreFeature::new("a", ["x"]),
            StoreFeature::new("b", ["y"]),
            StoreFeature::new("c", ["x", "y"]),
        ];
        let spec: BoxedSpecification<StoreFeature> = MembershipSpecification::new(["a", "c"])
            .and(SetMembershipSpecification::new(["y"]))
            .boxed();

        let matched = MegaFilter::filter(&features, spec.as_ref());
        assert_eq!(matched, vec![&features[2]]);
    }

    #[test]
    fn test_filter_cloned_and_count() {
        let items = products();
        let spec = RangeSpecification::at_most(2.0);

        let owned = MegaFilter::filter_cloned(&items, &spec);
        assert_eq!(owned, items[..2].to_vec());
        assert_eq!(MegaFilter::count(&items, &spec), 2);
    }

    #[test]
    fn test_partition_splits_in_order() {
        let items = products();
        let (matched, rejected) = MegaFilter::partition(&items, &RangeSpecification::new(1.0, 3.0));

        assert_eq!(matched, vec![&items[1], &items[2]]);
        assert_eq!(rejected, vec![&items[0]]);
    }
}
