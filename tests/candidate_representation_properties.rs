//! Property-based tests for candidate representations
//!
//! **Property: Representation Independence**
//! A specification selects the same records whether they are filtered as
//! typed entities or as their serialized JSON form.

use megafilter_domain::entities::{Product, StoreFeature};
use megafilter_domain::filter::MegaFilter;
use megafilter_domain::specification::*;
use megafilter_domain::FilterConfig;
use proptest::prelude::*;
use serde_json::Value;

/// Strategy for generating short store / product identifiers
fn id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("north".to_string()),
        Just("south".to_string()),
        Just("east".to_string()),
        Just("west".to_string()),
    ]
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (id_strategy(), 0i64..10_000, prop::option::of(id_strategy())).prop_map(
        |(id, price, store)| {
            let product = Product::new(id.clone(), format!("product-{id}"), price);
            match store {
                Some(store) => product.with_store(store),
                None => product,
            }
        },
    )
}

fn feature_strategy() -> impl Strategy<Value = StoreFeature> {
    (id_strategy(), prop::collection::vec(id_strategy(), 0..4))
        .prop_map(|(store, products)| StoreFeature::new(store, products))
}

fn to_json<T: serde::Serialize>(items: &[T]) -> Vec<Value> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).expect("records serialize"))
        .collect()
}

/// Positions of the selected elements within the input slice
fn positions<T>(items: &[T], selected: &[&T]) -> Vec<usize> {
    selected
        .iter()
        .filter_map(|s| items.iter().position(|i| std::ptr::eq(i, *s)))
        .collect()
}

proptest! {
    /// Price rules pick the same products from typed and JSON data
    #[test]
    fn prop_products_select_same_positions(
        products in prop::collection::vec(product_strategy(), 0..20),
        min in 0i64..100,
        width in 0i64..100,
    ) {
        let json = to_json(&products);
        let range = RangeSpecification::new(min as f64, (min + width) as f64);
        let premium = RangeSpecification::at_least(90.0);

        let typed_spec: OrSpecification<Product> = range.or(premium);
        let json_spec: OrSpecification<Value> = range.or(premium);

        let typed = MegaFilter::filter(&products, &typed_spec);
        let untyped = MegaFilter::filter(&json, &json_spec);

        prop_assert_eq!(positions(&products, &typed), positions(&json, &untyped));
    }

    /// Store and product rules pick the same features from typed and JSON data
    #[test]
    fn prop_features_select_same_positions(
        features in prop::collection::vec(feature_strategy(), 0..20),
        stores in prop::collection::vec(id_strategy(), 0..3),
        wanted in prop::collection::vec(id_strategy(), 0..3),
    ) {
        let json = to_json(&features);
        let stores_spec = MembershipSpecification::new(stores);
        let products_spec = SetMembershipSpecification::new(wanted);

        let typed_spec: OrSpecification<StoreFeature> =
            stores_spec.clone().or(products_spec.clone().not());
        let json_spec: OrSpecification<Value> = stores_spec.or(products_spec.not());

        let typed = MegaFilter::filter(&features, &typed_spec);
        let untyped = MegaFilter::filter(&json, &json_spec);

        prop_assert_eq!(positions(&features, &typed), positions(&json, &untyped));
    }

    /// A configured scale applies the same way to both representations
    #[test]
    fn prop_configured_scale_is_representation_independent(
        products in prop::collection::vec(product_strategy(), 0..20),
        scale in prop_oneof![Just(1.0), Just(10.0), Just(100.0), Just(1000.0)],
    ) {
        let config = FilterConfig::with_price_scale(scale);
        let spec = RangeSpecification::from_config(1.0, 50.0, &config).expect("valid scale");
        let json = to_json(&products);

        let typed = MegaFilter::filter(&products, &spec);
        let untyped = MegaFilter::filter(&json, &spec);

        prop_assert_eq!(positions(&products, &typed), positions(&json, &untyped));
    }
}
