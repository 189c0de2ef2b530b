//! Property tests for the material catalog's pure filter derivations.

use std::collections::BTreeSet;

use proptest::prelude::*;
use reno_core::material::{Material, MaterialCatalog};

/// Small label pool so generated catalogs actually share categories.
fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Paint".to_string(),
        "Flooring".to_string(),
        "Tile".to_string(),
        "Lighting".to_string(),
        "Fixtures".to_string(),
    ])
}

fn material() -> impl Strategy<Value = Material> {
    (label(), label(), "[a-z]{1,12}").prop_map(|(category, sub_category, name)| {
        Material::new(name, category, sub_category, "", "")
    })
}

fn catalog() -> impl Strategy<Value = MaterialCatalog> {
    prop::collection::vec(material(), 0..32).prop_map(MaterialCatalog::from_items)
}

proptest! {
    /// The derived sub-category set for a category filter is exactly the
    /// de-duplicated, sorted sub-categories among items of that category.
    #[test]
    fn sub_categories_match_manual_derivation(catalog in catalog(), filter in label()) {
        let expected: Vec<String> = catalog
            .items()
            .filter(|m| m.category == filter)
            .map(|m| m.sub_category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        prop_assert_eq!(catalog.sub_categories(&filter), expected);
    }

    /// Filtering never invents items: every hit matches both constraints.
    #[test]
    fn filter_hits_match_constraints(catalog in catalog(), cat in label(), sub in label()) {
        for hit in catalog.filter(Some(&cat), Some(&sub)) {
            prop_assert_eq!(&hit.category, &cat);
            prop_assert_eq!(&hit.sub_category, &sub);
        }
    }

    /// An unconstrained filter is the identity view of the catalog.
    #[test]
    fn unconstrained_filter_is_identity(catalog in catalog()) {
        let all = catalog.filter(None, None);
        prop_assert_eq!(all.len(), catalog.len());
    }

    /// Categories are sorted and unique.
    #[test]
    fn categories_sorted_unique(catalog in catalog()) {
        let categories = catalog.categories();
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(categories, sorted);
    }
}
