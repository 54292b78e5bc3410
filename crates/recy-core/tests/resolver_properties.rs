//! Property-based tests for label resolution and ranking invariants.

use proptest::prelude::*;
use recy_common::{Catalog, CatalogKind, Category, DetectedLabel, ExclusionFilter};
use recy_core::{rank, Resolution, Resolver};

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Arbitrary printable text.
        "[ -~]{0,40}",
        // Catalog keys with noise around them.
        (
            "[a-zA-Z ]{0,8}",
            prop::sample::select(
                Catalog::builtin()
                    .entries()
                    .map(|(_, _, e)| e.key().to_string())
                    .collect::<Vec<_>>()
            ),
            "[a-zA-Z ]{0,8}",
        )
            .prop_map(|(pre, key, post)| format!("{pre}{key}{post}")),
        // Exclusion terms in random case.
        prop::sample::select(ExclusionFilter::builtin().terms().to_vec()).prop_map(|t| {
            t.chars()
                .enumerate()
                .map(|(i, c)| if i % 2 == 0 { c.to_ascii_uppercase() } else { c })
                .collect()
        }),
    ]
}

fn category_strategy() -> impl Strategy<Value = Option<Category>> {
    prop::option::of(prop::sample::select(vec![
        Category::Recyclable,
        Category::Compost,
        Category::SpecialDisposal,
        Category::Landfill,
        Category::Unknown,
    ]))
}

proptest! {
    #[test]
    fn resolution_is_deterministic(label in label_strategy()) {
        let resolver = Resolver::builtin();
        prop_assert_eq!(resolver.resolve(&label), resolver.resolve(&label));
        prop_assert_eq!(resolver.explain(&label), resolver.explain(&label));
    }

    #[test]
    fn excluded_iff_no_guidance(label in label_strategy()) {
        let resolver = Resolver::builtin();
        let excluded = !resolver.is_physical_object(&label);
        prop_assert_eq!(excluded, resolver.resolve(&label).is_none());
        prop_assert_eq!(excluded, resolver.explain(&label) == Resolution::Excluded);
    }

    #[test]
    fn specific_item_match_contains_key(label in label_strategy()) {
        let resolver = Resolver::builtin();
        if let Resolution::SpecificItem { key, .. } | Resolution::MaterialClass { key, .. } =
            resolver.explain(&label)
        {
            prop_assert!(label.to_lowercase().contains(&key.to_lowercase()));
        }
    }

    #[test]
    fn case_does_not_change_guidance(label in "[a-zA-Z ]{1,30}") {
        let resolver = Resolver::builtin();
        let upper = label.to_uppercase();
        let lower = label.to_lowercase();
        prop_assert_eq!(resolver.resolve(&upper), resolver.resolve(&lower));
    }

    #[test]
    fn rank_is_sorted_stable_permutation(
        cats in prop::collection::vec(category_strategy(), 0..24)
    ) {
        let resolver = Resolver::builtin();
        let guidance_for = |c: Category| {
            resolver
                .catalog()
                .entries()
                .map(|(_, _, e)| e.guidance())
                .find(|g| g.category == c)
                .cloned()
                .unwrap_or_else(|| resolver.catalog().fallback().clone())
        };
        let labels: Vec<_> = cats
            .iter()
            .enumerate()
            .map(|(i, c)| {
                recy_common::ResolvedLabel::new(
                    DetectedLabel::new(format!("label-{i}"), 0.5),
                    c.map(&guidance_for),
                )
            })
            .collect();

        let ranked = rank(&labels);
        prop_assert_eq!(ranked.len(), labels.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].priority() <= pair[1].priority());
            if pair[0].priority() == pair[1].priority() {
                let a: usize = pair[0].name()[6..].parse().unwrap();
                let b: usize = pair[1].name()[6..].parse().unwrap();
                prop_assert!(a < b, "equal priorities must keep input order");
            }
        }
    }
}

#[test]
fn every_catalog_key_resolves_to_itself_unless_shadowed() {
    let resolver = Resolver::builtin();
    let mut shadowed = Vec::new();

    for (kind, index, entry) in resolver.catalog().entries() {
        let key = entry.key();
        let resolution = resolver.explain(key);
        for casing in [key.to_uppercase(), key.to_lowercase()] {
            assert_eq!(resolver.explain(&casing), resolution, "casing changed {key:?}");
        }

        if resolution.catalog() == Some(kind) && resolution.key() == Some(key) {
            for casing in [key.to_string(), key.to_uppercase(), key.to_lowercase()] {
                let guidance = resolver.resolve(&casing).unwrap();
                assert_eq!(guidance.category, entry.category(), "{casing:?}");
            }
            continue;
        }

        // Shadowed keys lose to an earlier key that is a substring of them.
        let winner = resolution.key().unwrap();
        assert!(key.to_lowercase().contains(&winner.to_lowercase()));
        match (&resolution, kind) {
            (Resolution::SpecificItem { .. }, _) => {}
            (Resolution::MaterialClass { index: won, .. }, CatalogKind::MaterialClasses) => {
                assert!(*won < index);
            }
            other => panic!("{key:?} resolved to a later table: {other:?}"),
        }
        shadowed.push(key.to_string());
    }

    assert_eq!(
        shadowed,
        [
            "Computer Keyboard",
            "Computer Hardware",
            "Handbag",
            "Water Jug",
            "Goldfish",
            "Textile",
        ]
    );
}
