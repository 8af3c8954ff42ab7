//! Search by id or name fragment.

use stockroom_core::{Catalogued, Entity};

/// Whether `query` occurs in the entity's decimal id or in its name.
///
/// Case-sensitive. The empty query matches everything.
pub fn matches_fragment<T: Catalogued>(entity: &T, query: &str) -> bool {
    Entity::id(entity).to_string().contains(query) || Catalogued::name(entity).contains(query)
}

/// Matching entities, in their original relative order.
pub fn filter_by_fragment<'a, T: Catalogued>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_fragment(*item, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{PartId, Price, StockLevels};
    use stockroom_parts::{Part, PartSource};

    fn part(id: u32, name: &str) -> Part {
        Part::new(
            PartId::new(id),
            name,
            Price::ZERO,
            StockLevels::new(1, 1, 2),
            PartSource::in_house(1),
        )
    }

    fn ids(found: &[&Part]) -> Vec<u32> {
        found.iter().map(|p| p.id().get()).collect()
    }

    #[test]
    fn id_fragment_matches_anywhere_in_the_id() {
        // "21" contains "1", so all three match.
        let parts = vec![part(1, "Keyboard"), part(10, "Mouse"), part(21, "Monitor")];
        assert_eq!(ids(&filter_by_fragment(&parts, "1")), vec![1, 10, 21]);

        let parts = vec![part(1, "a"), part(10, "b"), part(23, "c")];
        assert_eq!(ids(&filter_by_fragment(&parts, "1")), vec![1, 10]);
    }

    #[test]
    fn name_fragment_is_case_sensitive() {
        let parts = vec![part(1, "Mouse"), part(2, "Mousepad"), part(3, "mouse trap")];
        assert_eq!(ids(&filter_by_fragment(&parts, "Mouse")), vec![1, 2]);
        assert_eq!(ids(&filter_by_fragment(&parts, "mouse")), vec![3]);
    }

    #[test]
    fn id_or_name_is_enough() {
        let parts = vec![part(7, "Cable 2m"), part(2, "Fan"), part(3, "Fuse")];
        assert_eq!(ids(&filter_by_fragment(&parts, "2")), vec![7, 2]);
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let parts = vec![part(3, "c"), part(1, "a"), part(2, "b")];
        assert_eq!(ids(&filter_by_fragment(&parts, "")), vec![3, 1, 2]);
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let parts = vec![part(1, "Keyboard")];
        assert!(filter_by_fragment(&parts, "Speaker").is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: results are the entries whose decimal id or name contains the
            /// query, in their original order.
            #[test]
            fn filter_keeps_matching_entries_in_order(
                entries in proptest::collection::vec((1u32..500, "[a-c]{0,4}"), 0..30),
                query in "[a-c0-9]{0,2}",
            ) {
                let parts: Vec<Part> = entries.iter().map(|(id, name)| part(*id, name)).collect();
                let found: Vec<(u32, String)> = filter_by_fragment(&parts, &query)
                    .iter()
                    .map(|p| (p.id().get(), p.name().to_string()))
                    .collect();

                let expected: Vec<(u32, String)> = entries
                    .iter()
                    .filter(|(id, name)| {
                        format!("{id}").contains(query.as_str()) || name.contains(query.as_str())
                    })
                    .cloned()
                    .collect();
                prop_assert_eq!(found, expected);
            }

            /// Property: a name built around the query is always found.
            #[test]
            fn embedded_name_fragment_is_found(
                prefix in "[x-z]{0,3}",
                query in "[a-c]{1,3}",
                suffix in "[x-z]{0,3}",
                others in proptest::collection::vec("[x-z]{1,4}", 0..10),
            ) {
                let mut parts: Vec<Part> = others
                    .iter()
                    .enumerate()
                    .map(|(n, name)| part(1000 + n as u32, name))
                    .collect();
                parts.insert(parts.len() / 2, part(999, &format!("{prefix}{query}{suffix}")));

                let found = ids(&filter_by_fragment(&parts, &query));
                prop_assert_eq!(found, vec![999]);
            }
        }
    }
}
