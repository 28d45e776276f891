//! Search matching for roster entries.
//!
//! [`apply_filter`] maps a query and the item store to the matching subset.
//! It is a pure function: the store is never touched, the result is a fresh
//! collection, and matches keep their store order.
//!
//! Whether a query is applied at all is the controller's decision. An empty
//! query passed here matches every entry.

use crate::roster::{Item, ItemCollection, ItemStore};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};

/// How a query is compared with an entry's display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Skim-style fuzzy matching: query characters must appear in order.
    Fuzzy,
}

/// Returns the indices of entries whose display text matches `query`.
///
/// # Examples
///
/// ```
/// use roster_pager::filter::{apply_filter, MatchMode};
/// use roster_pager::roster::{ItemStore, Student};
///
/// let store = ItemStore::new(vec![
///     Student::new("Ana Smith", "ana@example.com", "Joined 01/01/20"),
///     Student::new("Bo Li", "bo@example.com", "Joined 02/01/20"),
/// ]);
///
/// assert_eq!(apply_filter("ana", &store, MatchMode::Substring), vec![0]);
/// assert_eq!(apply_filter("SMITH", &store, MatchMode::Substring), vec![0]);
/// assert!(apply_filter("zzz", &store, MatchMode::Substring).is_empty());
/// ```
pub fn apply_filter<I: Item>(query: &str, items: &ItemStore<I>, mode: MatchMode) -> ItemCollection {
    let matched: ItemCollection = match mode {
        MatchMode::Substring => {
            let needle = query.to_lowercase();
            items
                .iter()
                .filter(|(_, item)| item.display_text().to_lowercase().contains(&needle))
                .map(|(index, _)| index)
                .collect()
        }
        MatchMode::Fuzzy => {
            if query.is_empty() {
                return items.all();
            }
            let matcher = SkimMatcherV2::default().ignore_case();
            items
                .iter()
                .filter(|(_, item)| matcher.fuzzy_match(&item.display_text(), query).is_some())
                .map(|(index, _)| index)
                .collect()
        }
    };

    tracing::trace!(
        query_len = query.len(),
        ?mode,
        matched = matched.len(),
        "filter applied"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Student;
    use proptest::prelude::*;

    fn roster() -> ItemStore<Student> {
        ItemStore::new(vec![
            Student::new("Ana Smith", "ana.smith@example.com", "Joined 07/15/15"),
            Student::new("Brandon Ana", "brandon@example.com", "Joined 05/01/16"),
            Student::new("Chloe Park", "chloe@example.com", "Joined 11/20/14"),
            Student::new("Dmitri Anatoly", "dmitri@example.com", "Joined 03/03/13"),
        ])
    }

    #[test]
    fn test_case_insensitive_substring() {
        let r = roster();
        assert_eq!(apply_filter("ana", &r, MatchMode::Substring), vec![0, 1, 3]);
        assert_eq!(apply_filter("ANA", &r, MatchMode::Substring), vec![0, 1, 3]);
    }

    #[test]
    fn test_matches_any_visible_line() {
        let r = roster();
        assert_eq!(apply_filter("chloe@", &r, MatchMode::Substring), vec![2]);
        assert_eq!(apply_filter("11/20", &r, MatchMode::Substring), vec![2]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let r = roster();
        assert_eq!(apply_filter("", &r, MatchMode::Substring), r.all());
        assert_eq!(apply_filter("", &r, MatchMode::Fuzzy), r.all());
    }

    #[test]
    fn test_no_match() {
        assert!(apply_filter("zzz", &roster(), MatchMode::Substring).is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        // The trailing space is part of the needle.
        assert_eq!(apply_filter("ana ", &roster(), MatchMode::Substring), vec![0]);
        assert_eq!(apply_filter("a s", &roster(), MatchMode::Substring), vec![0]);
    }

    #[test]
    fn test_fuzzy_keeps_store_order() {
        let r = roster();
        let matched = apply_filter("cpk", &r, MatchMode::Fuzzy);
        assert_eq!(matched, vec![2]);
        let many = apply_filter("an", &r, MatchMode::Fuzzy);
        let mut sorted = many.clone();
        sorted.sort_unstable();
        assert_eq!(many, sorted);
    }

    #[test]
    fn test_store_is_untouched() {
        let r = roster();
        let before = r.visible_indices();
        let _ = apply_filter("chloe", &r, MatchMode::Substring);
        assert_eq!(r.visible_indices(), before);
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(query in "[a-zA-Z ]{0,4}") {
            let r = roster();
            let first = apply_filter(&query, &r, MatchMode::Substring);
            let second = apply_filter(&query, &r, MatchMode::Substring);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_result_is_ordered_subset(query in "[a-z]{0,3}") {
            let r = roster();
            let matched = apply_filter(&query, &r, MatchMode::Substring);
            prop_assert!(matched.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(matched.iter().all(|&i| i < r.len()));
        }

        #[test]
        fn prop_case_does_not_matter(query in "[a-zA-Z]{1,3}") {
            let r = roster();
            prop_assert_eq!(
                apply_filter(&query.to_lowercase(), &r, MatchMode::Substring),
                apply_filter(&query.to_uppercase(), &r, MatchMode::Substring)
            );
        }
    }
}
