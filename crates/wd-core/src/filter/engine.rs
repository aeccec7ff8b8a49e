//! Pure derivation over the catalog.
//!
//! No side effects, no caching: callers recompute after every relevant
//! state change. Linear scans over a small fixed entry count.

use std::collections::BTreeSet;

use crate::catalog::Entry;

use super::criteria::FilterCriteria;

/// Every category label across every entry, deduplicated and sorted
/// ascending. Labels compare case-sensitively; the output is independent
/// of entry order.
pub fn available_categories(entries: &[Entry]) -> Vec<String> {
    let mut labels = BTreeSet::new();
    for entry in entries {
        for category in &entry.categories {
            labels.insert(category.clone());
        }
    }
    labels.into_iter().collect()
}

/// The subset of entries matching all criteria, preserving store order.
///
/// An entry is visible iff the query matches its title (case-insensitive
/// substring, empty query matches all), it carries at least one selected
/// category (empty selection matches all), and it is watched when
/// `watched_only` is set. Zero matches yields an empty, well-formed list.
pub fn visible_entries<'a>(entries: &'a [Entry], criteria: &FilterCriteria) -> Vec<&'a Entry> {
    let query = criteria.query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            let matches_query = query.is_empty() || entry.title.to_lowercase().contains(&query);
            let matches_categories = criteria.selected_categories.is_empty()
                || criteria
                    .selected_categories
                    .iter()
                    .any(|label| entry.categories.iter().any(|c| c == label));
            let matches_watched = !criteria.watched_only || entry.watched;

            matches_query && matches_categories && matches_watched
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MediaKind;
    use crate::ids::EntryId;

    fn entry(id: &str, title: &str, categories: &[&str], watched: bool) -> Entry {
        Entry {
            id: EntryId::from(id),
            title: title.to_string(),
            poster: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            year: 2008,
            rating: 9.0,
            kind: MediaKind::Movie,
            watched,
        }
    }

    fn two_entries() -> Vec<Entry> {
        vec![
            entry("1", "The Dark Knight", &["Action", "Crime", "Drama"], true),
            entry("2", "Stranger Things", &["Drama", "Fantasy", "Horror"], false),
        ]
    }

    #[test]
    fn default_criteria_is_identity() {
        let entries = two_entries();
        let visible = visible_entries(&entries, &FilterCriteria::default());

        let ids: Vec<&str> = visible.iter().map(|e| e.id.as_ref()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn query_matches_case_insensitively() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            query: "stranger".to_string(),
            ..Default::default()
        };

        let visible = visible_entries(&entries, &criteria);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_ref(), "2");
    }

    #[test]
    fn any_selected_category_suffices() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            selected_categories: vec!["Drama".to_string()],
            ..Default::default()
        };

        // Both entries carry "Drama".
        assert_eq!(visible_entries(&entries, &criteria).len(), 2);
    }

    #[test]
    fn selection_is_or_across_labels_not_and() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            selected_categories: vec!["Action".to_string(), "Horror".to_string()],
            ..Default::default()
        };

        // Neither entry carries both labels, yet both match one each.
        assert_eq!(visible_entries(&entries, &criteria).len(), 2);
    }

    #[test]
    fn watched_only_keeps_watched_entries() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            watched_only: true,
            ..Default::default()
        };

        let visible = visible_entries(&entries, &criteria);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_ref(), "1");
    }

    #[test]
    fn category_labels_compare_case_sensitively() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            selected_categories: vec!["drama".to_string()],
            ..Default::default()
        };

        assert!(visible_entries(&entries, &criteria).is_empty());
    }

    #[test]
    fn zero_matches_is_an_empty_list_not_an_error() {
        let entries = two_entries();
        let criteria = FilterCriteria {
            query: "zzz".to_string(),
            ..Default::default()
        };

        assert!(visible_entries(&entries, &criteria).is_empty());
    }

    #[test]
    fn result_preserves_store_order() {
        let entries = vec![
            entry("1", "B", &["X"], true),
            entry("2", "A", &["X"], true),
            entry("3", "C", &["X"], true),
        ];
        let criteria = FilterCriteria {
            selected_categories: vec!["X".to_string()],
            ..Default::default()
        };

        let ids: Vec<&str> = visible_entries(&entries, &criteria)
            .iter()
            .map(|e| e.id.as_ref())
            .collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn categories_are_sorted_and_deduplicated() {
        let entries = two_entries();

        let categories = available_categories(&entries);

        assert_eq!(
            categories,
            vec!["Action", "Crime", "Drama", "Fantasy", "Horror"]
        );
    }

    #[test]
    fn categories_are_insertion_order_independent() {
        let mut entries = two_entries();
        let forward = available_categories(&entries);
        entries.reverse();
        let backward = available_categories(&entries);

        assert_eq!(forward, backward);
    }
}
