//! The catalog store owns the canonical ordered sequence of entries.

use crate::ids::EntryId;

use super::entry::{Entry, MediaKind};

/// Outcome of a successful watched toggle.
///
/// Captured in the same mutation scope as the flip, so `watched` is the
/// state after the toggle with no stale read in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedTransition {
    pub title: String,
    /// The watched state after the flip.
    pub watched: bool,
}

/// Derived counts over the full entry set, not the visible subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub watched: usize,
    pub movies: usize,
    pub series: usize,
}

/// Ordered, in-memory entry store. Entries are seeded once; the only
/// mutation is flipping the watched flag.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    entries: Vec<Entry>,
}

impl CatalogStore {
    /// Entry ids must be unique across the set; checked once here.
    pub fn new(entries: Vec<Entry>) -> Self {
        debug_assert!(
            has_unique_ids(&entries),
            "duplicate entry id in catalog seed"
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Flips the watched flag of the entry with the given id.
    ///
    /// Returns the transition when the entry exists. An unknown id is a
    /// silent no-op: no error, no change, `None` returned.
    pub fn toggle_watched(&mut self, id: &EntryId) -> Option<WatchedTransition> {
        let Some(entry) = self.entries.iter_mut().find(|e| &e.id == id) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(entry_id = %id, "toggle_watched on unknown entry id, ignoring");
            return None;
        };

        entry.watched = !entry.watched;
        Some(WatchedTransition {
            title: entry.title.clone(),
            watched: entry.watched,
        })
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for entry in &self.entries {
            if entry.watched {
                stats.watched += 1;
            }
            match entry.kind {
                MediaKind::Movie => stats.movies += 1,
                MediaKind::Series { .. } => stats.series += 1,
            }
        }
        stats
    }
}

fn has_unique_ids(entries: &[Entry]) -> bool {
    let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_ref()).collect();
    ids.sort_unstable();
    ids.windows(2).all(|pair| pair[0] != pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> CatalogStore {
        CatalogStore::new(vec![
            Entry {
                id: EntryId::from("1"),
                title: "The Dark Knight".to_string(),
                poster: String::new(),
                categories: vec!["Action".into(), "Crime".into(), "Drama".into()],
                year: 2008,
                rating: 9.0,
                kind: MediaKind::Movie,
                watched: true,
            },
            Entry {
                id: EntryId::from("2"),
                title: "Stranger Things".to_string(),
                poster: String::new(),
                categories: vec!["Drama".into(), "Fantasy".into(), "Horror".into()],
                year: 2016,
                rating: 8.7,
                kind: MediaKind::Series {
                    episodes: crate::catalog::EpisodeProgress {
                        watched: 25,
                        total: 42,
                    },
                },
                watched: false,
            },
        ])
    }

    #[test]
    fn toggle_flips_exactly_one_entry() {
        let mut store = fixture();
        let before = store.entries().to_vec();

        let transition = store.toggle_watched(&EntryId::from("2")).unwrap();

        assert_eq!(transition.title, "Stranger Things");
        assert!(transition.watched);
        assert!(store.entries()[1].watched);
        // Every other field and every other entry is untouched.
        assert_eq!(store.entries()[0], before[0]);
        assert_eq!(store.entries()[1].categories, before[1].categories);
        assert_eq!(store.entries()[1].kind, before[1].kind);
    }

    #[test]
    fn toggle_reports_state_after_flip() {
        let mut store = fixture();

        let on = store.toggle_watched(&EntryId::from("2")).unwrap();
        assert!(on.watched);

        let off = store.toggle_watched(&EntryId::from("2")).unwrap();
        assert!(!off.watched);
    }

    #[test]
    fn toggle_unknown_id_is_a_silent_noop() {
        let mut store = fixture();
        let before = store.entries().to_vec();

        assert_eq!(store.toggle_watched(&EntryId::from("missing")), None);
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn stats_count_over_the_full_set() {
        let store = fixture();
        let stats = store.stats();

        assert_eq!(stats.watched, 1);
        assert_eq!(stats.movies, 1);
        assert_eq!(stats.series, 1);
    }
}
