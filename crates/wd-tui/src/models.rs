//! View models exposed to the rendering code.
//!
//! These separate the domain models from what a card actually shows.

use wd_core::{Entry, MediaKind};

/// Card projection of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryCard {
    /// Entry id, forwarded with toggle intents
    pub id: String,
    pub title: String,
    pub year: u16,
    /// Rating formatted to one decimal, e.g. "8.7"
    pub rating: String,
    /// Kind badge, "Movie" or "TV"
    pub badge: &'static str,
    /// Category chips, truncated to the configured limit
    pub chips: Vec<String>,
    pub watched: bool,
    /// Progress label for series, e.g. "25/42 episodes"
    pub episodes: Option<String>,
}

impl EntryCard {
    pub fn project(entry: &Entry, chip_limit: usize) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            year: entry.year,
            rating: format!("{:.1}", entry.rating),
            badge: match entry.kind {
                MediaKind::Movie => "Movie",
                MediaKind::Series { .. } => "TV",
            },
            chips: entry.categories.iter().take(chip_limit).cloned().collect(),
            watched: entry.watched,
            episodes: entry
                .kind
                .episodes()
                .map(|p| format!("{}/{} episodes", p.watched, p.total)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::{EntryId, EpisodeProgress};

    fn series() -> Entry {
        Entry {
            id: EntryId::from("2"),
            title: "Stranger Things".to_string(),
            poster: String::new(),
            categories: vec!["Drama".into(), "Fantasy".into(), "Horror".into()],
            year: 2016,
            rating: 8.7,
            kind: MediaKind::Series {
                episodes: EpisodeProgress {
                    watched: 25,
                    total: 42,
                },
            },
            watched: false,
        }
    }

    #[test]
    fn chips_are_truncated_to_the_limit() {
        let card = EntryCard::project(&series(), 2);
        assert_eq!(card.chips, vec!["Drama", "Fantasy"]);
    }

    #[test]
    fn series_cards_carry_the_episodes_label() {
        let card = EntryCard::project(&series(), 2);
        assert_eq!(card.badge, "TV");
        assert_eq!(card.episodes.as_deref(), Some("25/42 episodes"));
        assert_eq!(card.rating, "8.7");
    }

    #[test]
    fn movie_cards_have_no_episodes_label() {
        let mut entry = series();
        entry.kind = MediaKind::Movie;

        let card = EntryCard::project(&entry, 2);

        assert_eq!(card.badge, "Movie");
        assert_eq!(card.episodes, None);
    }
}
