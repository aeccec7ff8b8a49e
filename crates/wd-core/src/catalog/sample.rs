//! Fixed sample dataset seeded at process start.
//!
//! In a real deployment this would come from a database.

use crate::ids::EntryId;

use super::entry::{Entry, EpisodeProgress, MediaKind};

pub fn seed_entries() -> Vec<Entry> {
    vec![
        Entry {
            id: EntryId::from("1"),
            title: "The Dark Knight".to_string(),
            poster: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=300&h=450&fit=crop".to_string(),
            categories: vec!["Action".into(), "Crime".into(), "Drama".into()],
            year: 2008,
            rating: 9.0,
            kind: MediaKind::Movie,
            watched: true,
        },
        Entry {
            id: EntryId::from("2"),
            title: "Stranger Things".to_string(),
            poster: "https://images.unsplash.com/photo-1489599004927-87bf3f8329d5?w=300&h=450&fit=crop".to_string(),
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
        },
        Entry {
            id: EntryId::from("3"),
            title: "Inception".to_string(),
            poster: "https://images.unsplash.com/photo-1440404653325-ab127d49abc1?w=300&h=450&fit=crop".to_string(),
            categories: vec!["Action".into(), "Sci-Fi".into(), "Thriller".into()],
            year: 2010,
            rating: 8.8,
            kind: MediaKind::Movie,
            watched: true,
        },
        Entry {
            id: EntryId::from("4"),
            title: "Breaking Bad".to_string(),
            poster: "https://images.unsplash.com/photo-1489599004927-87bf3f8329d5?w=300&h=450&fit=crop".to_string(),
            categories: vec!["Crime".into(), "Drama".into(), "Thriller".into()],
            year: 2008,
            rating: 9.5,
            kind: MediaKind::Series {
                episodes: EpisodeProgress {
                    watched: 62,
                    total: 62,
                },
            },
            watched: true,
        },
        Entry {
            id: EntryId::from("5"),
            title: "The Matrix".to_string(),
            poster: "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=300&h=450&fit=crop".to_string(),
            categories: vec!["Action".into(), "Sci-Fi".into()],
            year: 1999,
            rating: 8.7,
            kind: MediaKind::Movie,
            watched: false,
        },
        Entry {
            id: EntryId::from("6"),
            title: "Game of Thrones".to_string(),
            poster: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=300&h=450&fit=crop".to_string(),
            categories: vec!["Adventure".into(), "Drama".into(), "Fantasy".into()],
            year: 2011,
            rating: 9.2,
            kind: MediaKind::Series {
                episodes: EpisodeProgress {
                    watched: 15,
                    total: 73,
                },
            },
            watched: false,
        },
    ]
}
