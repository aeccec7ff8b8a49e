//! Watchlist entry domain model.

use serde::{Deserialize, Serialize};

use crate::ids::EntryId;

/// Episode progress for a series.
///
/// Both counts are facts from the dataset. `watched` exceeding `total` is
/// accepted as-is; no invariant links these counts to the entry-level
/// watched flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeProgress {
    pub watched: u32,
    pub total: u32,
}

/// Whether an entry is a standalone movie or an episodic series.
///
/// Episode progress exists exactly when the entry is a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Series { episodes: EpisodeProgress },
}

impl MediaKind {
    pub fn is_series(&self) -> bool {
        matches!(self, MediaKind::Series { .. })
    }

    pub fn episodes(&self) -> Option<EpisodeProgress> {
        match self {
            MediaKind::Movie => None,
            MediaKind::Series { episodes } => Some(*episodes),
        }
    }
}

/// One trackable movie or TV show.
///
/// `watched` is the only field that changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    /// Poster image URL. Render-only; this crate never fetches it.
    pub poster: String,
    /// Free-form, case-sensitive category labels, in dataset order.
    pub categories: Vec<String>,
    pub year: u16,
    pub rating: f64,
    pub kind: MediaKind,
    pub watched: bool,
}
