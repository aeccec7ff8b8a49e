//! Transient filter criteria.

use serde::{Deserialize, Serialize};

/// The (query, selected categories, watched-only) tuple driving visibility.
///
/// Defaults mean "no restriction". Criteria are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against entry titles.
    pub query: String,
    /// Each label present at most once; empty means no restriction.
    pub selected_categories: Vec<String>,
    pub watched_only: bool,
}

impl FilterCriteria {
    /// Removes the label when selected, appends it otherwise.
    pub fn toggle_category(&mut self, label: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == label) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(label.to_string());
        }
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected_categories.iter().any(|c| c == label)
    }

    /// Atomic reset of all three fields, never a toggle sequence.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any criterion restricts the visible set.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.selected_categories.is_empty() || self.watched_only
    }
}
