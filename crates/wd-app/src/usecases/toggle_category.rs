use std::sync::Arc;

use crate::state::WatchlistState;

/// Toggle one category label in the selection.
pub struct ToggleCategoryUseCase {
    state: Arc<WatchlistState>,
}

impl ToggleCategoryUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self, label: &str) {
        self.state.criteria_mut().toggle_category(label);
    }
}
