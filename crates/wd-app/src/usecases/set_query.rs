use std::sync::Arc;

use crate::state::WatchlistState;

/// Replace the search query. Case is preserved; matching is the filter
/// engine's concern.
pub struct SetQueryUseCase {
    state: Arc<WatchlistState>,
}

impl SetQueryUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self, query: &str) {
        self.state.criteria_mut().query = query.to_string();
    }
}
