use std::sync::Arc;

use wd_core::filter::visible_entries;
use wd_core::Entry;

use crate::state::WatchlistState;

/// Snapshot of the entries matching the current criteria, in store order.
pub struct ListVisibleEntriesUseCase {
    state: Arc<WatchlistState>,
}

impl ListVisibleEntriesUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self) -> Vec<Entry> {
        let catalog = self.state.catalog();
        let criteria = self.state.criteria();
        visible_entries(catalog.entries(), &criteria)
            .into_iter()
            .cloned()
            .collect()
    }
}
