use std::sync::Arc;

use wd_core::filter::available_categories;

use crate::state::WatchlistState;

/// Sorted distinct category labels across the whole catalog.
pub struct ListCategoriesUseCase {
    state: Arc<WatchlistState>,
}

impl ListCategoriesUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self) -> Vec<String> {
        available_categories(self.state.catalog().entries())
    }
}
