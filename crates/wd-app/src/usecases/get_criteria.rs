use std::sync::Arc;

use wd_core::FilterCriteria;

use crate::state::WatchlistState;

/// Read-only criteria snapshot for the view (chip row, clear-control
/// visibility).
pub struct GetCriteriaUseCase {
    state: Arc<WatchlistState>,
}

impl GetCriteriaUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self) -> FilterCriteria {
        self.state.criteria().clone()
    }
}
