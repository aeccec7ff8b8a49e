use std::sync::Arc;

use tracing::debug;

use crate::state::WatchlistState;

/// Reset query, category selection and watched-only in one state
/// replacement under a single write lock, never as a toggle sequence with
/// intermediate recomputes.
pub struct ClearFiltersUseCase {
    state: Arc<WatchlistState>,
}

impl ClearFiltersUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self) {
        debug!("clearing all filter criteria");
        self.state.criteria_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ClearFiltersUseCase;
    use crate::usecases::support::two_entry_state;
    use std::sync::Arc;
    use wd_core::FilterCriteria;

    #[test]
    fn resets_all_three_fields() {
        let state = Arc::new(two_entry_state());
        {
            let mut criteria = state.criteria_mut();
            criteria.query = "x".to_string();
            criteria.toggle_category("Drama");
            criteria.toggle_category("Action");
            criteria.watched_only = true;
        }

        ClearFiltersUseCase::new(state.clone()).execute();

        assert_eq!(*state.criteria(), FilterCriteria::default());
    }
}
