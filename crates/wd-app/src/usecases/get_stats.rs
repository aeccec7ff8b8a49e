use std::sync::Arc;

use wd_core::CatalogStats;

use crate::state::WatchlistState;

/// Derived counts for the header cards, over the full catalog.
pub struct GetStatsUseCase {
    state: Arc<WatchlistState>,
}

impl GetStatsUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self) -> CatalogStats {
        self.state.catalog().stats()
    }
}

#[cfg(test)]
mod tests {
    use super::GetStatsUseCase;
    use crate::usecases::support::two_entry_state;
    use std::sync::Arc;

    #[test]
    fn counts_the_full_catalog_not_the_visible_subset() {
        let state = Arc::new(two_entry_state());
        state.criteria_mut().query = "stranger".to_string();

        let stats = GetStatsUseCase::new(state).execute();

        assert_eq!(stats.watched, 1);
        assert_eq!(stats.movies, 1);
        assert_eq!(stats.series, 1);
    }
}
