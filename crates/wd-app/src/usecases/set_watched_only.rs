use std::sync::Arc;

use crate::state::WatchlistState;

/// Set the watched-only restriction.
pub struct SetWatchedOnlyUseCase {
    state: Arc<WatchlistState>,
}

impl SetWatchedOnlyUseCase {
    pub fn new(state: Arc<WatchlistState>) -> Self {
        Self { state }
    }

    pub fn execute(&self, watched_only: bool) {
        self.state.criteria_mut().watched_only = watched_only;
    }
}

#[cfg(test)]
mod tests {
    use super::SetWatchedOnlyUseCase;
    use crate::usecases::support::two_entry_state;
    use std::sync::Arc;

    #[test]
    fn sets_the_flag() {
        let state = Arc::new(two_entry_state());
        let uc = SetWatchedOnlyUseCase::new(state.clone());

        uc.execute(true);
        assert!(state.criteria().watched_only);

        uc.execute(false);
        assert!(!state.criteria().watched_only);
    }
}
