//! Business logic use cases.
//!
//! One file per user intent. Each use case is a struct over the shared
//! state and the ports it needs, with a synchronous `execute` that runs
//! the whole intent to completion before returning.

pub mod clear_filters;
pub mod get_criteria;
pub mod get_stats;
pub mod list_categories;
pub mod list_visible_entries;
pub mod request_add_entry;
pub mod set_query;
pub mod set_watched_only;
pub mod toggle_category;
pub mod toggle_watched;

pub use clear_filters::ClearFiltersUseCase;
pub use get_criteria::GetCriteriaUseCase;
pub use get_stats::GetStatsUseCase;
pub use list_categories::ListCategoriesUseCase;
pub use list_visible_entries::ListVisibleEntriesUseCase;
pub use request_add_entry::RequestAddEntryUseCase;
pub use set_query::SetQueryUseCase;
pub use set_watched_only::SetWatchedOnlyUseCase;
pub use toggle_category::ToggleCategoryUseCase;
pub use toggle_watched::ToggleWatchedUseCase;

use std::sync::Arc;

use crate::deps::AppDeps;
use crate::state::WatchlistState;

/// Wires the shared state and ports into use cases for the shell.
///
/// Assembly only; every decision lives in the use cases themselves.
pub struct UseCases {
    state: Arc<WatchlistState>,
    deps: AppDeps,
}

impl UseCases {
    pub fn new(state: Arc<WatchlistState>, deps: AppDeps) -> Self {
        Self { state, deps }
    }

    pub fn toggle_watched(&self) -> ToggleWatchedUseCase {
        ToggleWatchedUseCase::new(
            self.state.clone(),
            self.deps.notifications.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn list_visible_entries(&self) -> ListVisibleEntriesUseCase {
        ListVisibleEntriesUseCase::new(self.state.clone())
    }

    pub fn list_categories(&self) -> ListCategoriesUseCase {
        ListCategoriesUseCase::new(self.state.clone())
    }

    pub fn set_query(&self) -> SetQueryUseCase {
        SetQueryUseCase::new(self.state.clone())
    }

    pub fn toggle_category(&self) -> ToggleCategoryUseCase {
        ToggleCategoryUseCase::new(self.state.clone())
    }

    pub fn set_watched_only(&self) -> SetWatchedOnlyUseCase {
        SetWatchedOnlyUseCase::new(self.state.clone())
    }

    pub fn clear_filters(&self) -> ClearFiltersUseCase {
        ClearFiltersUseCase::new(self.state.clone())
    }

    pub fn get_stats(&self) -> GetStatsUseCase {
        GetStatsUseCase::new(self.state.clone())
    }

    pub fn request_add_entry(&self) -> RequestAddEntryUseCase {
        RequestAddEntryUseCase::new(self.deps.notifications.clone(), self.deps.clock.clone())
    }

    pub fn get_criteria(&self) -> GetCriteriaUseCase {
        GetCriteriaUseCase::new(self.state.clone())
    }
}
