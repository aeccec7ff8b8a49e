//! Shared in-memory watchlist state.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use wd_core::{CatalogStore, Entry, FilterCriteria};

/// Owned application state injected into use cases. No singletons.
///
/// One lock per aggregate. Every intent acquires what it needs inside a
/// single `execute` and completes before returning, so intents never
/// interleave.
pub struct WatchlistState {
    catalog: RwLock<CatalogStore>,
    criteria: RwLock<FilterCriteria>,
}

impl WatchlistState {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            catalog: RwLock::new(CatalogStore::new(entries)),
            criteria: RwLock::new(FilterCriteria::default()),
        }
    }

    // Lock poisoning is ignored: the state is plain data.

    pub fn catalog(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn catalog_mut(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn criteria(&self) -> RwLockReadGuard<'_, FilterCriteria> {
        self.criteria.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn criteria_mut(&self) -> RwLockWriteGuard<'_, FilterCriteria> {
        self.criteria.write().unwrap_or_else(PoisonError::into_inner)
    }
}
