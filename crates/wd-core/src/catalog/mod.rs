//! Catalog domain: entries, the store that owns them, the sample seed.

mod entry;
pub mod sample;
mod store;

pub use entry::{Entry, EpisodeProgress, MediaKind};
pub use store::{CatalogStats, CatalogStore, WatchedTransition};
