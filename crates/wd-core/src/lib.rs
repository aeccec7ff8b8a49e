//! # wd-core
//!
//! Core domain models and business logic for Watchdeck.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod catalog;
pub mod filter;
pub mod ids;
pub mod ports;
pub mod settings;

// Re-export commonly used types at the crate root
pub use catalog::{CatalogStats, CatalogStore, Entry, EpisodeProgress, MediaKind, WatchedTransition};
pub use filter::FilterCriteria;
pub use ids::EntryId;
