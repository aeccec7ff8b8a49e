//! Watchdeck application orchestration layer.
//!
//! One use case per user intent; the shared watchlist state and the
//! dependency grouping live here.

pub mod deps;
pub mod state;
pub mod usecases;

pub use deps::AppDeps;
pub use state::WatchlistState;
pub use usecases::UseCases;
