//! Terminal adapter layer for Watchdeck.
//!
//! Owns everything that touches the terminal: bootstrap, adapters for the
//! core ports, view models, input handling and rendering. The domain and
//! application crates stay free of ratatui types.

pub mod adapters;
pub mod app;
pub mod bootstrap;
pub mod input;
pub mod models;
pub mod theme;
pub mod view;
