//! Process bootstrap: settings, logging, wiring, the event loop.

pub mod config;
pub mod logging;
pub mod run;
pub mod wiring;

pub use run::run;
