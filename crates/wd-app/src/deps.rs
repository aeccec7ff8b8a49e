//! Application dependency grouping.
//!
//! This is NOT a Builder pattern:
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use wd_core::ports::{ClockPort, NotificationPort};

/// Dependency grouping for use-case construction. All fields are required.
pub struct AppDeps {
    pub notifications: Arc<dyn NotificationPort>,
    pub clock: Arc<dyn ClockPort>,
}
