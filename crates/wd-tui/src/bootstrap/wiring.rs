//! Dependency injection.
//!
//! The only place that sees wd-core, wd-app and the adapters at the same
//! time. Assembly only; no decisions.

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use wd_app::{AppDeps, UseCases, WatchlistState};
use wd_core::catalog::sample::seed_entries;
use wd_core::ports::Notification;

use crate::adapters::{SystemClock, ToastNotifier};

/// Seed the catalog, wire the ports, hand back the use-case accessor and
/// the channel the toasts arrive on.
pub fn build_usecases() -> (UseCases, Receiver<Notification>) {
    let (notifier, toast_rx) = ToastNotifier::channel();
    let state = Arc::new(WatchlistState::new(seed_entries()));
    let deps = AppDeps {
        notifications: Arc::new(notifier),
        clock: Arc::new(SystemClock),
    };
    (UseCases::new(state, deps), toast_rx)
}
