use std::sync::Arc;

use tracing::debug;
use wd_core::ids::EntryId;
use wd_core::ports::{ClockPort, Notification, NotificationPort};

use crate::state::WatchlistState;

/// Flip the watched flag of one entry and tell the user what happened.
///
/// The notification describes the state after the flip, composed from the
/// transition the store returns inside the same mutation scope. An unknown
/// id is a silent no-op: no notification, `false` returned.
pub struct ToggleWatchedUseCase {
    state: Arc<WatchlistState>,
    notifications: Arc<dyn NotificationPort>,
    clock: Arc<dyn ClockPort>,
}

impl ToggleWatchedUseCase {
    pub fn new(
        state: Arc<WatchlistState>,
        notifications: Arc<dyn NotificationPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            state,
            notifications,
            clock,
        }
    }

    pub fn execute(&self, entry_id: &EntryId) -> bool {
        let transition = self.state.catalog_mut().toggle_watched(entry_id);

        let Some(transition) = transition else {
            return false;
        };

        debug!(entry_id = %entry_id, watched = transition.watched, "toggled watched flag");

        let (title, description) = if transition.watched {
            (
                "Added to watched",
                format!("{} marked as watched", transition.title),
            )
        } else {
            (
                "Removed from watched",
                format!("{} unmarked as watched", transition.title),
            )
        };
        self.notifications.notify(Notification {
            title: title.to_string(),
            description,
            emitted_at_ms: self.clock.now_ms(),
        });

        true
    }
}

#[cfg(test)]
mod tests {
    use super::ToggleWatchedUseCase;
    use crate::usecases::support::{two_entry_state, MockClock, MockNotifications};
    use std::sync::Arc;
    use wd_core::ids::EntryId;

    #[test]
    fn toggling_an_unwatched_entry_notifies_added() {
        let state = Arc::new(two_entry_state());
        let notifications = Arc::new(MockNotifications::default());
        let uc = ToggleWatchedUseCase::new(
            state.clone(),
            notifications.clone(),
            Arc::new(MockClock { now_ms: 1234 }),
        );

        assert!(uc.execute(&EntryId::from("2")));

        assert!(state.catalog().entries()[1].watched);
        let sent = notifications.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Added to watched");
        assert_eq!(sent[0].description, "Stranger Things marked as watched");
        assert_eq!(sent[0].emitted_at_ms, 1234);
    }

    #[test]
    fn toggling_a_watched_entry_notifies_removed() {
        let state = Arc::new(two_entry_state());
        let notifications = Arc::new(MockNotifications::default());
        let uc = ToggleWatchedUseCase::new(
            state.clone(),
            notifications.clone(),
            Arc::new(MockClock { now_ms: 1234 }),
        );

        assert!(uc.execute(&EntryId::from("1")));

        assert!(!state.catalog().entries()[0].watched);
        let sent = notifications.sent();
        assert_eq!(sent[0].title, "Removed from watched");
        assert_eq!(sent[0].description, "The Dark Knight unmarked as watched");
    }

    #[test]
    fn unknown_id_is_silent_and_leaves_the_catalog_alone() {
        let state = Arc::new(two_entry_state());
        let before = state.catalog().entries().to_vec();
        let notifications = Arc::new(MockNotifications::default());
        let uc = ToggleWatchedUseCase::new(
            state.clone(),
            notifications.clone(),
            Arc::new(MockClock { now_ms: 1234 }),
        );

        assert!(!uc.execute(&EntryId::from("missing")));

        assert_eq!(state.catalog().entries(), before.as_slice());
        assert!(notifications.sent().is_empty());
    }
}
