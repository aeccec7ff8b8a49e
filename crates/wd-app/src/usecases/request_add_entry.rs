use std::sync::Arc;

use tracing::info;
use wd_core::ports::{ClockPort, Notification, NotificationPort};

/// The "Add New" affordance. Deliberately a stub: it emits the coming-soon
/// notification and mutates nothing.
pub struct RequestAddEntryUseCase {
    notifications: Arc<dyn NotificationPort>,
    clock: Arc<dyn ClockPort>,
}

impl RequestAddEntryUseCase {
    pub fn new(notifications: Arc<dyn NotificationPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            notifications,
            clock,
        }
    }

    pub fn execute(&self) {
        info!("add-entry requested, feature not available yet");
        self.notifications.notify(Notification {
            title: "Feature coming soon!".to_string(),
            description: "Add new movies and TV shows functionality will be available soon."
                .to_string(),
            emitted_at_ms: self.clock.now_ms(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::RequestAddEntryUseCase;
    use crate::usecases::support::{MockClock, MockNotifications};
    use std::sync::Arc;

    #[test]
    fn emits_exactly_the_coming_soon_pair() {
        let notifications = Arc::new(MockNotifications::default());
        let uc = RequestAddEntryUseCase::new(
            notifications.clone(),
            Arc::new(MockClock { now_ms: 99 }),
        );

        uc.execute();

        let sent = notifications.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Feature coming soon!");
        assert_eq!(
            sent[0].description,
            "Add new movies and TV shows functionality will be available soon."
        );
        assert_eq!(sent[0].emitted_at_ms, 99);
    }
}
