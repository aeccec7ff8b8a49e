//! Notification sink adapter feeding the event loop.

use std::sync::mpsc::{self, Receiver, Sender};

use wd_core::ports::{Notification, NotificationPort};

/// Fire-and-forget sink handing notifications to the event loop over a
/// channel, where they become auto-expiring toasts.
pub struct ToastNotifier {
    tx: Sender<Notification>,
}

impl ToastNotifier {
    pub fn channel() -> (Self, Receiver<Notification>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl NotificationPort for ToastNotifier {
    fn notify(&self, notification: Notification) {
        // Never blocks; sending fails only while the UI is shutting down,
        // and then the notification is simply dropped.
        let _ = self.tx.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_in_order() {
        let (notifier, rx) = ToastNotifier::channel();

        notifier.notify(Notification {
            title: "first".to_string(),
            description: String::new(),
            emitted_at_ms: 1,
        });
        notifier.notify(Notification {
            title: "second".to_string(),
            description: String::new(),
            emitted_at_ms: 2,
        });

        assert_eq!(rx.recv().unwrap().title, "first");
        assert_eq!(rx.recv().unwrap().title, "second");
    }

    #[test]
    fn notify_survives_a_dropped_receiver() {
        let (notifier, rx) = ToastNotifier::channel();
        drop(rx);

        // Must not panic or block.
        notifier.notify(Notification {
            title: "late".to_string(),
            description: String::new(),
            emitted_at_ms: 3,
        });
    }
}
