//! Port traits implemented by the shell.
//!
//! Every port here is synchronous: the whole engine is single-threaded and
//! intent-driven, with no suspension points.

mod clock;
mod notification;

pub use clock::ClockPort;
pub use notification::{Notification, NotificationPort};
