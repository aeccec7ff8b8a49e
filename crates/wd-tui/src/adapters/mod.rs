//! Shell-side implementations of the core ports.

mod clock;
mod toast;

pub use clock::SystemClock;
pub use toast::ToastNotifier;
