//! Application settings: model, defaults, schema version.
//!
//! The settings file is read once at bootstrap and never written back.

mod defaults;
mod error;
mod model;
mod version;

pub use error::SettingsError;
pub use model::{
    GeneralSettings, NotificationSettings, Settings, Theme, ViewSettings, CURRENT_SCHEMA_VERSION,
};
pub use version::SettingsVersion;
