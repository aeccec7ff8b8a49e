use super::model::*;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        // The card contract shows the first two category chips.
        Self { category_chips: 2 }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3500,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            view: ViewSettings::default(),
            notifications: NotificationSettings::default(),
        }
    }
}
