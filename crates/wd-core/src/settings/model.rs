use serde::{Deserialize, Serialize};

use super::error::SettingsError;
use super::version::SettingsVersion;

pub const CURRENT_SCHEMA_VERSION: u32 = SettingsVersion::CURRENT.as_u32();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralSettings {
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    /// How many category chips a card shows.
    pub category_chips: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// How long one toast stays on screen.
    pub toast_duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub view: ViewSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Pure data parsing: accept whatever the file says, defaults only for
    /// missing sections. No validation, no business rules.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.schema_version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [general]
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(settings.general.theme, Theme::Dark);
        assert_eq!(settings.view.category_chips, 2);
        assert_eq!(settings.notifications.toast_duration_ms, 3500);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = Settings::from_toml_str("view = not toml").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn unknown_theme_is_rejected() {
        let result = Settings::from_toml_str(
            r#"
            [general]
            theme = "sepia"
            "#,
        );
        assert!(result.is_err());
    }
}
