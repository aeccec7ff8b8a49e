//! Settings file loading.
//!
//! Pure data loading: read the TOML file, parse into [`Settings`]. No
//! validation, no default-filling beyond serde's, no business rules.

use std::path::{Path, PathBuf};

use wd_core::settings::{Settings, SettingsError};

/// Platform config location, e.g. `~/.config/watchdeck/settings.toml` on
/// Linux. `None` when the platform exposes no config dir.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("watchdeck").join("settings.toml"))
}

/// A missing file yields defaults. An unreadable or malformed file is an
/// error; the caller decides what to do with it.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    Settings::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_core::settings::Theme;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_contents_are_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
            [general]
            theme = "light"

            [view]
            category_chips = 3
            "#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.general.theme, Theme::Light);
        assert_eq!(settings.view.category_chips, 3);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "theme = ").unwrap();

        assert!(matches!(
            load_settings(&path),
            Err(SettingsError::Parse(_))
        ));
    }
}
