//! Known revisions of the settings file schema.

/// The `schema_version` field in the file maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsVersion {
    /// Initial schema: `[general]`, `[view]`, `[notifications]`.
    V1,
}

impl SettingsVersion {
    pub const CURRENT: SettingsVersion = SettingsVersion::V1;

    pub const fn as_u32(self) -> u32 {
        match self {
            SettingsVersion::V1 => 1,
        }
    }
}
