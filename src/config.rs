//! Storage and export settings.

use serde::{Deserialize, Serialize};

/// Key under which the trip collection blob is stored.
pub const DEFAULT_STORAGE_KEY: &str = "vimc_car_trips";
/// File name prefix for exported spreadsheets.
pub const DEFAULT_EXPORT_PREFIX: &str = "Dang_Ky_Xe_VIMC";
/// Sheet title for exported spreadsheets.
pub const DEFAULT_SHEET_NAME: &str = "Lịch công tác";

/// Failure to load a [`TripLogConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Not valid TOML, or a field has the wrong type.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    /// A required field is blank.
    #[error("config field `{0}` must not be empty")]
    Empty(&'static str),
}

/// Settings shared by the store and the export adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripLogConfig {
    /// Key-value store key holding the serialized collection.
    pub storage_key: String,
    /// Prefix of exported file names; the export date is appended.
    pub export_file_prefix: String,
    /// Worksheet title passed to spreadsheet sinks.
    pub export_sheet_name: String,
}

impl Default for TripLogConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            export_file_prefix: DEFAULT_EXPORT_PREFIX.to_string(),
            export_sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl TripLogConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(raw)?;
        if cfg.storage_key.trim().is_empty() {
            return Err(ConfigError::Empty("storage_key"));
        }
        if cfg.export_file_prefix.trim().is_empty() {
            return Err(ConfigError::Empty("export_file_prefix"));
        }
        Ok(cfg)
    }
}
