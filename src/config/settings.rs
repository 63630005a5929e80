//! User settings for Pocketbook

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// chrono format that scheduled bill due dates must match
    ///
    /// Must put the month before the first `/`, since budget months are read
    /// from that field.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// File name used for legacy text exports
    #[serde(default = "default_legacy_file_name")]
    pub legacy_file_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%m/%d/%Y".to_string()
}

fn default_true() -> bool {
    true
}

fn default_legacy_file_name() -> String {
    "budget_data.txt".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_true(),
            legacy_file_name: default_legacy_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted here; `init` decides when to write
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PocketbookError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings the rest of the program cannot honour
    pub fn validate(&self) -> Result<(), PocketbookError> {
        let month_first = ["%m/", "%-m/"]
            .iter()
            .any(|prefix| self.date_format.starts_with(prefix));
        if !month_first {
            return Err(PocketbookError::Config(format!(
                "date_format '{}' must start with the month, e.g. %m/%d/%Y",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
