//! User settings for banco-cli

use serde::{Deserialize, Serialize};

use super::paths::BancoPaths;
use crate::error::BancoError;
use crate::storage::file_io::{read_json, write_json_atomic};

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

/// User settings for banco-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if it
    /// doesn't exist yet
    pub fn load_or_create(paths: &BancoPaths) -> Result<Self, BancoError> {
        let path = paths.settings_file();

        if path.exists() {
            read_json(&path)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BancoPaths) -> Result<(), BancoError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
