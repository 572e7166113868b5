//! Where banco-cli keeps its files
//!
//! Everything lives under one base directory: `config.json` at the top and
//! the account data below `data/`. The base resolves to
//! `BANCO_CLI_DATA_DIR` when that variable is set, otherwise to the
//! platform convention (`$XDG_CONFIG_HOME`/`~/.config` on Unix, `%APPDATA%`
//! on Windows) joined with `banco-cli`.

use std::path::PathBuf;

use crate::error::BancoError;

/// Resolved locations of the settings and data files
#[derive(Debug, Clone)]
pub struct BancoPaths {
    base_dir: PathBuf,
}

impl BancoPaths {
    /// Resolve paths from the environment
    ///
    /// Fails only when no home directory can be determined on Windows.
    pub fn new() -> Result<Self, BancoError> {
        let base_dir = if let Ok(custom) = std::env::var("BANCO_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Point everything at an explicit base directory; tests use this with
    /// a temp dir
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// The settings file, `config.json` at the base directory
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// The account data file, `data/accounts.json`
    pub fn accounts_file(&self) -> PathBuf {
        self.data_dir().join("accounts.json")
    }

    /// Create the base and data directories if they are missing
    pub fn ensure_directories(&self) -> Result<(), BancoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BancoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BancoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BancoError> {
    // XDG_CONFIG_HOME when set, ~/.config otherwise
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("banco-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BancoError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BancoError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("banco-cli"))
}
