//! TOML configuration loading.
//!
//! Separated from the struct definitions so that the loading logic (file I/O,
//! path discovery, value parsing) stays independent of the serde schema.

mod structs;

pub use structs::{ConsoleConfig, FileConfig, GeneralConfig, PreferencesConfig};

use crate::level::Level;
use crate::location::LogLocation;
use crate::size::parse_size;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger, so every
/// section and field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub file: FileConfig,
    pub console: ConsoleConfig,
    pub preferences: PreferencesConfig,
}

impl Config {
    /// Loads from [`Config::get_config_path`]; a missing file yields defaults.
    ///
    /// # Errors
    /// The config directory can't be determined, or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// The file exists but can't be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/twinlog/twinlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "twinlog")
            .map(|dirs| dirs.config_dir().join("twinlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Rotation threshold in bytes.
    ///
    /// # Errors
    /// [`crate::Error::InvalidSize`] for strings like `"2X"` or `"0"`.
    pub fn parse_max_size(&self) -> Result<u64, crate::Error> {
        parse_size(&self.file.max_size)
            .filter(|&bytes| bytes > 0)
            .ok_or_else(|| crate::Error::InvalidSize(self.file.max_size.clone()))
    }

    /// Diagnostics level; unknown strings fall back to Warn.
    #[must_use]
    pub fn parse_diagnostics(&self) -> Level {
        self.general.diagnostics.parse().unwrap_or(Level::Warn)
    }

    /// Directory inputs for the sink.
    #[must_use]
    pub fn location(&self) -> LogLocation {
        LogLocation {
            directory: self
                .file
                .directory
                .as_deref()
                .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref())),
            base_dir: self.file.base_dir.clone(),
            app_name: self.general.app_name.clone(),
        }
    }

    /// Preference file path with `~` expanded, if one is configured.
    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.preferences
            .path
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }
}
