//! Configuration struct definitions.

use crate::fmt::LineTemplate;
use crate::sink::DEFAULT_TIMESTAMP_FORMAT;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Names the log directory. Falls back to the executable name.
    pub app_name: Option<String>,
    /// Minimum level of the logger's own diagnostics on the console.
    pub diagnostics: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            app_name: None,
            diagnostics: "warn".to_string(),
        }
    }
}

/// Rotating file configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Disabled means console-only logging.
    pub enabled: bool,
    /// Parent of the per-app log directory.
    pub base_dir: Option<String>,
    /// Full log directory; overrides `base_dir` and the app name.
    pub directory: Option<String>,
    /// Rotation threshold, e.g. "2M".
    pub max_size: String,
    /// strftime format for the `{timestamp}` column.
    pub timestamp_format: String,
    /// Line layout.
    pub structure: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_dir: None,
            directory: None,
            max_size: "2M".to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            structure: LineTemplate::DEFAULT.to_string(),
        }
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colors on the level label.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// Threshold persistence configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// `false` keeps the threshold in memory only.
    pub persist: bool,
    /// Preference file; defaults to the platform config directory.
    pub path: Option<String>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            persist: true,
            path: None,
        }
    }
}
