//! Logger construction from a twinlog config file.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::console::TerminalConsole;
use crate::prefs::{FilePreferences, MemoryPreferences};

impl LoggerBuilder {
    /// Builder preset from `config`. Collaborators can still be overridden afterwards.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut builder = Self::new()
            .location(config.location())
            .file_enabled(config.file.enabled)
            .timestamp_format(&config.file.timestamp_format)
            .structure(&config.file.structure)
            .diagnostics(config.parse_diagnostics());

        builder = if config.console.enabled {
            builder.console(TerminalConsole::new().colors(config.console.colors))
        } else {
            builder.no_console()
        };

        match config.parse_max_size() {
            Ok(bytes) => builder = builder.max_bytes(bytes),
            Err(e) => builder
                .deferred
                .push(("Invalid file.max_size, using 2 MiB".to_string(), e)),
        }

        if config.preferences.persist {
            let store = config
                .preferences_path()
                .map_or_else(FilePreferences::at_default_location, |p| {
                    Ok(FilePreferences::new(p))
                });
            match store {
                Ok(store) => builder = builder.preferences(store),
                Err(e) => {
                    builder = builder.preferences(MemoryPreferences::new());
                    builder
                        .deferred
                        .push(("Threshold will not persist".to_string(), e));
                }
            }
        }

        builder
    }
}

impl Logger {
    /// Builds and initializes a logger from `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        LoggerBuilder::from_config(config).init()
    }

    /// Loads the default config file (defaults if missing or unreadable) and
    /// builds an initialized logger from it.
    #[must_use]
    pub fn from_default_config() -> Self {
        match Config::load() {
            Ok(config) => Self::from_config(&config),
            Err(e) => {
                let mut builder = LoggerBuilder::from_config(&Config::default());
                builder
                    .deferred
                    .push(("Could not load config, using defaults".to_string(), e));
                builder.init()
            }
        }
    }
}
