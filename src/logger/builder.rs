//! Collaborators (console, preference store, filesystem) are injected here so
//! each one can be swapped for a fake; everything else has a working default.

use super::Logger;
use crate::console::{ConsoleSink, NullConsole, TerminalConsole};
use crate::fmt::LineTemplate;
use crate::gate::LevelGate;
use crate::internal::{ErrorHook, Reporter};
use crate::level::Level;
use crate::location::LogLocation;
use crate::prefs::{MemoryPreferences, PreferenceStore};
use crate::sink::{DEFAULT_MAX_BYTES, DEFAULT_TIMESTAMP_FORMAT, LogFs, RotatingSink, StdFs};
use std::path::PathBuf;
use std::sync::Arc;

pub struct LoggerBuilder {
    console: Arc<dyn ConsoleSink>,
    preferences: Arc<dyn PreferenceStore>,
    fs: Arc<dyn LogFs>,
    max_bytes: u64,
    timestamp_format: String,
    structure: String,
    location: LogLocation,
    file_enabled: bool,
    error_hook: Option<ErrorHook>,
    diagnostics: Level,
    /// Problems found while configuring, reported once the reporter exists.
    pub(super) deferred: Vec<(String, crate::Error)>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Terminal console, in-memory preferences, real filesystem, 2 MiB rotation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: Arc::new(TerminalConsole::new()),
            preferences: Arc::new(MemoryPreferences::new()),
            fs: Arc::new(StdFs),
            max_bytes: DEFAULT_MAX_BYTES,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            structure: LineTemplate::DEFAULT.to_string(),
            location: LogLocation::default(),
            file_enabled: true,
            error_hook: None,
            diagnostics: Level::Warn,
            deferred: Vec::new(),
        }
    }

    #[must_use]
    pub fn console(self, console: impl ConsoleSink + 'static) -> Self {
        self.shared_console(Arc::new(console))
    }

    /// Lets the caller keep its own handle to the console sink.
    #[must_use]
    pub fn shared_console(mut self, console: Arc<dyn ConsoleSink>) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn no_console(self) -> Self {
        self.console(NullConsole)
    }

    #[must_use]
    pub fn preferences(self, store: impl PreferenceStore + 'static) -> Self {
        self.shared_preferences(Arc::new(store))
    }

    #[must_use]
    pub fn shared_preferences(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = store;
        self
    }

    #[must_use]
    pub fn filesystem(self, fs: impl LogFs + 'static) -> Self {
        self.shared_filesystem(Arc::new(fs))
    }

    #[must_use]
    pub fn shared_filesystem(mut self, fs: Arc<dyn LogFs>) -> Self {
        self.fs = fs;
        self
    }

    #[must_use]
    pub const fn max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Line layout, e.g. `"{timestamp} {tag} {msg}"`.
    #[must_use]
    pub fn structure(mut self, template: impl Into<String>) -> Self {
        self.structure = template.into();
        self
    }

    /// Exact log directory, skipping base/app-name resolution.
    #[must_use]
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.location.directory = Some(dir.into());
        self
    }

    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.location.base_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.location.app_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: LogLocation) -> Self {
        self.location = location;
        self
    }

    /// `false` gives a console-only logger.
    #[must_use]
    pub const fn file_enabled(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    /// Called with every error the logger absorbs.
    #[must_use]
    pub fn error_hook(mut self, hook: impl Fn(&crate::Error) + Send + Sync + 'static) -> Self {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Minimum level of the logger's own console diagnostics.
    #[must_use]
    pub const fn diagnostics(mut self, level: Level) -> Self {
        self.diagnostics = level;
        self
    }

    /// Builds an uninitialized logger. Nothing touches the disk until
    /// [`Logger::initialize`].
    #[must_use]
    pub fn build(self) -> Logger {
        let reporter = Reporter::new(self.console.clone(), self.error_hook, self.diagnostics);
        for (context, err) in &self.deferred {
            reporter.report(Level::Warn, "CONFIG", context, err);
        }

        let sink = RotatingSink::new(
            self.fs,
            self.max_bytes,
            LineTemplate::parse(&self.structure),
            self.timestamp_format,
            reporter.clone(),
        );

        Logger {
            gate: LevelGate::new(self.preferences),
            sink,
            console: self.console,
            reporter,
            location: self.location,
            file_enabled: self.file_enabled,
        }
    }

    /// [`LoggerBuilder::build`] followed by [`Logger::initialize`].
    #[must_use]
    pub fn init(self) -> Logger {
        let logger = self.build();
        logger.initialize();
        logger
    }
}
