//! The logging service: severity gate in front, rotating file and console behind.
//!
//! Every call is checked against the gate before any formatting happens. A
//! passing call is rendered once, appended to the log file under the sink's
//! lock, then forwarded to the console sink outside it. Nothing in here
//! returns an error or panics into application code; failures go to the
//! internal reporter.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::console::ConsoleSink;
use crate::fmt::{self, FormatError};
use crate::gate::LevelGate;
use crate::internal::Reporter;
use crate::level::Level;
use crate::location::LogLocation;
use crate::sink::{LogPaths, RotatingSink, SinkStatus};
use std::error::Error as StdError;
use std::fmt::{Arguments, Display};
use std::path::Path;
use std::sync::Arc;

/// One logger per log directory. Share it behind an `Arc` or install it with
/// [`crate::init_global`].
pub struct Logger {
    gate: LevelGate,
    sink: RotatingSink,
    console: Arc<dyn ConsoleSink>,
    reporter: Reporter,
    location: LogLocation,
    file_enabled: bool,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("gate", &self.gate)
            .field("sink", &self.sink)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Loads the persisted threshold and opens the log file.
    ///
    /// Any failure leaves a console-only logger behind; the returned status says which.
    pub fn initialize(&self) -> SinkStatus {
        match self.gate.load() {
            Ok(level) => self
                .reporter
                .debug("GATE", &format!("Threshold is {level}")),
            Err(e) => self.reporter.report(
                Level::Warn,
                "GATE",
                "Could not read the stored threshold",
                &e,
            ),
        }

        if !self.file_enabled {
            self.sink.disable();
            self.reporter.debug("SINK", "File logging disabled by configuration");
            return self.sink.status();
        }

        match self.location.resolve() {
            Ok(dir) => self.open_sink(&dir),
            Err(e) => {
                self.sink.disable();
                self.reporter.report(
                    Level::Error,
                    "SINK",
                    "No log directory, logging to console only",
                    &e,
                );
                self.sink.status()
            }
        }
    }

    /// Moves the log file to `directory`. The old handle is closed first, and an
    /// in-flight write finishes before the switch.
    pub fn reconfigure(&self, directory: &Path) -> SinkStatus {
        self.open_sink(directory)
    }

    fn open_sink(&self, directory: &Path) -> SinkStatus {
        if let Err(e) = self.sink.initialize(directory) {
            self.reporter.report(
                Level::Error,
                "SINK",
                &format!(
                    "Creation of log file in {} failed, logging to console only",
                    directory.display()
                ),
                &e,
            );
        }
        self.sink.status()
    }

    /// Flushes and closes the log file. Later calls still reach the console.
    pub fn shutdown(&self) {
        if let Err(e) = self.sink.close() {
            self.reporter
                .report(Level::Warn, "SINK", "Final flush failed", &e);
        }
    }

    #[must_use]
    pub fn status(&self) -> SinkStatus {
        self.sink.status()
    }

    /// Active and backup file locations, once initialized.
    #[must_use]
    pub fn paths(&self) -> Option<LogPaths> {
        self.sink.paths()
    }

    /// Where the log files are, or would be once initialized. Resolving the
    /// location touches nothing on disk.
    #[must_use]
    pub fn resolved_paths(&self) -> Option<LogPaths> {
        if let Some(paths) = self.sink.paths() {
            return Some(paths);
        }
        if !self.file_enabled {
            return None;
        }
        self.location
            .resolve()
            .ok()
            .map(|dir| LogPaths::new(&dir))
    }

    #[must_use]
    pub const fn max_bytes(&self) -> u64 {
        self.sink.max_bytes()
    }

    #[must_use]
    pub fn should_log(&self, level: Level) -> bool {
        self.gate.should_log(level)
    }

    /// Takes effect immediately; persisting is best-effort.
    pub fn set_threshold(&self, level: Level) {
        if let Err(e) = self.gate.set_threshold(level) {
            self.reporter.report(
                Level::Warn,
                "GATE",
                &format!("Threshold {level} applied but not persisted"),
                &e,
            );
        }
    }

    /// Stored threshold, or the in-memory one if the store can't be read.
    #[must_use]
    pub fn threshold(&self) -> Level {
        match self.gate.stored() {
            Ok(Some(level)) => level,
            Ok(None) => self.gate.current(),
            Err(e) => {
                self.reporter
                    .report(Level::Debug, "GATE", "Stored threshold unreadable", &e);
                self.gate.current()
            }
        }
    }

    /// Threshold the gate is applying right now.
    #[must_use]
    pub fn current_threshold(&self) -> Level {
        self.gate.current()
    }

    /// Plain message at `level`.
    pub fn log(&self, level: Level, tag: &str, msg: &str) {
        if self.gate.should_log(level) {
            self.dispatch(level, tag, msg);
        }
    }

    /// Message followed by `err` and its source chain.
    pub fn log_err(&self, level: Level, tag: &str, err: &dyn StdError, msg: &str) {
        if self.gate.should_log(level) {
            self.dispatch(level, tag, &fmt::with_trace(msg, err));
        }
    }

    /// Deferred formatting: `args` are only rendered when `level` passes the gate.
    /// Used by the level macros.
    pub fn log_args(&self, level: Level, tag: &str, args: Arguments<'_>) {
        if !self.gate.should_log(level) {
            return;
        }
        match fmt::render_args(args) {
            Ok(msg) => self.dispatch(level, tag, &msg),
            Err(e) => self.format_failed(level, tag, None, e),
        }
    }

    pub fn log_args_err(&self, level: Level, tag: &str, err: &dyn StdError, args: Arguments<'_>) {
        if !self.gate.should_log(level) {
            return;
        }
        match fmt::render_args(args) {
            Ok(msg) => self.dispatch(level, tag, &fmt::with_trace(&msg, err)),
            Err(e) => self.format_failed(level, tag, None, e),
        }
    }

    /// Runtime template (`"{} joined {0}"`). A malformed template skips the file
    /// and is reported on the console instead.
    pub fn log_template(&self, level: Level, tag: &str, template: &str, args: &[&dyn Display]) {
        if !self.gate.should_log(level) {
            return;
        }
        match fmt::render(template, args) {
            Ok(msg) => self.dispatch(level, tag, &msg),
            Err(e) => self.format_failed(level, tag, Some(template), e),
        }
    }

    pub fn log_template_err(
        &self,
        level: Level,
        tag: &str,
        err: &dyn StdError,
        template: &str,
        args: &[&dyn Display],
    ) {
        if !self.gate.should_log(level) {
            return;
        }
        match fmt::render(template, args) {
            Ok(msg) => self.dispatch(level, tag, &fmt::with_trace(&msg, err)),
            Err(e) => self.format_failed(level, tag, Some(template), e),
        }
    }

    pub fn verbose(&self, tag: &str, msg: &str) {
        self.log(Level::Verbose, tag, msg);
    }

    pub fn verbose_err(&self, tag: &str, err: &dyn StdError, msg: &str) {
        self.log_err(Level::Verbose, tag, err, msg);
    }

    pub fn debug(&self, tag: &str, msg: &str) {
        self.log(Level::Debug, tag, msg);
    }

    pub fn debug_err(&self, tag: &str, err: &dyn StdError, msg: &str) {
        self.log_err(Level::Debug, tag, err, msg);
    }

    pub fn info(&self, tag: &str, msg: &str) {
        self.log(Level::Info, tag, msg);
    }

    pub fn info_err(&self, tag: &str, err: &dyn StdError, msg: &str) {
        self.log_err(Level::Info, tag, err, msg);
    }

    pub fn warn(&self, tag: &str, msg: &str) {
        self.log(Level::Warn, tag, msg);
    }

    pub fn warn_err(&self, tag: &str, err: &dyn StdError, msg: &str) {
        self.log_err(Level::Warn, tag, err, msg);
    }

    pub fn error(&self, tag: &str, msg: &str) {
        self.log(Level::Error, tag, msg);
    }

    pub fn error_err(&self, tag: &str, err: &dyn StdError, msg: &str) {
        self.log_err(Level::Error, tag, err, msg);
    }

    /// File first under the sink lock, then the console outside it. A failure on
    /// one side never suppresses the other.
    fn dispatch(&self, level: Level, tag: &str, msg: &str) {
        if let Err(e) = self.sink.write(level, tag, msg) {
            self.reporter.report(
                Level::Error,
                "SINK",
                "Write failed, log file disabled",
                &e,
            );
        }

        if let Err(e) = self.console.write(level, tag, msg) {
            self.reporter.notify(&e);
        }
    }

    fn format_failed(&self, level: Level, tag: &str, template: Option<&str>, err: FormatError) {
        let context = template.map_or_else(
            || format!("Could not format {level} message for {tag}"),
            |t| format!("Could not format {level} message for {tag} from {t:?}"),
        );
        self.reporter
            .report(Level::Error, "FORMAT", &context, &err.into());
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.sink.close();
    }
}
