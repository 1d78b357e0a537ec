//! Size-bounded, append-only log storage with one backup generation.
//!
//! On disk there is at most `app_log.txt` (active) and `app_log_Old.txt`
//! (the previous active file, frozen at the moment it was rotated out). The
//! active file's size is checked at the start of every write and rotated once
//! it has grown past `max_bytes`; the message that crossed the bound stays in
//! the generation it was written to.
//!
//! One mutex covers the handle and the size-check-rotate-append-flush
//! sequence, so lines from concurrent callers never interleave and two threads
//! can never both decide to rotate. Every failure degrades the sink instead of
//! surfacing to the caller: a handle that can't be (re)opened leaves the sink
//! disabled until the next `initialize`.

mod fs;

pub use fs::{LogFs, LogHandle, StdFs};

use crate::fmt::{LineTemplate, LineValues};
use crate::internal::Reporter;
use crate::level::Level;
use chrono::Local;
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// File receiving appends.
pub const ACTIVE_FILE_NAME: &str = "app_log.txt";
/// The single retained previous generation.
pub const BACKUP_FILE_NAME: &str = "app_log_Old.txt";
/// Rotation threshold when none is configured: 2 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 2 * 1024 * 1024;
/// Human-readable local time with milliseconds.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Where the two log files live. Fixed once the sink is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub directory: PathBuf,
    pub active: PathBuf,
    pub backup: PathBuf,
}

impl LogPaths {
    #[must_use]
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
            active: directory.join(ACTIVE_FILE_NAME),
            backup: directory.join(BACKUP_FILE_NAME),
        }
    }
}

/// Lifecycle state as seen from outside the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStatus {
    /// `initialize` has not run yet.
    Uninitialized,
    /// A handle is open; writes reach the file.
    Active,
    /// Initialization or I/O failed; writes are skipped until re-initialized.
    Disabled,
    /// Closed by `shutdown`.
    Closed,
}

/// Result of one [`RotatingSink::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Appended,
    /// No open handle; nothing was written.
    Skipped,
}

/// Diagnostics gathered under the lock and reported after it is released, so a
/// console sink that calls back into the logger cannot deadlock.
enum Notice {
    Debug(String),
    Failure { context: String, error: crate::Error },
}

struct SinkState {
    paths: Option<LogPaths>,
    handle: Option<LogHandle>,
    /// Reported status whenever `handle` is `None`.
    inactive: SinkStatus,
}

pub struct RotatingSink {
    fs: Arc<dyn LogFs>,
    max_bytes: u64,
    line: LineTemplate,
    timestamp_format: String,
    reporter: Reporter,
    state: Mutex<SinkState>,
}

impl std::fmt::Debug for RotatingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingSink")
            .field("max_bytes", &self.max_bytes)
            .field("status", &self.status())
            .field("paths", &self.paths())
            .finish_non_exhaustive()
    }
}

impl RotatingSink {
    #[must_use]
    pub fn new(
        fs: Arc<dyn LogFs>,
        max_bytes: u64,
        line: LineTemplate,
        timestamp_format: impl Into<String>,
        reporter: Reporter,
    ) -> Self {
        Self {
            fs,
            max_bytes,
            line,
            timestamp_format: timestamp_format.into(),
            reporter,
            state: Mutex::new(SinkState {
                paths: None,
                handle: None,
                inactive: SinkStatus::Uninitialized,
            }),
        }
    }

    /// A panic elsewhere while holding the lock must not take logging down with it.
    fn lock(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    #[must_use]
    pub fn status(&self) -> SinkStatus {
        let state = self.lock();
        if state.handle.is_some() {
            SinkStatus::Active
        } else {
            state.inactive
        }
    }

    #[must_use]
    pub fn paths(&self) -> Option<LogPaths> {
        self.lock().paths.clone()
    }

    /// Points the sink at `directory`, closing any handle from an earlier call first.
    ///
    /// Creates the directory if needed and rotates an oversized leftover active
    /// file before opening it for append.
    ///
    /// # Errors
    /// The directory or the active file could not be created. The sink is then
    /// disabled.
    pub fn initialize(&self, directory: &Path) -> Result<(), crate::Error> {
        let mut notices = Vec::new();
        let result = {
            let mut guard = self.lock();
            let state = &mut *guard;
            Self::close_handle(&mut state.handle, &mut notices);
            state.inactive = SinkStatus::Disabled;

            let paths = LogPaths::new(directory);
            let result = self.open_at(&paths, &mut state.handle, &mut notices);
            state.paths = Some(paths);
            result
        };
        self.report(notices);

        if result.is_ok() {
            self.reporter
                .debug("SINK", &format!("Log file ready in {}", directory.display()));
        }
        result
    }

    fn open_at(
        &self,
        paths: &LogPaths,
        handle: &mut Option<LogHandle>,
        notices: &mut Vec<Notice>,
    ) -> Result<(), crate::Error> {
        self.fs.create_dir_all(&paths.directory)?;

        if self.active_len(paths) > self.max_bytes {
            self.rotate(paths, handle, notices)
        } else {
            *handle = Some(self.fs.open_append(&paths.active)?);
            Ok(())
        }
    }

    /// Appends `<timestamp> <tag> <message>` as one line and flushes it.
    ///
    /// # Errors
    /// Rotation could not reopen the active file, or the append/flush failed.
    /// Either way the sink is disabled afterwards.
    pub fn write(
        &self,
        level: Level,
        tag: &str,
        message: &str,
    ) -> Result<WriteOutcome, crate::Error> {
        let mut notices = Vec::new();
        let result = {
            let mut guard = self.lock();
            self.write_locked(&mut guard, level, tag, message, &mut notices)
        };
        self.report(notices);
        result
    }

    fn write_locked(
        &self,
        state: &mut SinkState,
        level: Level,
        tag: &str,
        message: &str,
        notices: &mut Vec<Notice>,
    ) -> Result<WriteOutcome, crate::Error> {
        let Some(paths) = state.paths.as_ref() else {
            return Ok(WriteOutcome::Skipped);
        };
        if state.handle.is_none() {
            return Ok(WriteOutcome::Skipped);
        }

        if self.active_len(paths) > self.max_bytes {
            if let Err(e) = self.rotate(paths, &mut state.handle, notices) {
                state.inactive = SinkStatus::Disabled;
                return Err(e);
            }
        }

        let Some(handle) = state.handle.as_mut() else {
            return Ok(WriteOutcome::Skipped);
        };

        let mut line = self.format_line(level, tag, message);
        line.push('\n');
        let written = handle
            .write_all(line.as_bytes())
            .and_then(|()| handle.flush());

        match written {
            Ok(()) => Ok(WriteOutcome::Appended),
            Err(e) => {
                state.handle = None;
                state.inactive = SinkStatus::Disabled;
                Err(e.into())
            }
        }
    }

    /// Flushes and closes the handle. Later writes are skipped until re-initialized.
    ///
    /// # Errors
    /// The final flush failed; the handle is closed regardless.
    pub fn close(&self) -> Result<(), crate::Error> {
        let mut guard = self.lock();
        guard.inactive = SinkStatus::Closed;
        match guard.handle.take() {
            Some(mut handle) => handle.flush().map_err(Into::into),
            None => Ok(()),
        }
    }

    /// Marks the sink disabled without touching the filesystem, for when no
    /// directory could be resolved at all.
    pub fn disable(&self) {
        let mut notices = Vec::new();
        {
            let mut guard = self.lock();
            Self::close_handle(&mut guard.handle, &mut notices);
            guard.paths = None;
            guard.inactive = SinkStatus::Disabled;
        }
        self.report(notices);
    }

    /// Size of the active file; a missing or unreadable file counts as empty.
    fn active_len(&self, paths: &LogPaths) -> u64 {
        self.fs.file_size(&paths.active).unwrap_or(0)
    }

    /// Close, demote the active file to backup, reopen the active path.
    ///
    /// If demotion fails the same file is reopened, so nothing is lost and the
    /// next write tries again.
    fn rotate(
        &self,
        paths: &LogPaths,
        handle: &mut Option<LogHandle>,
        notices: &mut Vec<Notice>,
    ) -> Result<(), crate::Error> {
        Self::close_handle(handle, notices);

        match self.demote(paths, notices) {
            Ok(()) => notices.push(Notice::Debug(format!(
                "Rotated {} to {}",
                paths.active.display(),
                paths.backup.display()
            ))),
            Err(error) => notices.push(Notice::Failure {
                context: format!(
                    "Could not rotate {}, continuing in the active file",
                    paths.active.display()
                ),
                error,
            }),
        }

        *handle = Some(self.fs.open_append(&paths.active)?);
        Ok(())
    }

    fn demote(&self, paths: &LogPaths, notices: &mut Vec<Notice>) -> Result<(), crate::Error> {
        if self.fs.exists(&paths.backup) {
            if let Err(e) = self.fs.remove_file(&paths.backup) {
                notices.push(Notice::Failure {
                    context: format!("Could not delete {}", paths.backup.display()),
                    error: e.into(),
                });
            }
        }
        self.fs.rename(&paths.active, &paths.backup)?;
        Ok(())
    }

    fn close_handle(handle: &mut Option<LogHandle>, notices: &mut Vec<Notice>) {
        if let Some(mut h) = handle.take() {
            if let Err(e) = h.flush() {
                notices.push(Notice::Failure {
                    context: "Flush on close failed".to_string(),
                    error: e.into(),
                });
            }
        }
    }

    fn format_line(&self, level: Level, tag: &str, message: &str) -> String {
        let now = Local::now();
        let mut timestamp = String::new();
        // chrono reports a bad strftime string as a fmt error at render time
        if write!(timestamp, "{}", now.format(&self.timestamp_format)).is_err() {
            timestamp = now.to_rfc3339();
        }

        self.line.render(&LineValues {
            timestamp: &timestamp,
            tag,
            msg: message,
            level: level.as_str(),
        })
    }

    fn report(&self, notices: Vec<Notice>) {
        for notice in notices {
            match notice {
                Notice::Debug(msg) => self.reporter.debug("SINK", &msg),
                Notice::Failure { context, error } => {
                    self.reporter.report(Level::Warn, "SINK", &context, &error);
                }
            }
        }
    }
}
