//! The logger's own diagnostic channel.
//!
//! Logging calls never hand errors back to application code, so every failure
//! inside the gate, the sink, or the formatter ends up here instead: a line on
//! the console sink under the `twinlog` tag, plus the embedder's error hook if
//! one was installed. Nothing reported here is written to the log file.

use crate::console::ConsoleSink;
use crate::level::Level;
use std::fmt;
use std::sync::Arc;

/// Console tag used for the logger's own messages.
pub const TAG: &str = "twinlog";

/// Callback invoked with every error the logger absorbs.
pub type ErrorHook = Arc<dyn Fn(&crate::Error) + Send + Sync>;

/// Cheap to clone; the gate-facing logger and its sink share one.
#[derive(Clone)]
pub struct Reporter {
    console: Arc<dyn ConsoleSink>,
    hook: Option<ErrorHook>,
    min_level: Level,
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("hook", &self.hook.is_some())
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

impl Reporter {
    #[must_use]
    pub fn new(console: Arc<dyn ConsoleSink>, hook: Option<ErrorHook>, min_level: Level) -> Self {
        Self {
            console,
            hook,
            min_level,
        }
    }

    /// Console output failures have nowhere else to go and are dropped.
    fn emit(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }
        let _ = self.console.write(level, TAG, &format!("{scope}: {msg}"));
    }

    pub fn debug(&self, scope: &str, msg: &str) {
        self.emit(Level::Debug, scope, msg);
    }

    /// Reports an absorbed error: console notice at `level`, then the hook.
    pub fn report(&self, level: Level, scope: &str, context: &str, err: &crate::Error) {
        self.emit(level, scope, &format!("{context}: {err}"));
        self.notify(err);
    }

    /// Hook only, for failures of the console sink itself.
    pub fn notify(&self, err: &crate::Error) {
        if let Some(hook) = &self.hook {
            hook(err);
        }
    }
}
