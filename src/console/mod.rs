//! Every line that passes the gate is also handed to a console sink, and the
//! logger's own diagnostics go there too. The trait is the seam that lets an
//! embedder forward to a system log and lets tests capture what was emitted.

mod terminal;

pub use terminal::TerminalConsole;

use crate::level::Level;

/// Fire-and-forget receiver of `(tag, message)` pairs.
///
/// `Send + Sync` because log calls arrive from any thread and forwarding happens
/// outside the sink lock.
pub trait ConsoleSink: Send + Sync {
    /// Emits one message. Failures are absorbed by the caller.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, level: Level, tag: &str, message: &str) -> Result<(), crate::Error>;
}

/// Console sink that discards everything, for `console.enabled = false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConsole;

impl ConsoleSink for NullConsole {
    fn write(&self, _level: Level, _tag: &str, _message: &str) -> Result<(), crate::Error> {
        Ok(())
    }
}
