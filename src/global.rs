//! Optional process-wide logger for code that can't thread a `&Logger` through.
//!
//! `OnceLock` makes installation race-free: the first caller wins and later
//! calls get their logger handed back.

use crate::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide instance.
///
/// # Errors
/// Returns `logger` unchanged if one is already installed.
pub fn init_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

/// The installed logger, if any.
#[must_use]
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
