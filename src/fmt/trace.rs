//! Error-attached log calls append the error and everything it wraps.

use std::error::Error;
use std::fmt::Write;

/// Renders `err` followed by one `Caused by:` line per `source()` level.
#[must_use]
pub fn error_trace(err: &(dyn Error + '_)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, "\n  Caused by: {cause}");
        source = cause.source();
    }
    out
}

/// Joins a rendered message and an error trace the way the file and console both show them.
#[must_use]
pub fn with_trace(message: &str, err: &(dyn Error + '_)) -> String {
    let trace = error_trace(err);
    if message.is_empty() {
        trace
    } else {
        format!("{message}\n{trace}")
    }
}
