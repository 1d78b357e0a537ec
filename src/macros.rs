//! Level macros with deferred formatting.
//!
//! `format_args!` captures the arguments without rendering them; the logger
//! only renders once the level has passed the gate.
//!
//! ```
//! use twinlog::{Logger, info, warn};
//!
//! let logger = Logger::builder().no_console().file_enabled(false).init();
//! let err = std::io::Error::other("disk full");
//!
//! info!(logger, "NET", "connected to {} in {}ms", "db", 12);
//! warn!(logger, "NET", err: err, "retrying {}", "db");
//! warn!(logger, "NET", err: err);
//! ```

/// `log!(logger, level, tag, "fmt", args...)`, optionally with `err: <error>` after the tag.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $tag:expr, err: $err:expr $(,)?) => {
        $logger.log_err($level, $tag, &$err, "")
    };
    ($logger:expr, $level:expr, $tag:expr, err: $err:expr, $($arg:tt)+) => {
        $logger.log_args_err($level, $tag, &$err, ::std::format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $tag:expr, $($arg:tt)+) => {
        $logger.log_args($level, $tag, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Verbose, $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($rest)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($rest)+)
    };
}
