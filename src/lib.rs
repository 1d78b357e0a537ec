//! `twinlog` - leveled logging to a size-bounded file with a single backup.
//!
//! - A severity gate decides per call whether anything is formatted at all
//! - Passing lines go to `app_log.txt`, rotated to `app_log_Old.txt` past a size bound
//! - Every line is also forwarded to a console sink
//! - Logging calls never fail or panic into the caller; problems are reported on the console
//!
//! # Example
//!
//! ```no_run
//! use twinlog::{Level, Logger, info};
//!
//! let logger = Logger::builder()
//!     .app_name("myapp")
//!     .max_bytes(1024 * 1024)
//!     .init();
//!
//! logger.info("MAIN", "Application started");
//! info!(logger, "NET", "connected to {} after {} tries", "db", 3);
//! logger.set_threshold(Level::Warn);
//! logger.debug("NET", "dropped by the gate");
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `twinlog` command-line tool

pub mod config;
pub mod console;
pub mod error;
pub mod fmt;
pub mod gate;
pub mod internal;
pub mod level;
pub mod location;
pub mod logger;
pub mod prefs;
pub mod sink;
pub mod size;

mod global;
mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use console::{ConsoleSink, NullConsole, TerminalConsole};
pub use error::Error;
pub use fmt::FormatError;
pub use gate::LevelGate;
pub use global::{global, init_global};
pub use level::Level;
pub use location::LogLocation;
pub use logger::{Logger, LoggerBuilder};
pub use prefs::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use sink::{LogFs, LogPaths, RotatingSink, SinkStatus, StdFs};
pub use size::{format_size, parse_size};
