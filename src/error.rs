//! Unified error type for all twinlog operations.
//!
//! None of these ever reach application code through a logging call; the
//! [`Logger`](crate::Logger) hands them to the internal reporter instead.

use crate::fmt::FormatError;

/// Error type for twinlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the filesystem collaborator.
    Io(std::io::Error),
    /// TOML parsing error (config or preference file).
    ConfigParse(toml::de::Error),
    /// Preference file could not be serialized.
    PreferenceEncode(toml::ser::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// No base directory for log storage could be resolved.
    StorageDirNotFound,
    /// Message rendering failed.
    Format(FormatError),
    /// Invalid log level string or stored ordinal.
    InvalidLevel(String),
    /// Invalid size string (e.g. `max_size = "2X"`).
    InvalidSize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::PreferenceEncode(e) => write!(f, "preference encode error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::StorageDirNotFound => write!(f, "log storage directory not found"),
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidSize(size) => write!(f, "invalid size: {size}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::PreferenceEncode(e) => Some(e),
            Self::Format(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Self::PreferenceEncode(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
