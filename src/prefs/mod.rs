//! Persistence for the severity threshold across process restarts.
//!
//! The gate only needs an integer-valued key-value store. The trait keeps the
//! storage behind a seam so embedders can plug in their own settings backend
//! and tests can inject failures.

mod file;

pub use file::FilePreferences;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Name of the preference store (file stem for [`FilePreferences`]).
pub const STORE_NAME: &str = "app_log_pref";

/// Key holding the threshold's [`Level::ordinal`](crate::Level::ordinal).
pub const LEVEL_KEY: &str = "app_log_level";

/// Integer key-value store scoped to the application.
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    /// The backing store could not be read or decoded.
    fn get_int(&self, key: &str) -> Result<Option<i64>, crate::Error>;

    /// # Errors
    /// The backing store could not be written.
    fn put_int(&self, key: &str, value: i64) -> Result<(), crate::Error>;
}

/// Process-local store. The default when nothing is configured, so tests and
/// short-lived tools never touch the user's settings.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, i64>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, handy for simulating a value persisted by an earlier run.
    #[must_use]
    pub fn with_value(key: &str, value: i64) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, crate::Error> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).copied())
    }

    fn put_int(&self, key: &str, value: i64) -> Result<(), crate::Error> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
        Ok(())
    }
}
