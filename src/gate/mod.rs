//! Minimum-severity gate consulted by every logging call before any formatting happens.
//!
//! The in-memory threshold is the source of truth for the running process. The
//! preference store only carries it across restarts, so store failures never
//! change what `should_log` answers.

use crate::level::Level;
use crate::prefs::{LEVEL_KEY, PreferenceStore};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub struct LevelGate {
    /// Read with a relaxed load on every call; no other memory depends on it.
    threshold: AtomicU8,
    store: Arc<dyn PreferenceStore>,
    /// Keeps the in-memory value and the persisted one changing in the same order.
    setter: Mutex<()>,
}

impl std::fmt::Debug for LevelGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelGate")
            .field("threshold", &self.current())
            .finish_non_exhaustive()
    }
}

impl LevelGate {
    /// Starts fully permissive until [`LevelGate::load`] reads the stored value.
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self {
            threshold: AtomicU8::new(Level::Verbose.ordinal()),
            store,
            setter: Mutex::new(()),
        }
    }

    /// Startup read of the persisted threshold. A missing key keeps the current value.
    ///
    /// # Errors
    /// The store is unreadable or holds an ordinal that names no level. The
    /// in-memory threshold is left unchanged in both cases.
    pub fn load(&self) -> Result<Level, crate::Error> {
        let _guard = self.setter.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(level) = self.stored()? {
            self.threshold.store(level.ordinal(), Ordering::Relaxed);
        }
        Ok(self.current())
    }

    /// `true` iff `level >= threshold`.
    #[must_use]
    pub fn should_log(&self, level: Level) -> bool {
        level.ordinal() >= self.threshold.load(Ordering::Relaxed)
    }

    /// The in-memory threshold used by [`LevelGate::should_log`].
    #[must_use]
    pub fn current(&self) -> Level {
        Level::from_ordinal(i64::from(self.threshold.load(Ordering::Relaxed)))
            .unwrap_or_default()
    }

    /// Applies `level` immediately, then persists it.
    ///
    /// # Errors
    /// Persisting failed. The new threshold is in effect regardless.
    pub fn set_threshold(&self, level: Level) -> Result<(), crate::Error> {
        let _guard = self.setter.lock().unwrap_or_else(PoisonError::into_inner);
        self.threshold.store(level.ordinal(), Ordering::Relaxed);
        self.store.put_int(LEVEL_KEY, i64::from(level.ordinal()))
    }

    /// Reads the persisted threshold without applying it.
    ///
    /// # Errors
    /// The store is unreadable or holds an unknown ordinal.
    pub fn stored(&self) -> Result<Option<Level>, crate::Error> {
        match self.store.get_int(LEVEL_KEY)? {
            None => Ok(None),
            Some(raw) => Level::from_ordinal(raw)
                .map(Some)
                .ok_or_else(|| crate::Error::InvalidLevel(format!("{LEVEL_KEY} = {raw}"))),
        }
    }

    /// Persisted threshold, falling back to the in-memory one when the store
    /// can't answer.
    #[must_use]
    pub fn threshold(&self) -> Level {
        match self.stored() {
            Ok(Some(level)) => level,
            Ok(None) | Err(_) => self.current(),
        }
    }
}
