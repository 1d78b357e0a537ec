//! TOML-backed preference store.

use super::{PreferenceStore, STORE_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Stores preferences as a flat TOML table, e.g. `app_log_level = 3`.
///
/// Writes go to a sibling temp file that is renamed over the original, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    /// Serialises read-modify-write cycles within the process.
    write_lock: Mutex<()>,
}

impl FilePreferences {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<config_dir>/twinlog/app_log_pref.toml`.
    ///
    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when the platform has no config directory.
    pub fn at_default_location() -> Result<Self, crate::Error> {
        Self::default_path().map(Self::new)
    }

    /// # Errors
    /// [`crate::Error::ConfigDirNotFound`] when the platform has no config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "twinlog")
            .map(|dirs| dirs.config_dir().join(format!("{STORE_NAME}.toml")))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<toml::Table, crate::Error> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(toml::Table::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, crate::Error> {
        let table = self.read_table()?;
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::Integer(v)) => Ok(Some(*v)),
            Some(other) => Err(crate::Error::InvalidLevel(format!(
                "{key} = {other} in {}",
                self.path.display()
            ))),
        }
    }

    fn put_int(&self, key: &str, value: i64) -> Result<(), crate::Error> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // A corrupt file is replaced rather than blocking every future write
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), toml::Value::Integer(value));
        let content = toml::to_string(&table)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
