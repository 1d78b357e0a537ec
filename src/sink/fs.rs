//! Filesystem primitives the sink needs, behind a trait so tests can fail any
//! one of them on demand.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-mode writer owned by the sink. Dropping it closes the file.
pub type LogHandle = Box<dyn Write + Send>;

pub trait LogFs: Send + Sync {
    /// # Errors
    /// The directory could not be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// The file is missing or its metadata is unreadable.
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// # Errors
    /// The rename was refused by the OS.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// # Errors
    /// The file could not be deleted.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Opens `path` for appending, creating it if absent.
    ///
    /// # Errors
    /// The file could not be opened.
    fn open_append(&self, path: &Path) -> io::Result<LogHandle>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl LogFs for StdFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        fs::metadata(path).map(|m| m.len())
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn open_append(&self, path: &Path) -> io::Result<LogHandle> {
        // Unbuffered: each line is one write_all, flushed by the caller
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Box::new(file))
    }
}
