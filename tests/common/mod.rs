//! Fakes for the logger's collaborators.

#![allow(dead_code)]

use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use twinlog::internal::{Reporter, TAG};
use twinlog::sink::{LogHandle, StdFs};
use twinlog::{ConsoleSink, Error, Level, LogFs, PreferenceStore};

/// Console sink that remembers everything it was given.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<(Level, String, String)>>,
}

impl RecordingConsole {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<(Level, String, String)> {
        self.lines.lock().unwrap().clone()
    }

    /// Messages logged under `tag`, excluding the logger's own diagnostics.
    pub fn messages(&self, tag: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|(_, t, _)| t == tag)
            .map(|(_, _, m)| m)
            .collect()
    }

    /// The logger's own diagnostics.
    pub fn diagnostics(&self) -> Vec<String> {
        self.messages(TAG)
    }
}

impl ConsoleSink for RecordingConsole {
    fn write(&self, level: Level, tag: &str, message: &str) -> Result<(), Error> {
        self.lines
            .lock()
            .unwrap()
            .push((level, tag.to_string(), message.to_string()));
        Ok(())
    }
}

/// Console sink that always fails.
#[derive(Debug, Default)]
pub struct BrokenConsole;

impl ConsoleSink for BrokenConsole {
    fn write(&self, _level: Level, _tag: &str, _message: &str) -> Result<(), Error> {
        Err(io::Error::other("console gone").into())
    }
}

/// Real filesystem with switchable failures.
#[derive(Debug, Default)]
pub struct FaultyFs {
    pub fail_create_dir: AtomicBool,
    pub fail_remove: AtomicBool,
    pub fail_rename: AtomicBool,
    pub fail_open: AtomicBool,
    pub fail_write: AtomicBool,
    pub opens: AtomicUsize,
    pub renames: AtomicUsize,
    /// Handles opened and not yet dropped.
    pub live: Arc<AtomicUsize>,
}

impl FaultyFs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn live_handles(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn set(flag: &AtomicBool, on: bool) {
        flag.store(on, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, what: &str) -> io::Result<()> {
        if flag.load(Ordering::SeqCst) {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, what.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Counts itself in `live` until dropped.
struct CountedHandle {
    inner: LogHandle,
    live: Arc<AtomicUsize>,
}

impl Write for CountedHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Drop for CountedHandle {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogFs for FaultyFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        Self::check(&self.fail_create_dir, "create_dir_all")?;
        StdFs.create_dir_all(path)
    }

    fn exists(&self, path: &Path) -> bool {
        StdFs.exists(path)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        StdFs.file_size(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        Self::check(&self.fail_rename, "rename")?;
        self.renames.fetch_add(1, Ordering::SeqCst);
        StdFs.rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        Self::check(&self.fail_remove, "remove_file")?;
        StdFs.remove_file(path)
    }

    fn open_append(&self, path: &Path) -> io::Result<LogHandle> {
        Self::check(&self.fail_open, "open_append")?;
        self.opens.fetch_add(1, Ordering::SeqCst);
        let inner: LogHandle = if self.fail_write.load(Ordering::SeqCst) {
            Box::new(FailingWriter)
        } else {
            StdFs.open_append(path)?
        };
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountedHandle {
            inner,
            live: self.live.clone(),
        }))
    }
}

/// Preference store whose every operation fails.
#[derive(Debug, Default)]
pub struct BrokenPreferences {
    pub puts: AtomicUsize,
}

impl PreferenceStore for BrokenPreferences {
    fn get_int(&self, _key: &str) -> Result<Option<i64>, Error> {
        Err(io::Error::other("store unreadable").into())
    }

    fn put_int(&self, _key: &str, _value: i64) -> Result<(), Error> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::other("store read-only").into())
    }
}

/// Reporter that routes diagnostics into `console`.
pub fn reporter(console: &Arc<RecordingConsole>) -> Reporter {
    Reporter::new(console.clone(), None, Level::Debug)
}
