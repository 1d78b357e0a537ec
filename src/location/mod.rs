//! Works out which directory the log files go in.
//!
//! The directory is `<base>/<app name>`. The base comes from config (with `~`
//! expanded) or the platform's per-user state directory; the app name from
//! config, then the running executable's name, then [`DEFAULT_DIRECTORY_NAME`].

use std::path::PathBuf;

/// Directory name used when no application name can be discovered.
pub const DEFAULT_DIRECTORY_NAME: &str = "temp";

/// Inputs for [`LogLocation::resolve`]; all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogLocation {
    /// Used verbatim, skipping base/app resolution.
    pub directory: Option<PathBuf>,
    /// Parent of the per-app directory. `~` is expanded.
    pub base_dir: Option<String>,
    pub app_name: Option<String>,
}

impl LogLocation {
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(path.into()),
            ..Self::default()
        }
    }

    /// # Errors
    /// [`crate::Error::StorageDirNotFound`] when neither config nor the platform
    /// provides a base directory.
    pub fn resolve(&self) -> Result<PathBuf, crate::Error> {
        if let Some(dir) = &self.directory {
            return Ok(dir.clone());
        }

        let base = match &self.base_dir {
            Some(base) => PathBuf::from(shellexpand::tilde(base).as_ref()),
            None => default_base_dir().ok_or(crate::Error::StorageDirNotFound)?,
        };

        let name = self
            .app_name
            .as_deref()
            .and_then(sanitize_name)
            .or_else(discover_app_name)
            .unwrap_or_else(|| DEFAULT_DIRECTORY_NAME.to_string());

        Ok(base.join(name))
    }
}

/// XDG state dir on Linux, local data dir elsewhere.
#[must_use]
pub fn default_base_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| {
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .to_path_buf()
    })
}

/// The running executable's file stem, e.g. `myapp` for `/usr/bin/myapp`.
#[must_use]
pub fn discover_app_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let stem = exe.file_stem()?.to_string_lossy().into_owned();
    sanitize_name(&stem)
}

/// A display name becomes one path component: separators are replaced and
/// blank names rejected.
fn sanitize_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '\0') { '_' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        None
    } else {
        Some(cleaned)
    }
}
