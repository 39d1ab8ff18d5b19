//! Resolver capturing every path spotrate uses in one struct.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use super::PathError;
use super::platform::{UPLOADS_DIR_ENV, data_root, normalize_user_path};

/// File name of the `SQLite` database under `<data_root>/data`.
pub const DATABASE_FILE_NAME: &str = "spotrate.db";

/// All resolved paths captured in a single struct.
///
/// Used by the bootstrap code of every adapter and printed by
/// `spotrate paths`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded images.
    pub uploads_dir: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the environment, with an optional explicit
    /// data root (e.g. from `--data-dir`) taking precedence.
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self, PathError> {
        let root = match data_dir {
            Some(dir) => normalize_user_path(&dir.to_string_lossy())?,
            None => data_root()?,
        };

        let mut paths = Self::under(root);
        if let Some(raw) = env::var(UPLOADS_DIR_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            paths.uploads_dir = normalize_user_path(&raw)?;
        }
        Ok(paths)
    }

    /// Default layout below a given data root. Pure; no environment lookups.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let data_root = root.into();
        Self {
            database_path: data_root.join("data").join(DATABASE_FILE_NAME),
            uploads_dir: data_root.join("uploads"),
            data_root,
        }
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "database_path = {}", self.database_path.display())?;
        write!(f, "uploads_dir = {}", self.uploads_dir.display())
    }
}
