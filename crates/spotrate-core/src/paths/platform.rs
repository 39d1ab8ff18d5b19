//! Platform-specific root resolution.

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "SPOTRATE_DATA_DIR";

/// Environment variable overriding the uploads directory.
pub const UPLOADS_DIR_ENV: &str = "SPOTRATE_UPLOADS_DIR";

/// Directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "spotrate";

/// Get the root directory for application data (database, uploads).
///
/// Resolution order:
/// 1. `SPOTRATE_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/spotrate`)
pub fn data_root() -> Result<PathBuf, PathError> {
    resolve_data_root(env::var(DATA_DIR_ENV).ok().as_deref())
}

/// Resolve the data root from an explicit override, falling back to the
/// platform data directory. Blank overrides are ignored.
pub fn resolve_data_root(override_dir: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_dir.filter(|s| !s.trim().is_empty()) {
        return normalize_user_path(raw);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let root = resolve_data_root(Some("/srv/spotrate")).unwrap();
        assert_eq!(root, PathBuf::from("/srv/spotrate"));
    }

    #[test]
    fn test_blank_override_is_ignored() {
        if let Ok(root) = resolve_data_root(Some("   ")) {
            assert!(root.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_relative_paths_become_absolute() {
        let path = normalize_user_path("data/here").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("data/here"));
    }

    #[test]
    fn test_empty_path_is_an_error() {
        assert!(matches!(normalize_user_path(" "), Err(PathError::EmptyPath)));
    }
}
