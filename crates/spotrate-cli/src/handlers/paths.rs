//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics.

use anyhow::Result;
use std::path::Path;

use spotrate_core::paths::{DirectoryCreationStrategy, PathError, ResolvedPaths, ensure_directory};

/// Resolve and print all paths in `key = value` format, followed by the
/// state of each directory.
///
/// Nothing is created on disk.
pub fn execute(data_dir: Option<&Path>) -> Result<()> {
    let paths = ResolvedPaths::resolve(data_dir)?;
    println!("{paths}");
    println!();

    let database_dir = paths
        .database_path
        .parent()
        .unwrap_or(paths.data_root.as_path());
    for (label, dir) in [
        ("data_root", paths.data_root.as_path()),
        ("database_dir", database_dir),
        ("uploads_dir", paths.uploads_dir.as_path()),
    ] {
        println!("{label:<14} {}", directory_status(dir));
    }
    Ok(())
}

/// One-line state of a directory, without creating it.
fn directory_status(dir: &Path) -> String {
    match ensure_directory(dir, DirectoryCreationStrategy::Disallow) {
        Ok(()) => "ready".to_string(),
        Err(PathError::DirectoryNotFound(_)) => "missing (created on first use)".to_string(),
        Err(e) => e.to_string(),
    }
}
