//! Path utilities for spotrate data directories.
//!
//! This module provides the canonical path resolution for all spotrate
//! components:
//! - Application data root
//! - Database location
//! - Uploaded images directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Resolution never touches the filesystem; `ensure_directory` does
//! - OS-specific logic is kept private in `platform`

mod ensure;
mod error;
mod platform;
mod resolver;

// Error type
pub use error::PathError;

// Roots
pub use platform::{
    APP_DIR_NAME, DATA_DIR_ENV, UPLOADS_DIR_ENV, data_root, normalize_user_path,
    resolve_data_root,
};

// Directory operations
pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};

// Resolver for bootstrap, tests and the CLI
pub use resolver::{DATABASE_FILE_NAME, ResolvedPaths};
