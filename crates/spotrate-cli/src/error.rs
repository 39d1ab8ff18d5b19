//! CLI-specific error types and mappings.
//!
//! Maps `CoreError` to exit codes and user-facing messages.

use spotrate_core::paths::PathError;
use spotrate_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No location has the requested id.
    #[error("No location found with id '{0}'")]
    NotFound(String),

    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 3,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::NotFound(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Blob(blob_err) => Self::Io(blob_err.to_string()),
            CoreError::Validation(violations) => Self::Arguments(violations.to_string()),
            CoreError::MediaRejected(rejection) => Self::Arguments(rejection.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotrate_core::BlobError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotFound("x".into()).exit_code(), 3);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_core_mapping() {
        let err: CliError = CoreError::from(RepositoryError::Storage("locked".into())).into();
        assert!(matches!(err, CliError::Database(_)));
        assert_eq!(err.exit_code(), 73);

        let err: CliError = PathError::NoDataDir.into();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_blob_failure_is_io() {
        let err: CliError = CoreError::from(BlobError::Io {
            name: "spot-1.png".into(),
            reason: "read-only file system".into(),
        })
        .into();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
