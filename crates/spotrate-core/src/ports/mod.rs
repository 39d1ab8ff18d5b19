//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No filesystem layout details
//! - Traits are minimal and CRUD-focused

pub mod blob_store;
pub mod location_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::images::MediaRejection;
use crate::validation::ValidationErrors;

pub use blob_store::{BlobError, BlobStore};
pub use location_repository::LocationRepository;

/// Container for all repository trait objects.
///
/// Lives in core so that `AppCore` can accept it without depending on
/// `spotrate-db`.
#[derive(Clone)]
pub struct Repos {
    /// Location entries.
    pub locations: Arc<dyn LocationRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(locations: Arc<dyn LocationRepository>) -> Self {
        Self { locations }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be mapped back to domain types.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A storage-level constraint was violated (e.g., a CHECK clause).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes). Storage and blob failures are faults; the rest are expected
/// outcomes of bad input or unknown ids.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Blob store operation failed.
    #[error(transparent)]
    Blob(#[from] BlobError),

    /// One or more fields violated their constraints.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The attached file was refused by the intake policy.
    #[error(transparent)]
    MediaRejected(#[from] MediaRejection),
}

impl CoreError {
    /// Whether this error reflects a server-side fault rather than bad input.
    pub const fn is_fault(&self) -> bool {
        match self {
            Self::Repository(RepositoryError::NotFound(_)) => false,
            Self::Repository(_) | Self::Blob(_) => true,
            Self::Validation(_) | Self::MediaRejected(_) => false,
        }
    }
}
