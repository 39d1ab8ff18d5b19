//! Location repository trait definition.
//!
//! This port defines the interface for location persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{LocationEntry, LocationSummary, NewLocation};

/// Repository for location persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Create, read, delete and one aggregate; there is no update
/// - Ids and timestamps are assigned by the implementation on insert
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// List all entries, newest first.
    async fn list(&self) -> Result<Vec<LocationEntry>, RepositoryError>;

    /// Get an entry by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn get_by_id(&self, id: &str) -> Result<LocationEntry, RepositoryError>;

    /// Insert a validated entry and return it with its id and timestamps.
    async fn insert(&self, location: &NewLocation) -> Result<LocationEntry, RepositoryError>;

    /// Delete an entry by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Count entries overall and per `type`.
    async fn summary(&self) -> Result<LocationSummary, RepositoryError>;
}
