//! Blob store port for uploaded photos.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by blob store implementations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The name would escape the store or is otherwise unusable.
    #[error("Invalid blob name: {0}")]
    InvalidName(String),

    /// Underlying I/O failure.
    #[error("Blob store I/O error on {name}: {reason}")]
    Io { name: String, reason: String },
}

/// Flat, name-addressed storage for uploaded files.
///
/// Names are generated by the image intake policy and never contain path
/// separators. Writes must be all-or-nothing: after a failed `put` no blob
/// exists under `name`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `name`.
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), BlobError>;

    /// Remove a blob. Returns `false` if nothing was stored under `name`.
    async fn delete(&self, name: &str) -> Result<bool, BlobError>;
}
