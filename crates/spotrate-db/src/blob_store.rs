//! Filesystem implementation of the blob store.
//!
//! Blobs live as plain files in one flat directory, which is also what the
//! HTTP layer serves under `/images`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use spotrate_core::ports::{BlobError, BlobStore};

/// Flat directory of uploaded files.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the blobs.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, BlobError> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }
}

/// Names are single path components made of `[A-Za-z0-9._-]` that don't
/// start with a dot. Temporary files use a leading dot, so they can never
/// be addressed.
fn validate_name(name: &str) -> Result<(), BlobError> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(BlobError::InvalidName(name.to_string()))
    }
}

fn io_error(name: &str, e: &std::io::Error) -> BlobError {
    BlobError::Io {
        name: name.to_string(),
        reason: e.to_string(),
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), BlobError> {
        let target = self.path_for(name)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| io_error(name, &e))?;

        let temp = self
            .root
            .join(format!(".{name}.{}.part", Uuid::new_v4().simple()));

        if let Err(e) = tokio::fs::write(&temp, bytes).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(io_error(name, &e));
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(io_error(name, &e));
        }

        debug!(target: "spotrate.images", name, size = bytes.len(), "Stored blob");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<bool, BlobError> {
        let path = self.path_for(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(name, &e)),
        }
    }
}
