//! Composition utilities for building `AppCore` with `SQLite` and filesystem
//! backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

use spotrate_core::Repos;
use spotrate_core::ports::BlobStore;
use spotrate_core::services::AppCore;

use crate::blob_store::FsBlobStore;
use crate::repositories::SqliteLocationRepository;

/// Factory for creating adapter instances.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Self::location_repository(pool))
    }

    /// Build a complete `AppCore` from a pool and an uploads directory.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, CoreFactory::blob_store(uploads_dir));
    /// ```
    pub fn build_app_core(pool: SqlitePool, uploads_dir: impl Into<PathBuf>) -> AppCore {
        let repos = Self::build_repos(pool);
        let blobs: Arc<dyn BlobStore> = Self::blob_store(uploads_dir);
        AppCore::new(repos, blobs)
    }

    /// Create a location repository from a pool.
    pub fn location_repository(pool: SqlitePool) -> Arc<SqliteLocationRepository> {
        Arc::new(SqliteLocationRepository::new(pool))
    }

    /// Create a filesystem blob store rooted at `uploads_dir`.
    pub fn blob_store(uploads_dir: impl Into<PathBuf>) -> Arc<FsBlobStore> {
        Arc::new(FsBlobStore::new(uploads_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use spotrate_core::LocationForm;
    use spotrate_core::images::ImageUpload;
    use tempfile::tempdir;

    fn form() -> LocationForm {
        LocationForm {
            location: Some("Pont Neuf".into()),
            location_type: Some("Canal".into()),
            danger_rating: Some("2".into()),
            location_rating: Some("4".into()),
            description: Some("Under the bridge".into()),
            ..LocationForm::default()
        }
    }

    #[tokio::test]
    async fn test_app_core_round_trip_with_image() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        let core = CoreFactory::build_app_core(setup_test_database().await.unwrap(), &uploads);

        let upload = ImageUpload {
            file_name: Some("bridge.jpg".into()),
            content_type: Some("image/jpeg".into()),
            bytes: vec![1, 2, 3],
        };
        let entry = core.locations().create(&form(), Some(upload)).await.unwrap();
        let image = entry.image.clone().unwrap();
        assert!(uploads.join(&image).exists());

        let removed = core.locations().remove(&entry.id).await.unwrap().unwrap();
        assert_eq!(removed.id, entry.id);
        assert!(!uploads.join(&image).exists());
        assert!(core.locations().get(&entry.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_submission_leaves_no_blob() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        let core = CoreFactory::build_app_core(setup_test_database().await.unwrap(), &uploads);

        let bad = LocationForm {
            danger_rating: Some("9".into()),
            ..form()
        };
        let upload = ImageUpload {
            file_name: Some("bridge.png".into()),
            content_type: Some("image/png".into()),
            bytes: vec![0; 8],
        };

        assert!(core.locations().create(&bad, Some(upload)).await.is_err());
        assert!(core.locations().list().await.unwrap().is_empty());
        let leftover = std::fs::read_dir(&uploads).map_or(0, Iterator::count);
        assert_eq!(leftover, 0);
    }
}
