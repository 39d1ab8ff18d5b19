//! Location service - orchestrates entry creation, lookup, removal and stats.
//!
//! Creation follows a two-phase convention: the photo is written first, the
//! record second, and any failure after the write removes the photo again so
//! no blob outlives a failed submission.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{LocationEntry, LocationSummary};
use crate::images::{ImageUpload, generate_filename};
use crate::ports::{BlobStore, CoreError, LocationRepository, RepositoryError};
use crate::validation::{LocationForm, validate};

/// Service for location operations.
pub struct LocationService {
    repo: Arc<dyn LocationRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl LocationService {
    /// Create a new location service over a repository and a blob store.
    pub fn new(repo: Arc<dyn LocationRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { repo, blobs }
    }

    /// Create an entry from raw form fields and an optional photo.
    ///
    /// The photo is checked against the intake policy before anything is
    /// written. If validation or the insert fails afterwards, the stored
    /// photo is deleted before the error is returned.
    pub async fn create(
        &self,
        form: &LocationForm,
        upload: Option<ImageUpload>,
    ) -> Result<LocationEntry, CoreError> {
        let image = match upload {
            Some(upload) => Some(self.store_image(upload).await?),
            None => None,
        };

        let new_location = match validate(form) {
            Ok(valid) => valid.with_image(image),
            Err(violations) => {
                debug!(
                    target: "spotrate.locations",
                    violations = violations.violations().len(),
                    "Rejected submission"
                );
                if let Some(name) = &image {
                    self.discard_image(name).await;
                }
                return Err(violations.into());
            }
        };

        match self.repo.insert(&new_location).await {
            Ok(entry) => {
                info!(
                    target: "spotrate.locations",
                    id = %entry.id,
                    location_type = %entry.location_type,
                    has_image = entry.image.is_some(),
                    "Created location"
                );
                Ok(entry)
            }
            Err(e) => {
                if let Some(name) = &new_location.image {
                    self.discard_image(name).await;
                }
                Err(e.into())
            }
        }
    }

    /// List all entries, newest first.
    pub async fn list(&self) -> Result<Vec<LocationEntry>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get an entry by id. `None` if it doesn't exist.
    pub async fn get(&self, id: &str) -> Result<Option<LocationEntry>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(entry) => Ok(Some(entry)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Remove an entry and its photo. Returns the removed entry, or `None`
    /// if no entry has this id (nothing is touched in that case).
    ///
    /// The record is deleted first; a failure to delete the photo afterwards
    /// is logged and does not fail the removal.
    pub async fn remove(&self, id: &str) -> Result<Option<LocationEntry>, CoreError> {
        let Some(entry) = self.get(id).await? else {
            return Ok(None);
        };

        match self.repo.delete(id).await {
            Ok(()) => {}
            // Removed concurrently between the lookup and the delete.
            Err(RepositoryError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        if let Some(name) = &entry.image {
            self.discard_image(name).await;
        }

        info!(target: "spotrate.locations", id = %entry.id, "Deleted location");
        Ok(Some(entry))
    }

    /// Totals overall and per category.
    pub async fn summary(&self) -> Result<LocationSummary, CoreError> {
        self.repo.summary().await.map_err(CoreError::from)
    }

    async fn store_image(&self, upload: ImageUpload) -> Result<String, CoreError> {
        upload.check()?;

        let name = generate_filename(upload.file_name.as_deref());
        self.blobs.put(&name, &upload.bytes).await?;
        debug!(
            target: "spotrate.images",
            name = %name,
            bytes = upload.bytes.len(),
            "Stored image"
        );
        Ok(name)
    }

    /// Best-effort blob removal; failures are logged, never propagated.
    async fn discard_image(&self, name: &str) {
        match self.blobs.delete(name).await {
            Ok(true) => debug!(target: "spotrate.images", name = %name, "Removed image"),
            Ok(false) => warn!(target: "spotrate.images", name = %name, "Image was already gone"),
            Err(e) => warn!(
                target: "spotrate.images",
                name = %name,
                error = %e,
                "Failed to remove image"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationType, NewLocation, TypeStats};
    use crate::images::MAX_IMAGE_BYTES;
    use crate::ports::BlobError;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepo {
        entries: Mutex<Vec<LocationEntry>>,
        fail_insert: bool,
    }

    #[async_trait]
    impl LocationRepository for MemoryRepo {
        async fn list(&self) -> Result<Vec<LocationEntry>, RepositoryError> {
            let mut entries = self.entries.lock().unwrap().clone();
            entries.reverse();
            Ok(entries)
        }

        async fn get_by_id(&self, id: &str) -> Result<LocationEntry, RepositoryError> {
            self.entries
                .lock()
                .unwrap()
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
        }

        async fn insert(&self, location: &NewLocation) -> Result<LocationEntry, RepositoryError> {
            if self.fail_insert {
                return Err(RepositoryError::Storage("disk full".into()));
            }
            let mut entries = self.entries.lock().unwrap();
            let now = Utc::now() + Duration::milliseconds(entries.len() as i64);
            let entry = LocationEntry {
                id: format!("loc-{}", entries.len() + 1),
                location: location.location.clone(),
                location_type: location.location_type,
                danger_rating: location.danger_rating,
                location_rating: location.location_rating,
                description: location.description.clone(),
                image: location.image.clone(),
                coordinates: location.coordinates,
                created_at: now,
                updated_at: now,
            };
            entries.push(entry.clone());
            Ok(entry)
        }

        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            let mut entries = self.entries.lock().unwrap();
            let before = entries.len();
            entries.retain(|e| e.id != id);
            if entries.len() == before {
                return Err(RepositoryError::NotFound(id.to_string()));
            }
            Ok(())
        }

        async fn summary(&self) -> Result<LocationSummary, RepositoryError> {
            let entries = self.entries.lock().unwrap();
            let mut groups: BTreeMap<String, (u64, f64, f64)> = BTreeMap::new();
            for e in entries.iter() {
                let g = groups.entry(e.location_type.to_string()).or_default();
                g.0 += 1;
                g.1 += f64::from(e.location_rating.get());
                g.2 += f64::from(e.danger_rating.get());
            }
            Ok(LocationSummary {
                total_locations: entries.len() as u64,
                type_stats: groups
                    .into_iter()
                    .map(|(id, (count, rating, danger))| TypeStats {
                        id,
                        count,
                        avg_rating: rating / count as f64,
                        avg_danger: danger / count as f64,
                    })
                    .collect(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryBlobs {
        files: Mutex<BTreeMap<String, Vec<u8>>>,
        fail_delete: bool,
    }

    impl MemoryBlobs {
        fn names(&self) -> Vec<String> {
            self.files.lock().unwrap().keys().cloned().collect()
        }
    }

    #[async_trait]
    impl BlobStore for MemoryBlobs {
        async fn put(&self, name: &str, bytes: &[u8]) -> Result<(), BlobError> {
            self.files
                .lock()
                .unwrap()
                .insert(name.to_string(), bytes.to_vec());
            Ok(())
        }

        async fn delete(&self, name: &str) -> Result<bool, BlobError> {
            if self.fail_delete {
                return Err(BlobError::Io {
                    name: name.to_string(),
                    reason: "permission denied".into(),
                });
            }
            Ok(self.files.lock().unwrap().remove(name).is_some())
        }
    }

    fn service_with(
        repo: MemoryRepo,
        blobs: MemoryBlobs,
    ) -> (LocationService, Arc<MemoryRepo>, Arc<MemoryBlobs>) {
        let repo = Arc::new(repo);
        let blobs = Arc::new(blobs);
        (
            LocationService::new(repo.clone(), blobs.clone()),
            repo,
            blobs,
        )
    }

    fn service() -> (LocationService, Arc<MemoryRepo>, Arc<MemoryBlobs>) {
        service_with(MemoryRepo::default(), MemoryBlobs::default())
    }

    fn form(location_type: &str, rating: &str) -> LocationForm {
        LocationForm {
            location: Some(" Gare de Lyon ".into()),
            location_type: Some(location_type.into()),
            danger_rating: Some("3".into()),
            location_rating: Some(rating.into()),
            description: Some(" Payant mais propre ".into()),
            latitude: None,
            longitude: None,
        }
    }

    fn png() -> ImageUpload {
        ImageUpload {
            file_name: Some("shot.png".into()),
            content_type: Some("image/png".into()),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_and_stores_image() {
        let (svc, _repo, blobs) = service();

        let entry = svc
            .create(&form("WC Publique", "4"), Some(png()))
            .await
            .unwrap();

        assert_eq!(entry.location, "Gare de Lyon");
        assert_eq!(entry.description, "Payant mais propre");
        assert_eq!(entry.location_type, LocationType::PublicRestroom);
        assert_eq!(entry.location_rating.get(), 4);
        let image = entry.image.expect("image name");
        assert!(image.ends_with(".png"));
        assert_eq!(blobs.names(), vec![image]);
    }

    #[tokio::test]
    async fn test_invalid_rating_leaves_no_record_and_no_blob() {
        let (svc, repo, blobs) = service();

        let err = svc
            .create(&form("WC Publique", "6"), Some(png()))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Validation(_)));
        assert!(repo.list().await.unwrap().is_empty());
        assert!(blobs.names().is_empty());
    }

    #[tokio::test]
    async fn test_non_image_upload_is_rejected_before_any_write() {
        let (svc, repo, blobs) = service();
        let upload = ImageUpload {
            content_type: Some("application/pdf".into()),
            ..png()
        };

        let err = svc
            .create(&form("WC Publique", "4"), Some(upload))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MediaRejected(_)));
        assert!(repo.list().await.unwrap().is_empty());
        assert!(blobs.names().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_upload_is_rejected() {
        let (svc, _repo, blobs) = service();
        let upload = ImageUpload {
            bytes: vec![0; MAX_IMAGE_BYTES + 1],
            ..png()
        };

        let err = svc
            .create(&form("Canal", "4"), Some(upload))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::MediaRejected(_)));
        assert!(blobs.names().is_empty());
    }

    #[tokio::test]
    async fn test_failed_insert_removes_blob() {
        let (svc, _repo, blobs) = service_with(
            MemoryRepo {
                fail_insert: true,
                ..MemoryRepo::default()
            },
            MemoryBlobs::default(),
        );

        let err = svc
            .create(&form("Canal", "4"), Some(png()))
            .await
            .unwrap_err();

        assert!(err.is_fault());
        assert!(blobs.names().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let (svc, _repo, _blobs) = service();
        assert!(svc.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_deletes_record_and_blob() {
        let (svc, _repo, blobs) = service();
        let entry = svc
            .create(&form("Autre", "2"), Some(png()))
            .await
            .unwrap();

        let removed = svc.remove(&entry.id).await.unwrap().expect("removed");

        assert_eq!(removed.id, entry.id);
        assert!(svc.get(&entry.id).await.unwrap().is_none());
        assert!(blobs.names().is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_id_touches_nothing() {
        let (svc, _repo, blobs) = service();
        svc.create(&form("Autre", "2"), Some(png())).await.unwrap();

        assert!(svc.remove("nope").await.unwrap().is_none());
        assert_eq!(svc.list().await.unwrap().len(), 1);
        assert_eq!(blobs.names().len(), 1);
    }

    #[tokio::test]
    async fn test_blob_delete_failure_does_not_fail_remove() {
        let (svc, _repo, _blobs) = service_with(
            MemoryRepo::default(),
            MemoryBlobs {
                fail_delete: true,
                ..MemoryBlobs::default()
            },
        );
        let entry = svc
            .create(&form("Poteau", "1"), Some(png()))
            .await
            .unwrap();

        assert!(svc.remove(&entry.id).await.unwrap().is_some());
        assert!(svc.get(&entry.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_summary_groups_by_type() {
        let (svc, _repo, _blobs) = service();
        for rating in ["1", "3", "5"] {
            svc.create(&form("WC Publique", rating), None).await.unwrap();
        }
        svc.create(&form("Dans la nature", "4"), None).await.unwrap();

        let summary = svc.summary().await.unwrap();

        assert_eq!(summary.total_locations, 4);
        let public = summary.group("WC Publique").unwrap();
        assert_eq!(public.count, 3);
        assert!((public.avg_rating - 3.0).abs() < f64::EPSILON);
        let outdoors = summary.group("Dans la nature").unwrap();
        assert_eq!(outdoors.count, 1);
        assert!((outdoors.avg_rating - 4.0).abs() < f64::EPSILON);
        assert!(summary.group("Canal").is_none());
    }
}
