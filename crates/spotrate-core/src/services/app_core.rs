//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, Web) receive an `AppCore` instance built at their
//! composition root and use it to access all functionality.

use std::sync::Arc;

use crate::ports::{BlobStore, Repos};

use super::LocationService;

/// The core application facade.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let blobs = CoreFactory::blob_store(uploads_dir);
/// let core = AppCore::new(repos, blobs);
///
/// let entries = core.locations().list().await?;
/// ```
pub struct AppCore {
    locations: LocationService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and blob store.
    pub fn new(repos: Repos, blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            locations: LocationService::new(repos.locations, blobs),
        }
    }

    /// Access the location service.
    pub const fn locations(&self) -> &LocationService {
        &self.locations
    }
}
