#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod images;
pub mod paths;
pub mod ports;
pub mod presentation;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    Coordinates, LocationEntry, LocationSummary, LocationType, NewLocation, Rating, TypeStats,
    UnknownLocationType,
};
pub use images::{ImageUpload, MAX_IMAGE_BYTES, MediaRejection};
pub use ports::{BlobError, BlobStore, CoreError, LocationRepository, Repos, RepositoryError};
pub use services::{AppCore, LocationService};
pub use validation::{LocationForm, ValidationErrors, Violation, validate};

// Re-export path utilities
pub use paths::{
    DirectoryCreationStrategy, PathError, ResolvedPaths, data_root, ensure_directory,
    verify_writable,
};

