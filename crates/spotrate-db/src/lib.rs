#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod blob_store;
pub mod factory;
pub mod repositories;
pub mod setup;

// Linked for its bundled SQLite build
use libsqlite3_sys as _;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export adapter implementations
pub use blob_store::FsBlobStore;
pub use repositories::SqliteLocationRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
