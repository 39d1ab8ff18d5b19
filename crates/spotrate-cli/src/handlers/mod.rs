//! Command handlers.
//!
//! Each handler is a thin wrapper that delegates to `AppCore` and formats
//! the result.

pub mod categories;
pub mod list;
pub mod paths;
pub mod remove;
pub mod show;
pub mod stats;
pub mod web;
