//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, etc.).
//!
//! # Structure
//!
//! - `location` - Entry types (`LocationEntry`, `NewLocation`) and their value types
//! - `stats` - Aggregates returned by the summary query

mod location;
mod stats;

pub use location::{
    Coordinates, LocationEntry, LocationType, NewLocation, Rating, UnknownLocationType,
};
pub use stats::{LocationSummary, TypeStats};
