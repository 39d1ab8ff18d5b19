//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms.

pub mod location_display;
pub mod tables;

// Re-export commonly used items
pub use location_display::{display_location, tone_marker};
pub use tables::{print_separator, truncate_string};
