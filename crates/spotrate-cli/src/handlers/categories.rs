//! Categories command handler.

use spotrate_core::LocationType;

/// Print the accepted category labels with their icons.
pub fn execute() {
    for location_type in LocationType::ALL {
        println!("{} {}", location_type.icon(), location_type.label());
    }
}
