//! Location detail display for CLI output.

use spotrate_core::LocationEntry;
use spotrate_core::presentation::{RatingTone, directions_url, format_coordinates, maps_url};

/// One-character marker for a rating tone, for narrow table columns.
pub const fn tone_marker(tone: RatingTone) -> &'static str {
    match tone {
        RatingTone::Good => "+",
        RatingTone::Fair => "~",
        RatingTone::Poor => "!",
    }
}

/// Display every field of a location to stdout.
pub fn display_location(entry: &LocationEntry, title: Option<&str>) {
    if let Some(title) = title {
        println!("{title}");
    }

    println!("  ID: {}", entry.id);
    println!(
        "  Location: {} {}",
        entry.location_type.icon(),
        entry.location
    );
    println!("  Type: {}", entry.location_type);
    println!(
        "  Quality: {}/5 ({})",
        entry.location_rating,
        RatingTone::for_quality(entry.location_rating).as_str()
    );
    println!(
        "  Danger: {}/5 ({})",
        entry.danger_rating,
        RatingTone::for_danger(entry.danger_rating).as_str()
    );
    println!("  Description: {}", entry.description);

    if let Some(image) = &entry.image {
        println!("  Photo: /images/{image}");
    }

    if let Some(coords) = &entry.coordinates {
        println!("  Coordinates: {}", format_coordinates(coords));
        if let Some(url) = maps_url(coords, &entry.location) {
            println!("  Map: {url}");
        }
        if let Some(url) = directions_url(coords) {
            println!("  Directions: {url}");
        }
    }

    println!(
        "  Added: {}",
        entry.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
}
