//! List command handler.

use anyhow::Result;
use spotrate_core::presentation::RatingTone;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, tone_marker, truncate_string};

/// Print all locations in a table, newest first.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let entries = ctx
        .app()
        .locations()
        .list()
        .await
        .map_err(CliError::from)?;

    if entries.is_empty() {
        println!("No locations rated yet.");
        println!("Start the server with 'spotrate web' and add one from the browser.");
        return Ok(());
    }

    println!("Found {} location(s):\n", entries.len());

    println!(
        "{:<36} {:<2} {:<26} {:<17} {:<8} {:<8} Added",
        "ID", "", "Location", "Type", "Quality", "Danger"
    );
    print_separator(118);

    for entry in entries {
        let quality = format!(
            "{}/5 {}",
            entry.location_rating,
            tone_marker(RatingTone::for_quality(entry.location_rating))
        );
        let danger = format!(
            "{}/5 {}",
            entry.danger_rating,
            tone_marker(RatingTone::for_danger(entry.danger_rating))
        );
        println!(
            "{:<36} {:<2} {:<26} {:<17} {:<8} {:<8} {}",
            entry.id,
            entry.location_type.icon(),
            truncate_string(&entry.location, 25),
            entry.location_type.label(),
            quality,
            danger,
            entry.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
