//! Stats command handler.

use anyhow::Result;
use spotrate_core::LocationType;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_separator;

/// Print totals overall and per category.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let summary = ctx
        .app()
        .locations()
        .summary()
        .await
        .map_err(CliError::from)?;

    println!("Total locations: {}", summary.total_locations);
    if summary.type_stats.is_empty() {
        return Ok(());
    }

    println!();
    println!(
        "{:<2} {:<18} {:>6} {:>12} {:>12}",
        "", "Type", "Count", "Avg quality", "Avg danger"
    );
    print_separator(54);

    for group in &summary.type_stats {
        let icon = LocationType::from_label(&group.id).map_or("  ", LocationType::icon);
        println!(
            "{:<2} {:<18} {:>6} {:>12.2} {:>12.2}",
            icon, group.id, group.count, group.avg_rating, group.avg_danger
        );
    }

    Ok(())
}
