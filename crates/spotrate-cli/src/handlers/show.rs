//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_location;

/// Print every field of one location.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let entry = ctx
        .app()
        .locations()
        .get(id)
        .await
        .map_err(CliError::from)?
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    display_location(&entry, None);
    Ok(())
}
