//! Remove command handler.
//!
//! Deletes the entry and its uploaded photo.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_location;
use crate::utils::input;

/// Remove a location, asking for confirmation unless `force` is set.
pub async fn execute(ctx: &CliContext, id: &str, force: bool) -> Result<()> {
    let Some(entry) = ctx
        .app()
        .locations()
        .get(id)
        .await
        .map_err(CliError::from)?
    else {
        return Err(CliError::NotFound(id.to_string()).into());
    };

    if !force {
        display_location(&entry, Some("Location to remove:"));
        println!();

        if !input::prompt_confirmation("Are you sure you want to delete this location?")? {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    match ctx
        .app()
        .locations()
        .remove(id)
        .await
        .map_err(CliError::from)?
    {
        Some(removed) => println!("Removed '{}' ({}).", removed.location, removed.id),
        None => return Err(CliError::NotFound(id.to_string()).into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::test_context;
    use spotrate_core::LocationForm;
    use spotrate_core::images::ImageUpload;

    #[tokio::test]
    async fn test_forced_remove_deletes_entry_and_photo() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = test_context(temp.path()).await;

        let form = LocationForm {
            location: Some("Quai de Valmy".into()),
            location_type: Some("Canal".into()),
            danger_rating: Some("3".into()),
            location_rating: Some("2".into()),
            description: Some("Windy".into()),
            ..LocationForm::default()
        };
        let upload = ImageUpload {
            file_name: Some("quai.webp".into()),
            content_type: Some("image/webp".into()),
            bytes: vec![7; 32],
        };
        let entry = ctx
            .app()
            .locations()
            .create(&form, Some(upload))
            .await
            .unwrap();
        let photo = ctx.paths.uploads_dir.join(entry.image.as_deref().unwrap());
        assert!(photo.exists());

        execute(&ctx, &entry.id, true).await.unwrap();

        assert!(!photo.exists());
        assert!(ctx.app().locations().get(&entry.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_unknown_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = test_context(temp.path()).await;

        let err = execute(&ctx, "missing", true).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }
}
