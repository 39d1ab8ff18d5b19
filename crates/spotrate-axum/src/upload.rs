//! Multipart intake for location submissions.
//!
//! Text parts fill a `LocationForm`; the single file part becomes an
//! `ImageUpload`. The declared content type is checked before any byte of
//! the file is read, and the size ceiling is enforced chunk by chunk so an
//! oversized upload is never fully buffered.

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use spotrate_core::images::{self, ImageUpload, MediaRejection};
use spotrate_core::validation::{LocationForm, fields};
use tracing::debug;

use crate::error::HttpError;

/// Everything a create request carried.
#[derive(Debug, Default)]
pub struct Submission {
    pub form: LocationForm,
    pub image: Option<ImageUpload>,
}

/// Drain a multipart request into a `Submission`.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, HttpError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::from_multipart(&e))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == fields::IMAGE || field.file_name().is_some() {
            let Some(upload) = read_file(field).await? else {
                continue;
            };
            if submission.image.is_some() {
                return Err(MediaRejection::TooManyFiles.into());
            }
            submission.image = Some(upload);
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| HttpError::from_multipart(&e))?;
        if !submission.form.set(&name, value) {
            debug!(target: "spotrate.http", field = %name, "Ignoring unknown form field");
        }
    }

    Ok(submission)
}

/// Read one file part. Returns `None` for the empty, nameless part browsers
/// send for an untouched file input.
async fn read_file(mut field: Field<'_>) -> Result<Option<ImageUpload>, HttpError> {
    let file_name = field
        .file_name()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(ToOwned::to_owned);
    let content_type = field.content_type().map(ToOwned::to_owned);

    if file_name.is_some() {
        images::check_content_type(content_type.as_deref())?;
    }

    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| HttpError::from_multipart(&e))?
    {
        images::check_size(bytes.len() + chunk.len())?;
        bytes.extend_from_slice(&chunk);
    }

    if file_name.is_none() {
        if bytes.is_empty() {
            return Ok(None);
        }
        images::check_content_type(content_type.as_deref())?;
    }

    Ok(Some(ImageUpload {
        file_name,
        content_type,
        bytes,
    }))
}
