//! Image intake policy.
//!
//! Decides whether an uploaded file may be stored and under which name.
//! Writing the bytes is the job of a `BlobStore`.

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

/// Upper bound on an uploaded photo, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Content types accepted for photos must start with this prefix.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// Prefix of every generated blob filename.
pub const FILENAME_PREFIX: &str = "spot";

const MAX_EXTENSION_LEN: usize = 8;

/// Why an upload was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaRejection {
    #[error("Only image files are allowed (got {0})")]
    UnsupportedType(String),

    #[error("Image exceeds the {limit} byte limit")]
    TooLarge { limit: usize },

    #[error("Only one image may be attached")]
    TooManyFiles,
}

/// A photo received with a submission, not yet stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Client-side filename, used only for its extension.
    pub file_name: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Apply the full intake policy to an already buffered upload.
    pub fn check(&self) -> Result<(), MediaRejection> {
        check_content_type(self.content_type.as_deref())?;
        check_size(self.bytes.len())
    }
}

/// Reject anything that doesn't declare an image content type.
pub fn check_content_type(content_type: Option<&str>) -> Result<(), MediaRejection> {
    match content_type {
        Some(ct) if is_image_content_type(ct) => Ok(()),
        Some(ct) => Err(MediaRejection::UnsupportedType(ct.to_string())),
        None => Err(MediaRejection::UnsupportedType("no content type".to_string())),
    }
}

fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .get(..IMAGE_CONTENT_TYPE_PREFIX.len())
        .is_some_and(|p| p.eq_ignore_ascii_case(IMAGE_CONTENT_TYPE_PREFIX))
        && content_type.trim().len() > IMAGE_CONTENT_TYPE_PREFIX.len()
}

/// Reject uploads above `MAX_IMAGE_BYTES`.
pub fn check_size(len: usize) -> Result<(), MediaRejection> {
    if len > MAX_IMAGE_BYTES {
        Err(MediaRejection::TooLarge {
            limit: MAX_IMAGE_BYTES,
        })
    } else {
        Ok(())
    }
}

/// Generate a blob filename that is unique across concurrent submissions.
///
/// Shape: `spot-<unix millis>-<12 random hex chars><.ext>`. The extension of
/// the client filename is kept (lowercased) when it is short and alphanumeric.
pub fn generate_filename(original: Option<&str>) -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    let suffix = &random[..12];

    match original.and_then(safe_extension) {
        Some(ext) => format!("{FILENAME_PREFIX}-{millis}-{suffix}.{ext}"),
        None => format!("{FILENAME_PREFIX}-{millis}-{suffix}"),
    }
}

fn safe_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
