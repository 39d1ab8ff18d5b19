//! Location handlers - create, list, get, delete, stats and schema.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use spotrate_core::{LocationEntry, LocationSummary};

use crate::dto::{DataResponse, ListResponse, MessageResponse, SchemaDto};
use crate::error::HttpError;
use crate::state::AppState;
use crate::upload::read_submission;

/// List all locations, newest first.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<LocationEntry>>, HttpError> {
    let entries = state
        .core
        .locations()
        .list()
        .await
        .map_err(|e| HttpError::from_core(e, "Error fetching locations"))?;
    Ok(Json(ListResponse::new(entries)))
}

/// Get a single location.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<LocationEntry>>, HttpError> {
    state
        .core
        .locations()
        .get(&id)
        .await
        .map_err(|e| HttpError::from_core(e, "Error fetching location"))?
        .map(|entry| Json(DataResponse::new(entry)))
        .ok_or_else(HttpError::location_not_found)
}

/// Create a location from a multipart submission.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<DataResponse<LocationEntry>>), HttpError> {
    let submission = read_submission(multipart).await?;

    let entry = state
        .core
        .locations()
        .create(&submission.form, submission.image)
        .await
        .map_err(|e| HttpError::from_core(e, "Error creating location"))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(entry).with_message("Location created successfully")),
    ))
}

/// Delete a location and its photo.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, HttpError> {
    state
        .core
        .locations()
        .remove(&id)
        .await
        .map_err(|e| HttpError::from_core(e, "Error deleting location"))?
        .map(|_| Json(MessageResponse::new("Location deleted successfully")))
        .ok_or_else(HttpError::location_not_found)
}

/// Totals per category.
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<LocationSummary>>, HttpError> {
    let summary = state
        .core
        .locations()
        .summary()
        .await
        .map_err(|e| HttpError::from_core(e, "Error fetching statistics"))?;
    Ok(Json(DataResponse::new(summary)))
}

/// Categories and field bounds for client-side validation.
pub async fn schema() -> Json<DataResponse<SchemaDto>> {
    Json(DataResponse::new(SchemaDto::current()))
}
