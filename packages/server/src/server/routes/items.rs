use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use catalog::{Removal, RefreshReport, StoredManga};
use serde::Serialize;
use serde_json::{json, Value};

use crate::server::app::AppState;
use crate::server::error::ApiError;

#[derive(Serialize)]
pub struct TrackResponse {
    message: String,
    item: StoredManga,
}

#[derive(Serialize)]
pub struct MessageResponse {
    message: String,
}

/// The service has no pages, only the API.
pub async fn root_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "API Only" })))
}

pub async fn list_items(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<StoredManga>>, ApiError> {
    Ok(Json(state.catalog.list_all().await?))
}

pub async fn get_item(
    Extension(state): Extension<AppState>,
    Path(title): Path<String>,
) -> Result<Json<StoredManga>, ApiError> {
    state
        .catalog
        .get(&title)
        .await?
        .map(Json)
        .ok_or(ApiError::NotStored(title))
}

/// Fetch the title from the source and store it.
///
/// 201 when the title was new, 200 when an existing entry was refreshed.
pub async fn track_item(
    Extension(state): Extension<AppState>,
    Path(title): Path<String>,
) -> Result<(StatusCode, Json<TrackResponse>), ApiError> {
    let confirmation = state.catalog.track(&title).await?;

    let status = if confirmation.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let message = confirmation.message();

    Ok((
        status,
        Json(TrackResponse {
            message,
            item: confirmation.into_stored(),
        }),
    ))
}

/// Re-fetch every stored title and report per-title outcomes.
pub async fn refresh_items(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<RefreshReport>>, ApiError> {
    Ok(Json(state.catalog.refresh_all().await?))
}

pub async fn delete_item(
    Extension(state): Extension<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    match state.catalog.remove(&title).await? {
        Removal::Removed => Ok(Json(MessageResponse {
            message: format!("Manga: {title} removed successfully."),
        })),
        Removal::NotFound => Err(ApiError::NotStored(title)),
    }
}
