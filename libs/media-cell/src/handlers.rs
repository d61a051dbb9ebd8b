use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use tracing::error;

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{DestroyRequest, SignUploadRequest, SignedUpload, SuccessResponse};
use crate::services::CloudinaryClient;

fn media_client(state: &AppState) -> Result<CloudinaryClient, AppError> {
    CloudinaryClient::new(&state.config).map_err(|e| {
        error!("Media client unavailable: {}", e);
        AppError::Configuration("Media service is not configured".to_string())
    })
}

/// Body is optional; an absent or unreadable body signs for the default folder.
#[axum::debug_handler]
pub async fn sign_upload(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignUploadRequest>, JsonRejection>,
) -> Result<Json<SignedUpload>, AppError> {
    let request = payload.map(|Json(request)| request).unwrap_or_default();

    let folder = request
        .folder
        .as_deref()
        .map(str::trim)
        .filter(|folder| !folder.is_empty())
        .unwrap_or(state.config.media_upload_folder.as_str())
        .to_string();

    let client = media_client(&state)?;
    Ok(Json(client.sign_upload(&folder, Utc::now().timestamp())))
}

#[axum::debug_handler]
pub async fn destroy_upload(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DestroyRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;

    let public_id = request
        .public_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("publicId is required".to_string()))?;

    let client = media_client(&state)?;
    client
        .destroy(public_id, Utc::now().timestamp())
        .await
        .map_err(|e| {
            error!("Failed to delete media asset {}: {}", public_id, e);
            AppError::ExternalService("Failed to delete media".to_string())
        })?;

    Ok(Json(SuccessResponse::ok()))
}
