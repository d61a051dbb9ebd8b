use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::error;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::validation::normalize_email;

use crate::models::{ContactMessage, ContactRequest, SubscribeRequest, SuccessResponse};
use crate::services::{ContactService, NewsletterService};

#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;
    let message = ContactMessage::try_from(request)?;

    let supabase = state.public_client()?;
    ContactService::new(supabase)
        .submit(&message)
        .await
        .map_err(|e| {
            error!("Failed to store contact message: {}", e);
            AppError::Database("Failed to send message".to_string())
        })?;

    Ok(Json(SuccessResponse::ok()))
}

/// Responds identically for new and existing subscribers.
#[axum::debug_handler]
pub async fn subscribe_newsletter(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(request) = payload?;
    let email = normalize_email(request.email.as_deref())?;

    let supabase = state.public_client()?;
    NewsletterService::new(supabase)
        .subscribe(&email)
        .await
        .map_err(|e| {
            error!("Failed to subscribe to newsletter: {}", e);
            AppError::Database("Failed to subscribe".to_string())
        })?;

    Ok(Json(SuccessResponse::ok()))
}
