use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Utc;
use tracing::error;

use shared_database::AppState;
use shared_models::error::AppError;
use shared_utils::extractor::require_shared_secret;

use crate::models::{AppointmentError, AutoCompleteResponse};
use crate::services::AppointmentSweepService;

/// Force-completes appointments stuck "In Progress". Triggered by cron.
#[axum::debug_handler]
pub async fn auto_complete_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<AutoCompleteResponse>, AppError> {
    require_shared_secret(&headers, state.config.cron_secret())?;

    let supabase = state.service_client()?;
    let sweep = AppointmentSweepService::new(supabase);

    let updated = sweep.run(Utc::now()).await.map_err(|e| {
        error!("Appointment sweep failed: {}", e);
        match e {
            AppointmentError::Fetch(_) => AppError::Database("Failed to fetch appointments".to_string()),
            AppointmentError::Update(_) => AppError::Database("Failed to update appointments".to_string()),
        }
    })?;

    Ok(Json(AutoCompleteResponse { updated }))
}
