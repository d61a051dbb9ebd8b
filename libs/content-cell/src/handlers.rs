use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::warn;

use shared_database::AppState;

use crate::models::{DoctorTaxonomies, Fallback, HomepageContentResponse, TaxonomiesResponse};
use crate::services::SiteSettingsService;

#[axum::debug_handler]
pub async fn get_doctor_taxonomies(State(state): State<Arc<AppState>>) -> Json<TaxonomiesResponse> {
    let taxonomies = match state.public_client() {
        Ok(supabase) => SiteSettingsService::new(supabase).doctor_taxonomies().await,
        Err(e) => {
            warn!("Data store unavailable, serving default taxonomies: {}", e);
            Fallback::Default(DoctorTaxonomies::default())
        }
    };

    Json(TaxonomiesResponse {
        config: taxonomies.into_inner(),
    })
}

#[axum::debug_handler]
pub async fn get_homepage_content(State(state): State<Arc<AppState>>) -> Json<HomepageContentResponse> {
    let content = match state.public_client() {
        Ok(supabase) => SiteSettingsService::new(supabase).homepage_content().await,
        Err(e) => {
            warn!("Data store unavailable, serving empty homepage content: {}", e);
            Fallback::Default(None)
        }
    };

    Json(HomepageContentResponse {
        config: content.into_inner(),
    })
}
