use std::sync::Arc;

use axum::{routing::get, Router};

use shared_database::AppState;

use crate::handlers;

pub fn content_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctor-taxonomies", get(handlers::get_doctor_taxonomies))
        .route("/homepage", get(handlers::get_homepage_content))
        .with_state(state)
}
