use std::sync::Arc;

use axum::{routing::post, Router};

use shared_database::AppState;

use crate::handlers;

pub fn engagement_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/contact", post(handlers::submit_contact))
        .route("/newsletter/subscribe", post(handlers::subscribe_newsletter))
        .with_state(state)
}
