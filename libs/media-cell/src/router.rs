use std::sync::Arc;

use axum::{routing::post, Router};

use shared_database::AppState;

use crate::handlers;

pub fn media_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sign", post(handlers::sign_upload))
        .route("/destroy", post(handlers::destroy_upload))
        .with_state(state)
}
