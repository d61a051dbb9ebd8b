use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn admin_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notifications/mark-read", post(handlers::mark_notifications_read))
        .route("/notifications/unread-count", get(handlers::get_unread_count))
        .route("/payouts/summary", get(handlers::get_payout_summary))
        .route("/newsletter/subscribers", get(handlers::list_subscribers))
        .with_state(state)
}
