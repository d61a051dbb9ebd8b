use std::sync::Arc;

use axum::{routing::get, Router};

use admin_cell::router::admin_routes;
use appointment_cell::router::appointment_routes;
use content_cell::router::content_routes;
use engagement_cell::router::engagement_routes;
use media_cell::router::media_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Amae Care API is running!" }))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/admin", admin_routes(state.clone()))
        .nest("/content", content_routes(state.clone()))
        .nest("/media", media_routes(state.clone()))
        .merge(engagement_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use shared_utils::test_utils::{response_json, TestConfig};
    use tower::ServiceExt;

    fn app() -> Router {
        // Unreachable data store: fallback routes must still answer
        let mut config = TestConfig::default();
        config.supabase_url = "http://127.0.0.1:9".to_string();
        create_router(config.to_state())
    }

    #[tokio::test]
    async fn test_root_liveness() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cells_are_mounted() {
        let response = app()
            .oneshot(Request::builder().uri("/content/doctor-taxonomies").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response_json(response).await["config"]["specializations"].is_array());

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/newsletter/subscribe")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::json!({ "email": "nope" }).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/admin/notifications/mark-read")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
