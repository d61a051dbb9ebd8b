use std::sync::Arc;

use axum::{body::Body, response::Response};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::AppState;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_service_role_key: String,
    pub media_base_url: String,
    pub cron_secret: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            supabase_service_role_key: "test-service-role-key".to_string(),
            media_base_url: "http://localhost:54322".to_string(),
            cron_secret: None,
        }
    }
}

impl TestConfig {
    /// Points both the data store and the media host at one mock server.
    pub fn with_mock_server(uri: &str) -> Self {
        Self {
            supabase_url: uri.to_string(),
            media_base_url: uri.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            supabase_service_role_key: self.supabase_service_role_key.clone(),
            cloudinary_cloud_name: "test-cloud".to_string(),
            cloudinary_api_key: "test-media-key".to_string(),
            cloudinary_api_secret: "test-media-secret".to_string(),
            cloudinary_base_url: self.media_base_url.clone(),
            media_upload_folder: "amae".to_string(),
            cron_secret: self.cron_secret.clone(),
            port: 3000,
        }
    }

    pub fn to_state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(self.to_app_config()))
    }
}

/// Reads a JSON response body in router tests.
pub async fn response_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&body).expect("response body should be JSON")
}

pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn appointment_id_rows(count: usize) -> Value {
        let rows: Vec<Value> = (0..count)
            .map(|_| json!({ "id": Uuid::new_v4().to_string() }))
            .collect();
        Value::Array(rows)
    }

    pub fn subscriber_response(email: &str, created_at: DateTime<Utc>) -> Value {
        json!({
            "id": Uuid::new_v4().to_string(),
            "email": email,
            "created_at": created_at.to_rfc3339()
        })
    }

    pub fn site_setting_response(key: &str, value: Value) -> Value {
        json!({
            "key": key,
            "value": value
        })
    }

    pub fn error_response(message: &str, code: &str) -> Value {
        json!({
            "code": code,
            "details": null,
            "hint": null,
            "message": message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.supabase_url, "http://localhost:54321");
        assert_eq!(app_config.supabase_anon_key, "test-anon-key");
        assert!(app_config.is_configured());
        assert!(app_config.is_media_configured());
        assert_eq!(app_config.cron_secret(), None);
    }

    #[test]
    fn test_mock_server_config_points_everything_at_one_uri() {
        let app_config = TestConfig::with_mock_server("http://127.0.0.1:9999").to_app_config();

        assert_eq!(app_config.supabase_url, "http://127.0.0.1:9999");
        assert_eq!(app_config.cloudinary_base_url, "http://127.0.0.1:9999");
    }

    #[test]
    fn test_appointment_rows() {
        let rows = MockSupabaseResponses::appointment_id_rows(3);
        assert_eq!(rows.as_array().map(Vec::len), Some(3));
        assert!(rows[0]["id"].is_string());
    }
}
