use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use shared_models::error::AppError;

/// Postgres SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl DatabaseError {
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();

        DatabaseError::Api {
            status,
            code: parsed.code,
            message: parsed.message.unwrap_or_else(|| body.to_string()),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        match self {
            DatabaseError::Api { status, code, .. } => {
                *status == StatusCode::CONFLICT || code.as_deref() == Some(UNIQUE_VIOLATION)
            }
            _ => false,
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotConfigured(what) => {
                error!("Data store client unavailable: missing {}", what);
                AppError::Configuration("Server is not configured".to_string())
            }
            other => {
                error!("Data store request failed: {}", other);
                AppError::Database("Database operation failed".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parses_postgrest_error_body() {
        let err = DatabaseError::from_response(
            StatusCode::CONFLICT,
            r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#,
        );

        assert_matches!(&err, DatabaseError::Api { code: Some(code), .. } if code == UNIQUE_VIOLATION);
        assert!(err.is_unique_violation());
    }

    #[test]
    fn test_unique_violation_detected_by_code_alone() {
        let err = DatabaseError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"code":"23505","message":"duplicate"}"#,
        );
        assert!(err.is_unique_violation());
    }

    #[test]
    fn test_plain_text_error_body() {
        let err = DatabaseError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "upstream down");

        assert_matches!(&err, DatabaseError::Api { message, code: None, .. } if message == "upstream down");
        assert!(!err.is_unique_violation());
    }

    #[test]
    fn test_maps_to_app_error() {
        let app_error: AppError = DatabaseError::NotConfigured("SUPABASE_URL").into();
        assert_matches!(app_error, AppError::Configuration(_));

        let app_error: AppError =
            DatabaseError::from_response(StatusCode::BAD_GATEWAY, "bad gateway").into();
        assert_matches!(app_error, AppError::Database(msg) if msg == "Database operation failed");
    }
}
