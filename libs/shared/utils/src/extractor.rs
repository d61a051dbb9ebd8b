use axum::http::{header::AUTHORIZATION, HeaderMap};
use tracing::debug;

use shared_models::error::AppError;

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    let token = auth_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Auth("Invalid authorization header format".to_string()))?;

    Ok(token.trim())
}

/// Checks the request against a shared secret. No secret means the route is open.
pub fn require_shared_secret(headers: &HeaderMap, secret: Option<&str>) -> Result<(), AppError> {
    let Some(expected) = secret else {
        return Ok(());
    };

    let token = bearer_token(headers)?;
    if token != expected {
        debug!("Shared secret mismatch");
        return Err(AppError::Auth("Unauthorized".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&headers_with("Bearer abc123")).unwrap(), "abc123");

        assert_matches!(
            bearer_token(&HeaderMap::new()),
            Err(AppError::Auth(msg)) if msg == "Missing authorization header"
        );
        assert_matches!(
            bearer_token(&headers_with("Basic abc123")),
            Err(AppError::Auth(msg)) if msg == "Invalid authorization header format"
        );
    }

    #[test]
    fn test_shared_secret() {
        assert!(require_shared_secret(&HeaderMap::new(), None).is_ok());
        assert!(require_shared_secret(&headers_with("Bearer s3cret"), Some("s3cret")).is_ok());
        assert!(require_shared_secret(&headers_with("Bearer wrong"), Some("s3cret")).is_err());
        assert!(require_shared_secret(&HeaderMap::new(), Some("s3cret")).is_err());
    }
}
