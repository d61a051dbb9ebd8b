use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::error::DatabaseError;

/// Which key a client authenticates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRole {
    /// Anon key; row-level security applies.
    Public,
    /// Service-role key; bypasses row-level security. Server-only.
    ServiceRole,
}

pub struct SupabaseClient {
    client: Client,
    base_url: String,
    api_key: String,
    role: ClientRole,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    pub fn public(config: &AppConfig) -> Result<Self, DatabaseError> {
        if config.supabase_anon_key.is_empty() {
            return Err(DatabaseError::NotConfigured("SUPABASE_ANON_PUBLIC_KEY"));
        }
        Self::build(config, config.supabase_anon_key.clone(), ClientRole::Public)
    }

    pub fn service_role(config: &AppConfig) -> Result<Self, DatabaseError> {
        if config.supabase_service_role_key.is_empty() {
            return Err(DatabaseError::NotConfigured("SUPABASE_SERVICE_ROLE_KEY"));
        }
        Self::build(config, config.supabase_service_role_key.clone(), ClientRole::ServiceRole)
    }

    fn build(config: &AppConfig, api_key: String, role: ClientRole) -> Result<Self, DatabaseError> {
        if config.supabase_url.is_empty() {
            return Err(DatabaseError::NotConfigured("SUPABASE_URL"));
        }

        // Header values are validated once here so requests never fail on them later
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| DatabaseError::NotConfigured("a header-safe Supabase key"))?;

        Ok(Self {
            client: Client::new(),
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            api_key,
            role,
        })
    }

    pub fn role(&self) -> ClientRole {
        self.role
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(key) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        headers
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<Response, DatabaseError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {:?} request to {} {}", self.role, method, url);

        let mut headers = self.get_headers();
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            error!("API error ({}): {}", status, error_text);
            return Err(DatabaseError::from_response(status, &error_text));
        }

        Ok(response)
    }

    pub async fn request<T>(&self, method: Method, path: &str, body: Option<Value>) -> Result<T, DatabaseError>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T, DatabaseError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body, extra_headers).await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|e| DatabaseError::Decode(e.to_string()))
    }

    /// Runs a write with `Prefer: return=minimal`, discarding the (empty) body.
    pub async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<(), DatabaseError> {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=minimal"));

        self.send(method, path, body, Some(headers)).await?;
        Ok(())
    }

    /// Exact row count for a filtered table path, read from `Content-Range`.
    pub async fn count(&self, path: &str) -> Result<u64, DatabaseError> {
        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("count=exact"));

        let response = self.send(Method::HEAD, path, None, Some(headers)).await?;

        let content_range = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| DatabaseError::Decode("missing Content-Range header".to_string()))?;

        parse_content_range_total(content_range)
            .ok_or_else(|| DatabaseError::Decode(format!("unexpected Content-Range: {}", content_range)))
    }
}

/// Parses the total out of `0-24/3573` or `*/0`.
fn parse_content_range_total(content_range: &str) -> Option<u64> {
    content_range
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse().ok())
}
