use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUploadRequest {
    pub folder: Option<String>,
}

/// Parameters a browser needs to upload straight to the media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedUpload {
    pub timestamp: i64,
    pub signature: String,
    pub api_key: String,
    pub cloud_name: String,
    pub folder: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestroyRequest {
    pub public_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DestroyResponse {
    pub result: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyOutcome {
    Deleted,
    AlreadyAbsent,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media host is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Media API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected destroy result: {0}")]
    UnexpectedResult(String),
}
