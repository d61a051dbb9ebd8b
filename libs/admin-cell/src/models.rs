use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Role tag carried by notifications meant for administrators.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkReadRequest {
    pub ids: Option<Vec<String>>,
    pub all: Option<bool>,
}

/// Which notifications a mark-read call applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkReadTarget {
    AllUnread,
    Ids(Vec<String>),
}

impl TryFrom<MarkReadRequest> for MarkReadTarget {
    type Error = AppError;

    fn try_from(request: MarkReadRequest) -> Result<Self, Self::Error> {
        if request.all == Some(true) {
            return Ok(MarkReadTarget::AllUnread);
        }

        let ids = request.ids.unwrap_or_default();
        if ids.is_empty() {
            return Err(AppError::BadRequest("Provide ids or all".to_string()));
        }

        let trimmed: Vec<String> = ids.iter().map(|id| id.trim().to_string()).collect();
        if trimmed.iter().any(String::is_empty) {
            return Err(AppError::BadRequest("Invalid notification id".to_string()));
        }

        Ok(MarkReadTarget::Ids(trimmed))
    }
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

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCountResponse {
    pub unread_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSummary {
    pub pending_count: u64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    /// Passed through as stored; the column may or may not carry a zone.
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribersResponse {
    pub subscribers: Vec<Subscriber>,
}
