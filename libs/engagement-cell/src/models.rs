use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_utils::validation::{normalize_email, optional_field, required_field};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated contact form submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub full_name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl TryFrom<ContactRequest> for ContactMessage {
    type Error = AppError;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: required_field(request.full_name.as_deref(), "Full name")?,
            email: normalize_email(request.email.as_deref())?,
            subject: optional_field(request.subject.as_deref()),
            message: required_field(request.message.as_deref(), "Message")?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
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
