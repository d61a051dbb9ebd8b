use reqwest::Method;
use serde_json::json;
use tracing::info;

use shared_database::{DatabaseError, SupabaseClient};

use crate::models::ContactMessage;

pub struct ContactService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> ContactService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn submit(&self, message: &ContactMessage) -> Result<(), DatabaseError> {
        self.supabase
            .execute(Method::POST, "/rest/v1/contact_messages", Some(json!(message)))
            .await?;

        info!("Contact message stored");
        Ok(())
    }
}
