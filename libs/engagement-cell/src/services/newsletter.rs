use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use shared_database::{DatabaseError, SupabaseClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

pub struct NewsletterService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> NewsletterService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    /// Inserts the subscriber. A duplicate email is not an error.
    pub async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, DatabaseError> {
        let result = self.supabase
            .execute(
                Method::POST,
                "/rest/v1/newsletter_subscribers",
                Some(json!({ "email": email })),
            )
            .await;

        match result {
            Ok(()) => {
                info!("New newsletter subscriber");
                Ok(SubscribeOutcome::Subscribed)
            }
            Err(e) if e.is_unique_violation() => {
                debug!("Newsletter email already subscribed");
                Ok(SubscribeOutcome::AlreadySubscribed)
            }
            Err(e) => Err(e),
        }
    }
}
