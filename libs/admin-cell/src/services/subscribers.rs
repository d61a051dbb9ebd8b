use reqwest::Method;
use tracing::debug;

use shared_database::{DatabaseError, SupabaseClient};

use crate::models::Subscriber;

pub struct SubscriberService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> SubscriberService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    /// All subscribers, newest first.
    pub async fn list(&self) -> Result<Vec<Subscriber>, DatabaseError> {
        let subscribers: Vec<Subscriber> = self.supabase
            .request(
                Method::GET,
                "/rest/v1/newsletter_subscribers?select=id,email,created_at&order=created_at.desc",
                None,
            )
            .await?;

        debug!("Loaded {} newsletter subscribers", subscribers.len());
        Ok(subscribers)
    }
}
