use shared_database::{DatabaseError, SupabaseClient};

pub const PENDING_STATUS: &str = "pending";

pub struct PayoutService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> PayoutService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn pending_count(&self) -> Result<u64, DatabaseError> {
        let path = format!("/rest/v1/payout_requests?select=id&status=eq.{}", PENDING_STATUS);
        self.supabase.count(&path).await
    }
}
