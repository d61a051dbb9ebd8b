use reqwest::Method;
use serde_json::json;
use tracing::{debug, info};

use shared_database::{DatabaseError, SupabaseClient};

use crate::models::{MarkReadTarget, ADMIN_ROLE};

pub struct NotificationService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> NotificationService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    pub async fn mark_read(&self, target: &MarkReadTarget) -> Result<(), DatabaseError> {
        let path = match target {
            MarkReadTarget::AllUnread => format!(
                "/rest/v1/notifications_admin?is_read=eq.false&role=eq.{}",
                ADMIN_ROLE
            ),
            MarkReadTarget::Ids(ids) => format!(
                "/rest/v1/notifications_admin?id={}",
                urlencoding::encode(&in_filter(ids))
            ),
        };

        debug!("Marking admin notifications read: {:?}", target);

        self.supabase
            .execute(Method::PATCH, &path, Some(json!({ "is_read": true })))
            .await?;

        info!("Admin notifications marked read");
        Ok(())
    }

    pub async fn unread_count(&self) -> Result<u64, DatabaseError> {
        let path = format!(
            "/rest/v1/notifications_admin?select=id&is_read=eq.false&role=eq.{}",
            ADMIN_ROLE
        );
        self.supabase.count(&path).await
    }
}

/// PostgREST `in.(...)` filter with every value double-quoted, so commas and
/// parentheses inside an id stay part of that id.
fn in_filter(values: &[String]) -> String {
    let quoted: Vec<String> = values
        .iter()
        .map(|value| format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\"")))
        .collect();
    format!("in.({})", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_filter_quotes_and_escapes_values() {
        let ids = vec![
            "42".to_string(),
            "1),role.eq.(x".to_string(),
            r#"say "hi"\now"#.to_string(),
        ];

        assert_eq!(
            in_filter(&ids),
            r#"in.("42","1),role.eq.(x","say \"hi\"\\now")"#
        );
    }
}
