use chrono::{DateTime, Duration, SecondsFormat, Utc};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Method,
};
use serde_json::json;
use tracing::{debug, info};

use shared_database::SupabaseClient;

use crate::models::{AppointmentError, AppointmentIdRow, AppointmentStatus};

/// How long an appointment may sit "In Progress" before it is force-completed.
pub const STALE_AFTER_HOURS: i64 = 2;

/// Upper bound on appointments completed per invocation.
pub const SWEEP_BATCH_LIMIT: usize = 500;

pub struct AppointmentSweepService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> AppointmentSweepService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    pub fn stale_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::hours(STALE_AFTER_HOURS)
    }

    /// Ids of appointments still in progress whose last update is at or before `cutoff`.
    pub async fn find_stale(&self, cutoff: DateTime<Utc>) -> Result<Vec<String>, AppointmentError> {
        let path = format!(
            "/rest/v1/appointments?select=id&status=eq.{}&updated_at=lte.{}&order=updated_at.asc&limit={}",
            urlencoding::encode(AppointmentStatus::InProgress.as_str()),
            urlencoding::encode(&cutoff.to_rfc3339_opts(SecondsFormat::Millis, true)),
            SWEEP_BATCH_LIMIT,
        );

        let rows: Vec<AppointmentIdRow> = self.supabase
            .request(Method::GET, &path, None)
            .await
            .map_err(AppointmentError::Fetch)?;

        debug!("Found {} stale in-progress appointments", rows.len());
        Ok(rows.into_iter().map(|row| row.id).collect())
    }

    /// Completes the given appointments in one batched update and returns how many changed.
    pub async fn complete(&self, ids: &[String], now: DateTime<Utc>) -> Result<usize, AppointmentError> {
        if ids.is_empty() {
            return Ok(0);
        }

        // Re-checking the status keeps rows that moved on since the read untouched
        let path = format!(
            "/rest/v1/appointments?id=in.({})&status=eq.{}&select=id",
            ids.join(","),
            urlencoding::encode(AppointmentStatus::InProgress.as_str()),
        );

        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let updated: Vec<AppointmentIdRow> = self.supabase
            .request_with_headers(
                Method::PATCH,
                &path,
                Some(json!({
                    "status": AppointmentStatus::Completed,
                    "updated_at": now.to_rfc3339_opts(SecondsFormat::Millis, true),
                })),
                Some(headers),
            )
            .await
            .map_err(AppointmentError::Update)?;

        Ok(updated.len())
    }

    pub async fn run(&self, now: DateTime<Utc>) -> Result<usize, AppointmentError> {
        let cutoff = Self::stale_cutoff(now);
        let stale = self.find_stale(cutoff).await?;

        if stale.is_empty() {
            debug!("No stale appointments before {}", cutoff);
            return Ok(0);
        }

        let updated = self.complete(&stale, now).await?;
        info!("Auto-completed {} of {} stale appointments", updated, stale.len());

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stale_cutoff_is_two_hours_back() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap();
        let cutoff = AppointmentSweepService::stale_cutoff(now);

        assert_eq!(cutoff, Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap());
    }
}
