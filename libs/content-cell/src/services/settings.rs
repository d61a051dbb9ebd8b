use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use shared_database::{DatabaseError, SupabaseClient};

use crate::models::{homepage_from_setting, DoctorTaxonomies, Fallback, SettingRow};

pub const DOCTOR_TAXONOMIES_KEY: &str = "doctor_taxonomies";
pub const HOMEPAGE_CONTENT_KEY: &str = "homepage_content";

pub struct SiteSettingsService<'a> {
    supabase: &'a SupabaseClient,
}

impl<'a> SiteSettingsService<'a> {
    pub fn new(supabase: &'a SupabaseClient) -> Self {
        Self { supabase }
    }

    async fn fetch(&self, key: &str) -> Result<Option<Value>, DatabaseError> {
        let path = format!("/rest/v1/site_settings?select=value&key=eq.{}&limit=1", key);

        let rows: Vec<SettingRow> = self.supabase.request(Method::GET, &path, None).await?;
        debug!("Loaded {} rows for setting {}", rows.len(), key);

        Ok(rows.into_iter().next().map(|row| row.value).filter(|value| !value.is_null()))
    }

    pub async fn doctor_taxonomies(&self) -> Fallback<DoctorTaxonomies> {
        match self.fetch(DOCTOR_TAXONOMIES_KEY).await {
            Ok(Some(value)) => DoctorTaxonomies::from_setting(value),
            Ok(None) => {
                warn!("No doctor taxonomies configured, using defaults");
                Fallback::Default(DoctorTaxonomies::default())
            }
            Err(e) => {
                warn!("Failed to load doctor taxonomies, using defaults: {}", e);
                Fallback::Default(DoctorTaxonomies::default())
            }
        }
    }

    pub async fn homepage_content(&self) -> Fallback<Option<Map<String, Value>>> {
        match self.fetch(HOMEPAGE_CONTENT_KEY).await {
            Ok(Some(value)) => homepage_from_setting(value),
            Ok(None) => Fallback::Default(None),
            Err(e) => {
                warn!("Failed to load homepage content: {}", e);
                Fallback::Default(None)
            }
        }
    }
}
