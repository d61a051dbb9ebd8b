use std::env;
use tracing::warn;

pub const DEFAULT_MEDIA_API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
pub const DEFAULT_MEDIA_UPLOAD_FOLDER: &str = "amae";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_service_role_key: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_api_key: String,
    pub cloudinary_api_secret: String,
    pub cloudinary_base_url: String,
    pub media_upload_folder: String,
    pub cron_secret: Option<String>,
    pub port: u16,
}

fn required(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, using empty value", name);
        String::new()
    })
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| {
        warn!("{} not set, using default", name);
        default.to_string()
    })
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("PORT value {:?} is not a valid port, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let config = Self {
            supabase_url: required("SUPABASE_URL"),
            supabase_anon_key: required("SUPABASE_ANON_PUBLIC_KEY"),
            supabase_service_role_key: required("SUPABASE_SERVICE_ROLE_KEY"),
            cloudinary_cloud_name: required("CLOUDINARY_CLOUD_NAME"),
            cloudinary_api_key: required("CLOUDINARY_API_KEY"),
            cloudinary_api_secret: required("CLOUDINARY_API_SECRET"),
            cloudinary_base_url: with_default("CLOUDINARY_API_BASE_URL", DEFAULT_MEDIA_API_BASE_URL),
            media_upload_folder: with_default("MEDIA_UPLOAD_FOLDER", DEFAULT_MEDIA_UPLOAD_FOLDER),
            // The sweep stays open when no secret is configured
            cron_secret: env::var("CRON_SECRET").ok(),
            port,
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        if !config.is_media_configured() {
            warn!("Media host credentials missing - upload routes will fail");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty()
            && !self.supabase_anon_key.is_empty()
            && !self.supabase_service_role_key.is_empty()
    }

    pub fn is_media_configured(&self) -> bool {
        !self.cloudinary_cloud_name.is_empty()
            && !self.cloudinary_api_key.is_empty()
            && !self.cloudinary_api_secret.is_empty()
    }

    /// Shared secret guarding the appointment sweep, if one is set.
    pub fn cron_secret(&self) -> Option<&str> {
        self.cron_secret
            .as_deref()
            .map(str::trim)
            .filter(|secret| !secret.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_config() -> AppConfig {
        AppConfig {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            supabase_service_role_key: String::new(),
            cloudinary_cloud_name: String::new(),
            cloudinary_api_key: String::new(),
            cloudinary_api_secret: String::new(),
            cloudinary_base_url: DEFAULT_MEDIA_API_BASE_URL.to_string(),
            media_upload_folder: DEFAULT_MEDIA_UPLOAD_FOLDER.to_string(),
            cron_secret: None,
            port: DEFAULT_PORT,
        }
    }

    #[test]
    fn test_blank_cron_secret_is_treated_as_unset() {
        let mut config = blank_config();
        assert_eq!(config.cron_secret(), None);

        config.cron_secret = Some("   ".to_string());
        assert_eq!(config.cron_secret(), None);

        config.cron_secret = Some("s3cret".to_string());
        assert_eq!(config.cron_secret(), Some("s3cret"));
    }

    #[test]
    fn test_configuration_checks() {
        let mut config = blank_config();
        assert!(!config.is_configured());
        assert!(!config.is_media_configured());

        config.supabase_url = "http://localhost:54321".to_string();
        config.supabase_anon_key = "anon".to_string();
        config.supabase_service_role_key = "service".to_string();
        assert!(config.is_configured());

        config.cloudinary_cloud_name = "demo".to_string();
        config.cloudinary_api_key = "key".to_string();
        assert!(!config.is_media_configured());
        config.cloudinary_api_secret = "secret".to_string();
        assert!(config.is_media_configured());
    }
}
