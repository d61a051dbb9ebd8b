use std::collections::BTreeMap;

use reqwest::Client;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{DestroyOutcome, DestroyResponse, MediaError, SignedUpload};

/// Sent with destroy calls. Upload signatures stay on the host's SHA-1 default
/// because the browser posts them without an algorithm field.
pub const DESTROY_SIGNATURE_ALGORITHM: &str = "sha256";

/// Cloudinary upload API client.
/// Based on: https://cloudinary.com/documentation/image_upload_api_reference
pub struct CloudinaryClient {
    client: Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    base_url: String,
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("cloud_name", &self.cloud_name)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CloudinaryClient {
    pub fn new(config: &AppConfig) -> Result<Self, MediaError> {
        if !config.is_media_configured() {
            return Err(MediaError::NotConfigured);
        }

        Ok(Self {
            client: Client::new(),
            cloud_name: config.cloudinary_cloud_name.clone(),
            api_key: config.cloudinary_api_key.clone(),
            api_secret: config.cloudinary_api_secret.clone(),
            base_url: config.cloudinary_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Signs upload parameters for a direct browser upload into `folder`.
    pub fn sign_upload(&self, folder: &str, timestamp: i64) -> SignedUpload {
        let mut params = BTreeMap::new();
        params.insert("folder", folder.to_string());
        params.insert("timestamp", timestamp.to_string());

        SignedUpload {
            timestamp,
            signature: sign_params::<Sha1>(&params, &self.api_secret),
            api_key: self.api_key.clone(),
            cloud_name: self.cloud_name.clone(),
            folder: folder.to_string(),
        }
    }

    /// Deletes an image by public id. A missing asset counts as deleted.
    /// POST /{cloud_name}/image/destroy
    pub async fn destroy(&self, public_id: &str, timestamp: i64) -> Result<DestroyOutcome, MediaError> {
        let url = format!("{}/{}/image/destroy", self.base_url, self.cloud_name);

        let mut params = BTreeMap::new();
        params.insert("public_id", public_id.to_string());
        params.insert("timestamp", timestamp.to_string());
        let signature = sign_params::<Sha256>(&params, &self.api_secret);

        let timestamp = timestamp.to_string();
        let form = [
            ("public_id", public_id),
            ("timestamp", timestamp.as_str()),
            ("api_key", self.api_key.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", DESTROY_SIGNATURE_ALGORITHM),
        ];

        debug!("Sending destroy request for {} to {}", public_id, url);

        let response = self.client.post(&url).form(&form).send().await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            error!("Media destroy failed: {} - {}", status, response_text);
            return Err(MediaError::Api {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let body: DestroyResponse = serde_json::from_str(&response_text)
            .map_err(|_| MediaError::UnexpectedResult(response_text.clone()))?;

        match body.result.as_str() {
            "ok" => {
                info!("Deleted media asset {}", public_id);
                Ok(DestroyOutcome::Deleted)
            }
            "not found" => {
                debug!("Media asset {} already absent", public_id);
                Ok(DestroyOutcome::AlreadyAbsent)
            }
            other => Err(MediaError::UnexpectedResult(other.to_string())),
        }
    }
}

/// Hex digest over `k1=v1&k2=v2...` (keys sorted) followed by the API secret.
pub fn sign_params<D: Digest>(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = D::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
