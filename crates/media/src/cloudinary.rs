//! Cloudinary-backed blob store.
//!
//! Uses the signed upload API: every request carries `api_key`, a Unix
//! `timestamp`, and a SHA-256 signature over the sorted signed parameters
//! with the API secret appended.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{BlobError, BlobStore, StoredBlob, Upload};

const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";
const DEFAULT_FOLDER: &str = "student-association";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and options for the Cloudinary API.
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// Folder that every upload is placed in.
    pub folder: String,
    /// Base URL, overridable for testing against a stub server.
    pub api_base: String,
    pub timeout_secs: u64,
}

impl CloudinaryConfig {
    /// Load Cloudinary configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default                          |
    /// |----------------------------|----------|----------------------------------|
    /// | `CLOUDINARY_CLOUD_NAME`    | **yes**  | --                               |
    /// | `CLOUDINARY_API_KEY`       | **yes**  | --                               |
    /// | `CLOUDINARY_API_SECRET`    | **yes**  | --                               |
    /// | `CLOUDINARY_FOLDER`        | no       | `student-association`            |
    /// | `CLOUDINARY_API_BASE`      | no       | `https://api.cloudinary.com/v1_1`|
    /// | `CLOUDINARY_TIMEOUT_SECS`  | no       | `30`                             |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or the timeout is not a number.
    pub fn from_env() -> Self {
        let required = |name: &str| {
            std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set in the environment"))
        };

        let timeout_secs = std::env::var("CLOUDINARY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("CLOUDINARY_TIMEOUT_SECS must be a valid u64");

        Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME"),
            api_key: required("CLOUDINARY_API_KEY"),
            api_secret: required("CLOUDINARY_API_SECRET"),
            folder: std::env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.into()),
            api_base: std::env::var("CLOUDINARY_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            timeout_secs,
        }
    }
}

/// Response body of `POST /{cloud}/image/upload`.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// Response body of `POST /{cloud}/image/destroy`.
#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

/// HTTP client for one Cloudinary account.
pub struct CloudinaryStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStore {
    pub fn new(config: CloudinaryConfig) -> Result<Self, BlobError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.config.api_base.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    async fn send(&self, action: &str, form: Form) -> Result<reqwest::Response, BlobError> {
        let response = self.client.post(self.endpoint(action)).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BlobError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl BlobStore for CloudinaryStore {
    async fn store(&self, upload: Upload) -> Result<StoredBlob, BlobError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let mut signed = vec![("timestamp", timestamp.as_str())];
        if !self.config.folder.is_empty() {
            signed.push(("folder", self.config.folder.as_str()));
        }
        let signature = sign(&signed, &self.config.api_secret);

        let file_name = upload.display_name().to_string();
        let mut part = Part::bytes(upload.bytes).file_name(file_name);
        if let Some(ct) = upload.content_type.as_deref() {
            part = part.mime_str(ct)?;
        }

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in signed {
            form = form.text(key.to_string(), value.to_string());
        }

        let body: UploadResponse = self
            .send("upload", form)
            .await?
            .json()
            .await
            .map_err(|e| BlobError::InvalidResponse(e.to_string()))?;

        tracing::info!(public_id = %body.public_id, "Image uploaded to Cloudinary");
        Ok(StoredBlob {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), BlobError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signed = [("public_id", public_id), ("timestamp", timestamp.as_str())];
        let signature = sign(&signed, &self.config.api_secret);

        let mut form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in signed {
            form = form.text(key.to_string(), value.to_string());
        }

        let body: DestroyResponse = self
            .send("destroy", form)
            .await?
            .json()
            .await
            .map_err(|e| BlobError::InvalidResponse(e.to_string()))?;

        match body.result.as_str() {
            "ok" => {
                tracing::info!(%public_id, "Image deleted from Cloudinary");
                Ok(())
            }
            "not found" => {
                tracing::warn!(%public_id, "Image already absent from Cloudinary");
                Ok(())
            }
            other => Err(BlobError::InvalidResponse(format!(
                "destroy returned '{other}' for {public_id}"
            ))),
        }
    }
}

/// Compute a request signature: sort parameters by name, join as
/// `k1=v1&k2=v2`, append the secret, and hex-encode the SHA-256 digest.
pub fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CloudinaryConfig {
        CloudinaryConfig {
            cloud_name: "demo".into(),
            api_key: "key".into(),
            api_secret: "secret".into(),
            folder: "assoc".into(),
            api_base: "https://api.example.com/v1_1/".into(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn signature_is_order_independent() {
        let a = sign(&[("timestamp", "1700000000"), ("folder", "assoc")], "secret");
        let b = sign(&[("folder", "assoc"), ("timestamp", "1700000000")], "secret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn signature_matches_manual_digest() {
        let expected = {
            let mut h = Sha256::new();
            h.update(b"folder=assoc&timestamp=1700000000secret");
            format!("{:x}", h.finalize())
        };
        assert_eq!(
            sign(&[("timestamp", "1700000000"), ("folder", "assoc")], "secret"),
            expected
        );
    }

    #[test]
    fn empty_values_are_not_signed() {
        assert_eq!(
            sign(&[("timestamp", "1"), ("folder", "")], "s"),
            sign(&[("timestamp", "1")], "s")
        );
    }

    #[test]
    fn different_secrets_differ() {
        let params = [("timestamp", "1")];
        assert_ne!(sign(&params, "alpha"), sign(&params, "bravo"));
    }

    #[test]
    fn endpoint_joins_base_cloud_and_action() {
        let store = CloudinaryStore::new(test_config()).unwrap();
        assert_eq!(
            store.endpoint("upload"),
            "https://api.example.com/v1_1/demo/image/upload"
        );
        assert_eq!(
            store.endpoint("destroy"),
            "https://api.example.com/v1_1/demo/image/destroy"
        );
    }
}
