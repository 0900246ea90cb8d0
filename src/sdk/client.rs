//! Transform client implementation

use super::errors::{ClientError, Result};
use crate::core::transform::{ImageUpload, StyledImage};
use crate::utils::error::ErrorResponse;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Path of the transform endpoint
pub const TRANSFORM_PATH: &str = "/api/transform";

/// Multipart field carrying the image
const IMAGE_FIELD: &str = "image";

/// Client for `POST /api/transform`
#[derive(Debug, Clone)]
pub struct TransformClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl TransformClient {
    /// Create a client for a gateway at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(120))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(TRANSFORM_PATH))
            .map_err(|e| ClientError::ConfigError(format!("Invalid base URL {}: {}", base_url, e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        info!("TransformClient created for {}", endpoint);

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upload one image and return the stylized result
    pub async fn transform(&self, upload: &ImageUpload) -> Result<StyledImage> {
        let mut part = Part::bytes(upload.data().to_vec())
            .file_name(upload.filename.clone().unwrap_or_else(|| IMAGE_FIELD.to_string()));
        if let Some(content_type) = upload.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part(IMAGE_FIELD, part);

        debug!(size = upload.size(), "Posting image to {}", self.endpoint);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let styled: StyledImage = serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if !styled.url.starts_with("data:") {
            return Err(ClientError::InvalidResponse(format!(
                "expected a data URL, got {:.32}",
                styled.url
            )));
        }

        Ok(styled)
    }
}
