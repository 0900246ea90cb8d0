//! Transform service

use super::types::{ImageUpload, StyledImage, TransformStage};
use super::validation::{encode_image, validate_upload};
use crate::config::{Config, UploadConfig};
use crate::core::providers::BaiduClient;
use crate::utils::error::Result;
use tracing::{debug, error, info, warn};

/// Stateless pipeline turning an uploaded photo into a stylized image
#[derive(Debug, Clone)]
pub struct TransformService {
    vendor: BaiduClient,
    limits: UploadConfig,
}

impl TransformService {
    pub fn new(vendor: BaiduClient, limits: UploadConfig) -> Self {
        Self { vendor, limits }
    }

    /// Build the service from gateway configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let vendor = BaiduClient::new(config.vendor.clone())?;
        Ok(Self::new(vendor, config.upload.clone()))
    }

    /// Run one request through validation, authentication and the vendor call
    ///
    /// Every call fetches a new access token.
    pub async fn transform(&self, upload: Option<ImageUpload>) -> Result<StyledImage> {
        let mut stage = TransformStage::Received;
        let outcome = self.run(upload, &mut stage).await;

        match &outcome {
            Ok(_) => debug!(%stage, "Transform finished"),
            Err(e) if e.is_client_error() => warn!(%stage, "Transform rejected: {}", e),
            Err(e) => error!(%stage, "Error processing image: {}", e),
        }

        outcome
    }

    async fn run(
        &self,
        upload: Option<ImageUpload>,
        stage: &mut TransformStage,
    ) -> Result<StyledImage> {
        let upload = validate_upload(upload, &self.limits)?;
        advance(stage, TransformStage::Validated);
        if upload.is_empty() {
            warn!("Image field is empty; forwarding to vendor anyway");
        }

        info!(
            size = upload.size(),
            filename = upload.filename.as_deref().unwrap_or("-"),
            "Transforming image"
        );
        let encoded = encode_image(upload.data());
        drop(upload);

        let token = self.vendor.access_token().await?;
        advance(stage, TransformStage::Authenticated);

        let image = self.vendor.selfie_anime(&token, &encoded).await?;
        advance(stage, TransformStage::Transformed);

        let styled = StyledImage::from_vendor_base64(&image);
        advance(stage, TransformStage::Responded);
        Ok(styled)
    }
}

fn advance(stage: &mut TransformStage, next: TransformStage) {
    debug!(from = %stage, to = %next, "Transform stage");
    *stage = next;
}
