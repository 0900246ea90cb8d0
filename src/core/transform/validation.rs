//! Upload validation and encoding

use super::types::ImageUpload;
use crate::config::UploadConfig;
use crate::utils::error::{GatewayError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Message returned when the `image` field is absent
pub const MISSING_IMAGE_MESSAGE: &str = "No image provided";

/// Check the preconditions of a transform request, in order
///
/// 1. the `image` field is present
/// 2. its size does not exceed the configured limit
pub fn validate_upload(upload: Option<ImageUpload>, limits: &UploadConfig) -> Result<ImageUpload> {
    let upload = match upload {
        Some(upload) => upload,
        None => return Err(GatewayError::missing_input(MISSING_IMAGE_MESSAGE)),
    };

    if upload.size() > limits.max_image_bytes {
        return Err(GatewayError::payload_too_large(limits.too_large_message()));
    }

    Ok(upload)
}

/// Standard (padded) base64 of the image bytes
pub fn encode_image(data: &[u8]) -> String {
    STANDARD.encode(data)
}
