//! Transform request and result types

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type of images returned by the vendor
pub const STYLED_IMAGE_MIME: &str = "image/jpeg";

/// An uploaded image held in memory for the duration of one request
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    data: Vec<u8>,
    size: usize,
    /// Original filename, when the client sent one
    pub filename: Option<String>,
    /// Declared content type, when the client sent one
    pub content_type: Option<String>,
}

impl ImageUpload {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        Self {
            size: data.len(),
            data,
            filename: None,
            content_type: None,
        }
    }

    /// An upload whose body was cut off after `data`, `size` bytes having been sent
    pub(crate) fn truncated(data: Vec<u8>, size: usize) -> Self {
        Self {
            data,
            size,
            filename: None,
            content_type: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Number of bytes the client sent for this file
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("size", &self.size)
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Stylized image as a `data:` URL, serialized as `{"url": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledImage {
    pub url: String,
}

impl StyledImage {
    /// Wrap the vendor's base64 JPEG into a data URL
    pub fn from_vendor_base64(image: &str) -> Self {
        Self {
            url: format!("data:{};base64,{}", STYLED_IMAGE_MIME, image),
        }
    }

    /// Base64 payload of the data URL
    pub fn payload(&self) -> &str {
        self.url
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .unwrap_or_default()
    }

    /// Decode the JPEG bytes
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.payload())
    }
}

/// Stage a transform request has reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStage {
    Received,
    Validated,
    Authenticated,
    Transformed,
    Responded,
}

impl std::fmt::Display for TransformStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Received => "received",
            Self::Validated => "validated",
            Self::Authenticated => "authenticated",
            Self::Transformed => "transformed",
            Self::Responded => "responded",
        };
        f.write_str(name)
    }
}
