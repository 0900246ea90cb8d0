//! Upload limits

use super::*;
use serde::{Deserialize, Serialize};

const KIB: usize = 1024;
const MIB: usize = 1024 * 1024;

/// Limits applied to uploaded images before any vendor call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Largest accepted image, in bytes (inclusive)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

impl UploadConfig {
    /// Human-readable limit, e.g. `4MB`
    pub fn limit_label(&self) -> String {
        let bytes = self.max_image_bytes;
        if bytes >= MIB && bytes % MIB == 0 {
            format!("{}MB", bytes / MIB)
        } else if bytes >= KIB && bytes % KIB == 0 {
            format!("{}KB", bytes / KIB)
        } else {
            format!("{}B", bytes)
        }
    }

    /// Message returned when an upload exceeds the limit
    pub fn too_large_message(&self) -> String {
        format!("图片大小不能超过{}", self.limit_label())
    }

    /// Validate upload configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_image_bytes == 0 {
            return Err("max_image_bytes cannot be 0".to_string());
        }
        Ok(())
    }
}
