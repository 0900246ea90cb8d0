//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod server;
pub mod upload;
pub mod vendor;

// Re-export all configuration types
pub use server::*;
pub use upload::*;
pub use vendor::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default vendor request timeout in seconds
pub fn default_vendor_timeout() -> u64 {
    60
}

/// Default maximum image size in bytes
pub fn default_max_image_bytes() -> usize {
    4 * 1024 * 1024 // 4MB
}

/// Default Baidu OAuth endpoint
pub fn default_token_url() -> String {
    "https://aip.baidubce.com/oauth/2.0/token".to_string()
}

/// Default Baidu selfie_anime endpoint
pub fn default_transform_url() -> String {
    "https://aip.baidubce.com/rest/2.0/image-process/v1/selfie_anime".to_string()
}
