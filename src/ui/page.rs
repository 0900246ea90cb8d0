//! The upload page

use super::format::ImageFormat;
use crate::config::UploadConfig;

/// Page template; `{{ACCEPT}}`, `{{ACCEPT_MIME}}` and `{{MAX_LABEL}}` are filled in at startup
pub const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

/// Render the upload page for the given limits
pub fn render_index(limits: &UploadConfig) -> String {
    INDEX_TEMPLATE
        .replace("{{ACCEPT}}", &ImageFormat::accept_attribute())
        .replace("{{ACCEPT_MIME}}", &ImageFormat::accepted_mimes())
        .replace("{{MAX_LABEL}}", &limits.limit_label())
}
