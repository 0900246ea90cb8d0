//! Reducing a drop event to a single upload

use super::format::ImageFormat;
use crate::core::transform::ImageUpload;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// The file picked from a drop, with the format it was accepted as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub upload: ImageUpload,
    pub format: ImageFormat,
}

/// Format a candidate file is accepted as, if any
///
/// Accepted when the declared MIME type, the filename extension or the
/// file's leading bytes name a supported format, tried in that order.
fn accepted_format(upload: &ImageUpload) -> Option<ImageFormat> {
    upload
        .content_type
        .as_deref()
        .and_then(ImageFormat::from_mime)
        .or_else(|| upload.filename.as_deref().and_then(ImageFormat::from_extension))
        .or_else(|| ImageFormat::sniff(upload.data()))
}

/// First accepted file of a drop; the rest are ignored
pub fn select_upload<I>(files: I) -> Option<SelectedImage>
where
    I: IntoIterator<Item = ImageUpload>,
{
    files.into_iter().find_map(|upload| {
        accepted_format(&upload).map(|format| SelectedImage { upload, format })
    })
}

/// `data:` URL used to preview the original image
pub fn preview_data_url(selected: &SelectedImage) -> String {
    format!(
        "data:{};base64,{}",
        selected.format.mime(),
        STANDARD.encode(selected.upload.data())
    )
}
