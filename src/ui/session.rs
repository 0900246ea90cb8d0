//! One page's worth of upload state

use super::panel::ResultPanel;
use super::selection::{preview_data_url, select_upload};
use crate::core::transform::ImageUpload;
use crate::sdk::TransformClient;
use tracing::debug;

/// Original preview plus result panel, driven by drop events
#[derive(Debug, Default)]
pub struct UploadSession {
    original: Option<String>,
    panel: ResultPanel,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one drop or file-picker selection
    ///
    /// Only the first accepted file is used. Returns the notification to show,
    /// if any. A drop with no accepted file changes nothing.
    pub async fn drop_files<I>(&mut self, client: &TransformClient, files: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = ImageUpload>,
    {
        let selected = match select_upload(files) {
            Some(selected) => selected,
            None => {
                debug!("Drop contained no accepted image");
                return None;
            }
        };

        self.original = Some(preview_data_url(&selected));
        self.panel.begin();

        let outcome = client.transform(&selected.upload).await;
        self.panel.finish(outcome)
    }

    /// Preview of the most recently accepted original
    pub fn original_preview(&self) -> Option<&str> {
        self.original.as_deref()
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }
}
