//! Result panel state

use crate::core::transform::StyledImage;
use crate::sdk::ClientError;
use tracing::error;

/// What the right-hand panel shows; exactly one state at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultPanel {
    /// Placeholder text
    #[default]
    Empty,
    /// Spinner while a transform is in flight
    Loading,
    /// The stylized image
    Styled(String),
}

impl ResultPanel {
    /// A transform was started; any previous result is cleared
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Apply the outcome of a transform
    ///
    /// Returns the notification to show, if any. Every failure yields the same
    /// generic notice regardless of its cause.
    pub fn finish(&mut self, outcome: Result<StyledImage, ClientError>) -> Option<&'static str> {
        match outcome {
            Ok(styled) => {
                *self = Self::Styled(styled.url);
                None
            }
            Err(e) => {
                error!("Error: {}", e);
                *self = Self::Empty;
                Some(e.notice())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn styled_url(&self) -> Option<&str> {
        match self {
            Self::Styled(url) => Some(url),
            _ => None,
        }
    }
}
