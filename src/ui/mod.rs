//! Upload UI
//!
//! The browser page served at `/` and the Rust-side rules it follows: which
//! files are accepted, how a drop is reduced to one upload, and which of the
//! three result states is shown.

mod format;
mod page;
mod panel;
mod selection;
mod session;

pub use format::ImageFormat;
pub use page::{INDEX_TEMPLATE, render_index};
pub use panel::ResultPanel;
pub use selection::{SelectedImage, preview_data_url, select_upload};
pub use session::UploadSession;
