//! Style transfer vendors

pub mod baidu;

pub use baidu::{AccessToken, BaiduAuth, BaiduClient, Credentials, VendorError};
