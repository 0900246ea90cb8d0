//! Configuration files loaded from disk

use ghibli_gateway::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_load_full_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
server:
  host: 127.0.0.1
  port: 8080
  workers: 2
vendor:
  token_url: https://aip.example.com/oauth/2.0/token
  transform_url: https://aip.example.com/rest/2.0/image-process/v1/selfie_anime
  timeout: 20
upload:
  max_image_bytes: 1048576
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.server().address(), "127.0.0.1:8080");
    assert_eq!(config.server().worker_count(), 2);
    assert_eq!(config.vendor().timeout, 20);
    assert_eq!(config.upload().limit_label(), "1MB");
    assert_eq!(config.upload().too_large_message(), "图片大小不能超过1MB");
}

#[tokio::test]
async fn test_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{}").unwrap();

    let config = Config::from_file(file.path()).await.unwrap();
    assert_eq!(config.server().port, 3000);
    assert_eq!(config.upload().max_image_bytes, 4 * 1024 * 1024);
    assert!(config.vendor().token_url.starts_with("https://aip.baidubce.com/"));
}

#[tokio::test]
async fn test_invalid_vendor_url_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "vendor:\n  token_url: ftp://aip.example.com/token\n").unwrap();

    let error = Config::from_file(file.path()).await.unwrap_err();
    assert!(error.to_string().contains("Vendor config error"));
}

#[tokio::test]
async fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.yaml")).await;
    assert!(result.is_err());
}

#[test]
fn test_overrides_apply_on_top_of_file_values() {
    let config = Config::from_yaml("server:\n  port: 8080\n").unwrap();
    let config = config
        .with_overrides(|key| match key {
            "GHIBLI_PORT" => Some("9090".to_string()),
            "GHIBLI_MAX_IMAGE_BYTES" => Some("2097152".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.server().port, 9090);
    assert_eq!(config.upload().limit_label(), "2MB");
}

#[test]
fn test_secret_key_is_never_serialized() {
    let mut config = Config::default();
    config.vendor.api_key = Some("id".to_string());
    config.vendor.secret_key = Some("very-secret".to_string());

    let yaml = config.to_yaml().unwrap();
    assert!(!yaml.contains("very-secret"));
    assert!(!format!("{:?}", config).contains("very-secret"));
}
