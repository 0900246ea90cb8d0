//! The Rust client and upload session against a live gateway

use crate::common::{MockVendor, jpeg_bytes};
use ghibli_gateway::ImageUpload;
use ghibli_gateway::sdk::{ClientError, TransformClient};
use ghibli_gateway::server::HttpServer;
use ghibli_gateway::ui::{ResultPanel, UploadSession};
use serde_json::json;
use std::net::TcpListener;

/// Serve the gateway on an ephemeral port and return a client for it
fn spawn_gateway(vendor: &MockVendor) -> (TransformClient, actix_web::dev::ServerHandle) {
    let mut config = vendor.config();
    config.server.workers = Some(1);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(&config).unwrap().listen(listener).unwrap();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let client = TransformClient::new(&format!("http://{}", addr)).unwrap();
    (client, handle)
}

fn photo(size: usize) -> ImageUpload {
    ImageUpload::new(jpeg_bytes(size))
        .with_filename("photo.jpg")
        .with_content_type("image/jpeg")
}

#[actix_web::test]
async fn test_client_receives_data_url() {
    let vendor = MockVendor::start().await;
    vendor.token_ok(1).await;
    vendor.transform_returns(json!({"image": "QUJD"}), 1).await;
    let (client, handle) = spawn_gateway(&vendor);

    let styled = client.transform(&photo(2048)).await.unwrap();
    assert_eq!(styled.url, "data:image/jpeg;base64,QUJD");
    assert_eq!(styled.decode().unwrap(), b"ABC");

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_client_reports_oversized_upload() {
    let vendor = MockVendor::start().await;
    vendor.no_calls().await;
    let (client, handle) = spawn_gateway(&vendor);

    let error = client.transform(&photo(5 * 1024 * 1024)).await.unwrap_err();
    match error {
        ClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "图片大小不能超过4MB");
        }
        other => panic!("unexpected error: {}", other),
    }

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_session_shows_original_and_styled_image() {
    let vendor = MockVendor::start().await;
    vendor.token_ok(1).await;
    vendor.transform_returns(json!({"image": "QUJD"}), 1).await;
    let (client, handle) = spawn_gateway(&vendor);

    let mut session = UploadSession::new();
    let notice = session.drop_files(&client, vec![photo(512)]).await;

    assert_eq!(notice, None);
    assert!(
        session
            .original_preview()
            .unwrap()
            .starts_with("data:image/jpeg;base64,/9j/")
    );
    assert_eq!(
        session.panel().styled_url(),
        Some("data:image/jpeg;base64,QUJD")
    );

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_session_failure_shows_generic_notice() {
    let vendor = MockVendor::start().await;
    vendor.token_ok(1).await;
    vendor
        .transform_returns(json!({"error_code": 17, "error_msg": "Open api daily request limit reached"}), 1)
        .await;
    let (client, handle) = spawn_gateway(&vendor);

    let mut session = UploadSession::new();
    let notice = session.drop_files(&client, vec![photo(512)]).await;

    assert_eq!(notice, Some("图片转换失败，请重试"));
    assert_eq!(session.panel(), &ResultPanel::Empty);
    assert!(session.original_preview().is_some());

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_session_ignores_drop_without_images() {
    let vendor = MockVendor::start().await;
    vendor.no_calls().await;
    let (client, handle) = spawn_gateway(&vendor);

    let notes = ImageUpload::new(b"just text".to_vec()).with_filename("notes.txt");
    let mut session = UploadSession::new();
    let notice = session.drop_files(&client, vec![notes]).await;

    assert_eq!(notice, None);
    assert!(session.original_preview().is_none());
    assert_eq!(session.panel(), &ResultPanel::Empty);

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_session_uses_first_accepted_file_only() {
    let vendor = MockVendor::start().await;
    vendor.token_ok(1).await;
    vendor.transform_returns(json!({"image": "QUJD"}), 1).await;
    let (client, handle) = spawn_gateway(&vendor);

    let files = vec![
        ImageUpload::new(b"%PDF-1.7".to_vec()).with_filename("scan.pdf"),
        photo(256),
        photo(128),
    ];
    let mut session = UploadSession::new();
    let notice = session.drop_files(&client, files).await;

    assert_eq!(notice, None);
    assert!(session.panel().styled_url().is_some());

    handle.stop(true).await;
}
