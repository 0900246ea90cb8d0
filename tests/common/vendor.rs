//! Mock Baidu AIP endpoints

use ghibli_gateway::Config;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/oauth/2.0/token";
pub const TRANSFORM_PATH: &str = "/rest/2.0/image-process/v1/selfie_anime";
pub const API_KEY: &str = "test-api-key";
pub const SECRET_KEY: &str = "test-secret-key";
pub const ACCESS_TOKEN: &str = "24.test-token";

/// A wiremock server standing in for both vendor endpoints
pub struct MockVendor {
    pub server: MockServer,
}

impl MockVendor {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Gateway config pointing at this mock, with credentials set
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.vendor.token_url = format!("{}{}", self.server.uri(), TOKEN_PATH);
        config.vendor.transform_url = format!("{}{}", self.server.uri(), TRANSFORM_PATH);
        config.vendor.api_key = Some(API_KEY.to_string());
        config.vendor.secret_key = Some(SECRET_KEY.to_string());
        config.vendor.timeout = 5;
        config
    }

    /// Token endpoint answering with `body`, expected `calls` times
    pub async fn token_returns(&self, body: Value, calls: u64) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(query_param("grant_type", "client_credentials"))
            .and(query_param("client_id", API_KEY))
            .and(query_param("client_secret", SECRET_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Token endpoint handing out [`ACCESS_TOKEN`]
    pub async fn token_ok(&self, calls: u64) {
        self.token_returns(json!({"access_token": ACCESS_TOKEN, "expires_in": 2592000}), calls)
            .await;
    }

    /// Transform endpoint answering with `body`, expected `calls` times
    pub async fn transform_returns(&self, body: Value, calls: u64) {
        Mock::given(method("POST"))
            .and(path(TRANSFORM_PATH))
            .and(query_param("access_token", ACCESS_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(&self.server)
            .await;
    }

    /// Transform endpoint that must never be reached
    pub async fn transform_never_called(&self) {
        Mock::given(method("POST"))
            .and(path(TRANSFORM_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"image": "QUJD"})))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Neither endpoint may be reached
    pub async fn no_calls(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }
}
