use super::mocks::MockInferenceClient;
use axum::Router;
use axum_test::TestServer;
use hf_proxy_rust::{
    config::InferenceConfig,
    relay::ChatRelay,
    server::{self, handlers::AppState},
};
use std::sync::Arc;

pub const TEST_TOKEN: &str = "hf_test_token";
pub const TEST_MODEL: &str = "gpt2";

/// Inference settings pointing at a local mock upstream
pub fn create_test_config(api_base: &str) -> InferenceConfig {
    InferenceConfig {
        api_base: api_base.to_string(),
        token: Some(TEST_TOKEN.to_string()),
        model: TEST_MODEL.to_string(),
        timeout_secs: None,
    }
}

/// Router backed by the real HTTP client
pub fn create_app(config: &InferenceConfig) -> Router {
    let relay = ChatRelay::from_config(config).expect("Failed to build relay");
    server::router(AppState::new(relay))
}

/// Router backed by an in-process mock client
pub fn create_mock_app(client: MockInferenceClient) -> Router {
    server::router(AppState::new(ChatRelay::new(Arc::new(client))))
}

pub fn create_test_server(app: Router) -> TestServer {
    TestServer::new(app).expect("Failed to start test server")
}
