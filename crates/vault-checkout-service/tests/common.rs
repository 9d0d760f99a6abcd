//! Common test utilities for vault-checkout integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vault_checkout_core::Environment;
use vault_checkout_service::{create_router, AppState, ServiceConfig};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Mock server standing in for the PayPal REST API.
    pub paypal: MockServer,
}

impl TestHarness {
    /// Create a new test harness with a mocked PayPal API.
    pub async fn new() -> Self {
        Self::with_base_url("https://shop.example").await
    }

    /// Create a harness with a specific externally reachable base URL.
    pub async fn with_base_url(base_url: &str) -> Self {
        let paypal = MockServer::start().await;

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            client_id: Some("test-client-id".into()),
            client_secret: Some("test-client-secret".into()),
            env: Environment::Sandbox,
            base_url: base_url.into(),
            api_base_url: paypal.uri(),
        };

        let state = AppState::new(config);
        let router: Router = create_router(state);
        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, paypal }
    }

    /// Create a server with no merchant credentials configured.
    pub fn unconfigured() -> TestServer {
        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            client_id: None,
            client_secret: None,
            env: Environment::Sandbox,
            base_url: "http://localhost:3000".into(),
            api_base_url: Environment::Sandbox.api_base_url().into(),
        };

        let state = AppState::new(config);
        TestServer::new(create_router(state)).expect("Failed to create test server")
    }

    /// Mount a successful token exchange on the mock PayPal API.
    pub async fn mock_token(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "A1",
                "token_type": "Bearer",
                "expires_in": 32_400,
                "id_token": "T1"
            })))
            .mount(&self.paypal)
            .await;
    }
}
