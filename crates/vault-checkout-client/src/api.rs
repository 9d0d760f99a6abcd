//! HTTP client for the backend proxy.

use reqwest::Client;
use serde_json::Value;

use vault_checkout_core::{ClientConfig, IdTokenResponse, OrderParams, OrderSummary};

use crate::error::ClientError;

/// Client for the backend proxy's API surface.
#[derive(Debug, Clone)]
pub struct BackendApi {
    client: Client,
    base_url: String,
}

impl BackendApi {
    /// Create a new backend client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend proxy (e.g. `"http://localhost:3000"`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the public configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_config(&self) -> Result<ClientConfig, ClientError> {
        let url = format!("{}/api/config", self.base_url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Fetch a fresh identity token.
    ///
    /// The `customerId` query parameter is always sent, empty on a first
    /// visit, so the exchange is bound to the stored customer when one
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn get_id_token(&self, customer_id: &str) -> Result<IdTokenResponse, ClientError> {
        let url = format!("{}/api/id-token", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("customerId", customer_id)])
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Create an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn create_order(&self, params: &OrderParams) -> Result<OrderSummary, ClientError> {
        let url = format!("{}/api/orders", self.base_url);
        let response = self.client.post(&url).json(params).send().await?;
        Self::handle_response(response).await
    }

    /// Capture an approved order, returning the raw capture payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server returns an error.
    pub async fn capture_order(&self, order_id: &str) -> Result<Value, ClientError> {
        let url = format!("{}/api/orders/{order_id}/capture", self.base_url);
        let response = self.client.post(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle a backend response and convert errors.
    ///
    /// Non-success statuses become [`ClientError::Api`] carrying the
    /// server-supplied `error` message when the body has one.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {status}"));

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
