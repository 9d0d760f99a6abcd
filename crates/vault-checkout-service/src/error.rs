//! API error types and responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

use crate::paypal::PaypalError;

/// API error type.
///
/// Two shapes cover the whole taxonomy: provider rejections relayed
/// verbatim, and everything else collapsed into a 500 with an `error`
/// message (the original demo's contract).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The provider rejected an order/capture call; status and body are
    /// relayed to the browser unchanged.
    #[error("upstream error: {status}")]
    Upstream {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream JSON body, forwarded as-is.
        body: Value,
    },

    /// Token exchange, transport, or configuration failure, surfaced as a
    /// 500 with the message in an `{"error": ...}` body.
    #[error("{0}")]
    Gateway(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream { status, body } => {
                let status = StatusCode::from_u16(status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                tracing::warn!(status = %status, "Relaying provider rejection");
                (status, Json(body)).into_response()
            }
            Self::Gateway(message) => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

impl From<PaypalError> for ApiError {
    fn from(err: PaypalError) -> Self {
        match err {
            PaypalError::Api { status, body } => Self::Upstream { status, body },
            PaypalError::Token { .. } | PaypalError::Http(_) => Self::Gateway(err.to_string()),
        }
    }
}
