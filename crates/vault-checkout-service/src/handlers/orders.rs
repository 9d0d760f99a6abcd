//! Order creation and capture handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use vault_checkout_core::OrderParams;

use crate::error::ApiError;
use crate::paypal::OrderBody;
use crate::state::AppState;

/// Create an order with vault-on-success attributes.
///
/// Amount and currency default when the body is missing or partial; the
/// values are forwarded to the provider unvalidated. The upstream order
/// object is returned verbatim, as is any upstream rejection.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Option<Json<OrderParams>>,
) -> Result<Json<Value>, ApiError> {
    let params = body.map_or_else(OrderParams::default, |Json(params)| params);
    let paypal = state.paypal()?;

    tracing::info!(amount = %params.amount, currency = %params.currency, "Creating order");

    let order = OrderBody::vault_on_success(
        &params,
        state.config.return_url(),
        state.config.cancel_url(),
    );

    let created = paypal.create_order(&order).await?;
    Ok(Json(created))
}

/// Capture a previously created order.
///
/// The capture response is returned verbatim, including any vault and
/// customer payload the provider embedded.
pub async fn capture_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let paypal = state.paypal()?;

    tracing::info!(order_id = %order_id, "Capturing order");

    let captured = paypal.capture_order(&order_id).await?;
    Ok(Json(captured))
}
