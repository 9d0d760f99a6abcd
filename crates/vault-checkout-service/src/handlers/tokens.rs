//! Identity token handler.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use vault_checkout_core::IdTokenResponse;

use crate::error::ApiError;
use crate::paypal::TokenRequest;
use crate::state::AppState;

/// Identity token query parameters.
#[derive(Debug, Deserialize)]
pub struct IdTokenQuery {
    /// Stored customer id of a returning payer, if any.
    #[serde(rename = "customerId", default)]
    pub customer_id: String,
}

/// Issue a fresh identity token, optionally bound to a vaulted customer.
///
/// Binding the stored customer id is what lets the SDK surface a
/// returning payer's saved instruments.
pub async fn get_id_token(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdTokenQuery>,
) -> Result<Json<IdTokenResponse>, ApiError> {
    let paypal = state.paypal()?;

    let request = TokenRequest::id_token(&query.customer_id);
    tracing::debug!(
        bound = request.customer_id.is_some(),
        "Issuing identity token"
    );

    let token = paypal.get_access_token(&request).await?;

    Ok(Json(IdTokenResponse {
        id_token: token.id_token,
    }))
}
