//! Public configuration handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use vault_checkout_core::ClientConfig;

use crate::state::AppState;

/// Return the public client id and environment name.
///
/// Never fails: missing credentials were already warned about at startup
/// and simply leave `clientId` out of the body.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ClientConfig> {
    Json(ClientConfig {
        client_id: state.config.client_id.clone(),
        env: state.config.env,
    })
}
