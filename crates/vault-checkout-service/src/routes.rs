//! Router configuration.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{config, orders, pages, tokens};
use crate::state::AppState;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## API
/// - `GET /api/config` - Public client id and environment
/// - `GET /api/id-token` - Fresh identity token, optionally customer-bound
/// - `POST /api/orders` - Create an order (vault on success)
/// - `POST /api/orders/:id/capture` - Capture a created order
///
/// ## Redirect pages
/// - `GET /return` - Static confirmation page
/// - `GET /cancel` - Static cancellation page
///
/// No timeout layer: a hung provider call is allowed to hold its request
/// open, matching the demo's semantics.
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // API
        .route("/api/config", get(config::get_config))
        .route("/api/id-token", get(tokens::get_id_token))
        .route("/api/orders", post(orders::create_order))
        .route("/api/orders/:id/capture", post(orders::capture_order))
        // Redirect pages
        .route("/return", get(pages::return_page))
        .route("/cancel", get(pages::cancel_page))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
