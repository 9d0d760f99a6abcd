//! Vault-checkout backend proxy.
//!
//! A thin HTTP service that holds the merchant's PayPal credentials and
//! brokers three operations for the browser:
//!
//! - Identity token issuance (optionally bound to a vaulted customer id)
//! - Order creation with vault-on-success attributes
//! - Order capture
//!
//! Upstream responses are passed through largely unchanged; rejections
//! keep the provider's status code and body. The service itself is
//! stateless — every provider-touching request exchanges the merchant
//! credentials for a fresh access token.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Static page handlers need async for routing

pub mod config;
pub mod error;
pub mod handlers;
pub mod paypal;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use paypal::{PaypalClient, PaypalError};
pub use routes::create_router;
pub use state::AppState;
