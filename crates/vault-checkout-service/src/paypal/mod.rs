//! PayPal REST API integration.
//!
//! PayPal handles everything hard in this demo:
//! - OAuth credential exchange (access and identity tokens)
//! - Order creation and settlement
//! - Instrument vaulting on successful capture

pub mod client;
pub mod types;

pub use client::PaypalClient;
pub use client::PaypalError;
pub use types::*;
