//! Core types for the vault-checkout demo.
//!
//! This crate provides the wire types shared between the backend proxy and
//! the checkout client:
//!
//! - **Environment**: `Environment` (sandbox/live) and its API base URL
//! - **API surface**: `ClientConfig`, `IdTokenResponse`, `OrderParams`,
//!   `OrderSummary`
//! - **Vault inspection**: `VaultOutcome` and `vault_data` for picking the
//!   vault payload out of a raw capture response
//!
//! Upstream order and capture payloads are deliberately carried as
//! `serde_json::Value` so the proxy can forward them verbatim; only the
//! fields this demo actually reads get typed representations here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod environment;
pub mod vault;

pub use api::{ClientConfig, IdTokenResponse, OrderParams, OrderSummary};
pub use environment::Environment;
pub use vault::{vault_data, VaultOutcome};
