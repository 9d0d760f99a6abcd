//! Vault-checkout client.
//!
//! The browser side of the demo, expressed as an explicit sequential async
//! flow: fetch the public configuration, obtain a fresh identity token
//! bound to any stored customer id, describe the provider SDK script to
//! load, and drive the create/approve/capture callback sequence against
//! the backend proxy. Everything the original page displayed flows through
//! a single [`CheckoutEvent`] sink.
//!
//! # Example
//!
//! ```no_run
//! use vault_checkout_client::{BackendApi, CheckoutSession, FileStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = BackendApi::new("http://localhost:3000");
//! let store = FileStore::new("pp_customer_id");
//! let mut session = CheckoutSession::new(api, store, |event| {
//!     println!("{event:?}");
//! })?;
//!
//! let script = session.init().await?;
//! println!("load {}", script.src());
//!
//! // Wired into the SDK button callbacks:
//! let order_id = session.create_order().await?;
//! session.on_approve(&order_id).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod api;
mod error;
mod sdk;
mod session;
mod store;

pub use api::BackendApi;
pub use error::ClientError;
pub use sdk::SdkScript;
pub use session::{ButtonLabel, CheckoutEvent, CheckoutSession};
pub use store::{CustomerIdStore, FileStore, MemoryStore};
