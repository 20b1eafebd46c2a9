//! # SPSID Client Library
//!
//! A client for the SPSID directory/object-management service, speaking
//! JSON-RPC 2.0 over HTTP POST. The service's catalogue of remote
//! procedures (object CRUD, search, schema introspection, default-attribute
//! templating) is exposed as typed async method calls; params and results
//! stay opaque `serde_json::Value`s because the remote schema is
//! service-defined.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spsid_client::SpsidClient;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Endpoint resolution: explicit URL, then SPSIDGUI_DB_URL, then
//!     // http://localhost
//!     let client = SpsidClient::new(None)?;
//!
//!     let found = client
//!         .search_prefix("Switch", "name", "core-")
//!         .await?;
//!     println!("matches: {}", found);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Remote application errors and transport failures are distinguished:
//! a structured error from the service becomes [`ClientError::Rpc`]
//! (code, message, and auxiliary data preserved), while network failures,
//! timeouts, non-2xx statuses, and malformed bodies become
//! [`ClientError::Transport`]. Failures never retry and never poison the
//! client; subsequent calls proceed normally.

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub mod prelude;

// Re-export main types
pub use client::{SpsidClient, SpsidClientBuilder};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV, resolve_endpoint};
pub use error::{ClientError, ClientResult, TransportError};

// Re-export transport types
pub use transport::{BoxedTransport, HttpTransport, Transport, TransportStatistics};

// Re-export wire types for convenience
pub use spsid_json_rpc;
