//! # SPSID Client Prelude
//!
//! Convenient re-exports of the most commonly used types.
//!
//! ```rust
//! use spsid_client::prelude::*;
//! ```

// Core client types
pub use crate::client::{SpsidClient, SpsidClientBuilder};
pub use crate::config::{ClientConfig, DEFAULT_ENDPOINT, ENDPOINT_ENV, resolve_endpoint};
pub use crate::error::{ClientError, ClientResult, TransportError};

// Transport types
pub use crate::transport::{BoxedTransport, HttpTransport, Transport, TransportStatistics};

// Wire types
pub use spsid_json_rpc::{
    JsonRpcErrorObject, JsonRpcFailure, JsonRpcMessage, JsonRpcRequest, JsonRpcResponse,
    JsonRpcVersion, RequestId, RequestParams,
};

// Standard library types commonly used with the client
pub use std::time::Duration;
