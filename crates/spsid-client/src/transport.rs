//! Transport layer for the SPSID client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientResult;

pub mod http;

pub use http::HttpTransport;

/// Transport trait: carries one request envelope to the server and returns
/// the decoded response body
///
/// Methods take `&self` so a single client can have several independent
/// calls in flight.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request envelope and return the decoded response body
    async fn send_request(&self, request: Value) -> ClientResult<Value>;

    /// Endpoint this transport talks to
    fn endpoint(&self) -> &str;

    /// Transport statistics
    fn statistics(&self) -> TransportStatistics {
        TransportStatistics::default()
    }
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn Transport>;

/// Transport statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct TransportStatistics {
    /// Number of requests sent
    pub requests_sent: u64,
    /// Number of responses received
    pub responses_received: u64,
    /// Number of errors encountered
    pub errors: u64,
    /// Last error message
    pub last_error: Option<String>,
}
