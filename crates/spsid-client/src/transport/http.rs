//! HTTP transport implementation for the SPSID client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientResult, TransportError};
use crate::transport::{Transport, TransportStatistics};

/// HTTP transport posting JSON-RPC envelopes to a fixed endpoint
///
/// The endpoint is held as an opaque string and never validated here;
/// a malformed URL surfaces as a connection failure on the first call.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
    /// Server endpoint URL
    endpoint: String,
    /// Statistics
    stats: Arc<parking_lot::Mutex<TransportStatistics>>,
}

impl HttpTransport {
    /// Create a new HTTP transport for the given endpoint
    pub fn new(endpoint: impl Into<String>, config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder().timeout(config.request_timeout);
        if let Some(ref user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let client = builder.build().map_err(|e| {
            TransportError::ConnectionFailed(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            stats: Arc::new(parking_lot::Mutex::new(TransportStatistics::default())),
        })
    }

    /// Create HTTP transport with a custom reqwest client
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            stats: Arc::new(parking_lot::Mutex::new(TransportStatistics::default())),
        }
    }

    /// Update statistics
    fn update_stats<F>(&self, update_fn: F)
    where
        F: FnOnce(&mut TransportStatistics),
    {
        let mut stats = self.stats.lock();
        update_fn(&mut stats);
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(&self, request: Value) -> ClientResult<Value> {
        debug!(
            endpoint = %self.endpoint,
            method = request.get("method").and_then(|v| v.as_str()),
            "Sending HTTP request"
        );

        self.update_stats(|stats| stats.requests_sent += 1);

        let response = match self
            .client
            .post(self.endpoint.as_str())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let error = if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::ConnectionFailed(e.to_string())
                };
                self.update_stats(|stats| {
                    stats.errors += 1;
                    stats.last_error = Some(error.to_string());
                });
                warn!(endpoint = %self.endpoint, error = %error, "HTTP request failed");
                return Err(error.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            self.update_stats(|stats| {
                stats.errors += 1;
                stats.last_error = Some(format!("HTTP {}: {}", status, body));
            });
            return Err(TransportError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let error = if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::ConnectionFailed(e.to_string())
                };
                self.update_stats(|stats| {
                    stats.errors += 1;
                    stats.last_error = Some(error.to_string());
                });
                return Err(error.into());
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => {
                self.update_stats(|stats| stats.responses_received += 1);
                debug!(endpoint = %self.endpoint, "HTTP request completed");
                Ok(body)
            }
            Err(e) => {
                self.update_stats(|stats| {
                    stats.errors += 1;
                    stats.last_error = Some(format!("Invalid response body: {}", e));
                });
                Err(TransportError::InvalidResponse(e.to_string()).into())
            }
        }
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn statistics(&self) -> TransportStatistics {
        self.stats.lock().clone()
    }
}
