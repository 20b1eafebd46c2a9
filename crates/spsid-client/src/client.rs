//! SPSID client implementation

use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use spsid_json_rpc::{JsonRpcMessage, JsonRpcRequest, RequestId};

use crate::config::{ClientConfig, resolve_endpoint};
use crate::error::{ClientError, ClientResult, TransportError};
use crate::transport::{HttpTransport, Transport};

/// Client for the SPSID directory service
///
/// Every public method wraps its arguments into named parameters and
/// delegates to [`call`](SpsidClient::call), which builds the JSON-RPC
/// envelope, assigns the next request id, and translates the response.
///
/// ```rust,no_run
/// use spsid_client::SpsidClient;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SpsidClient::new(Some("http://spsid.example.net:8080/rpc"))?;
/// let object = client
///     .create_object("Person", json!({"name": "Alice"}))
///     .await?;
/// println!("created: {}", object);
/// # Ok(())
/// # }
/// ```
pub struct SpsidClient {
    /// Transport layer
    transport: Arc<dyn Transport>,
    /// Next request id; advances exactly once per call attempt
    next_id: AtomicU64,
}

impl SpsidClient {
    /// Create a client, resolving the endpoint from the explicit argument,
    /// the `SPSIDGUI_DB_URL` environment variable, or the local default
    pub fn new(url: Option<&str>) -> ClientResult<Self> {
        let mut builder = SpsidClientBuilder::new();
        if let Some(url) = url {
            builder = builder.endpoint(url);
        }
        builder.build()
    }

    /// Create a client over an existing transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
        }
    }

    /// Endpoint the client talks to
    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Issue a raw RPC call
    ///
    /// Assigns the next request id, sends the envelope, and returns the
    /// remote `result` value opaquely. A structured remote error becomes
    /// [`ClientError::Rpc`]; anything that prevents a decodable JSON-RPC
    /// response becomes [`ClientError::Transport`]. The id counter advances
    /// on every attempt, failed or not, so ids are unique and strictly
    /// increasing for the lifetime of the client.
    pub async fn call(&self, method: &str, params: Map<String, Value>) -> ClientResult<Value> {
        // Single atomic acquisition: yields the id and advances the counter
        // before any fallible work, on every path.
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);

        let request =
            JsonRpcRequest::with_object_params(RequestId::Number(id as i64), method, params);
        debug!(method, id, "Issuing RPC call");

        let envelope = serde_json::to_value(&request)?;
        let body = self.transport.send_request(envelope).await?;

        match serde_json::from_value::<JsonRpcMessage>(body) {
            Ok(JsonRpcMessage::Failure(failure)) => {
                warn!(method, id, code = failure.error.code, "RPC call failed");
                Err(ClientError::Rpc {
                    code: failure.error.code,
                    message: failure.error.message,
                    data: failure.error.data,
                })
            }
            Ok(JsonRpcMessage::Response(response)) => Ok(response.result),
            Err(e) => Err(TransportError::InvalidResponse(e.to_string()).into()),
        }
    }

    /// Create an object of the given class from its attribute values
    ///
    /// Attribute validation happens on the server; the created object's
    /// representation is returned as-is.
    pub async fn create_object(&self, objclass: &str, attr: Value) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("objclass".to_string(), objclass.into());
        params.insert("attr".to_string(), attr);
        self.call("create_object", params).await
    }

    /// Apply attribute modifications to an existing object
    pub async fn modify_object(&self, id: &str, mod_attr: Value) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("id".to_string(), id.into());
        params.insert("mod_attr".to_string(), mod_attr);
        self.call("modify_object", params).await
    }

    /// Check attribute values against the server-side schema without creating
    pub async fn validate_object(&self, attr: Value) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("attr".to_string(), attr);
        self.call("validate_object", params).await
    }

    /// Delete an object by id
    pub async fn delete_object(&self, id: &str) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("id".to_string(), id.into());
        self.call("delete_object", params).await
    }

    /// Fetch an object by id
    pub async fn get_object(&self, id: &str) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("id".to_string(), id.into());
        self.call("get_object", params).await
    }

    /// Fetch the modification log of an object
    pub async fn get_object_log(&self, id: &str) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("id".to_string(), id.into());
        self.call("get_object_log", params).await
    }

    /// Search a container for objects of a class matching the given
    /// attribute values
    pub async fn search_objects(
        &self,
        container: &str,
        objclass: &str,
        search_attrs: Value,
    ) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("container".to_string(), container.into());
        params.insert("objclass".to_string(), objclass.into());
        params.insert("search_attrs".to_string(), search_attrs);
        self.call("search_objects", params).await
    }

    /// Search for objects whose attribute starts with the given prefix
    pub async fn search_prefix(
        &self,
        objclass: &str,
        attr_name: &str,
        attr_prefix: &str,
    ) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("objclass".to_string(), objclass.into());
        params.insert("attr_name".to_string(), attr_name.into());
        params.insert("attr_prefix".to_string(), attr_prefix.into());
        self.call("search_prefix", params).await
    }

    /// Full-text search across objects of a class
    pub async fn search_fulltext(
        &self,
        objclass: &str,
        search_string: &str,
    ) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("objclass".to_string(), objclass.into());
        params.insert("search_string".to_string(), search_string.into());
        self.call("search_fulltext", params).await
    }

    /// List the object classes present in a container
    pub async fn contained_classes(&self, container: &str) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("container".to_string(), container.into());
        self.call("contained_classes", params).await
    }

    /// Fetch the service schema
    pub async fn get_schema(&self) -> ClientResult<Value> {
        self.call("get_schema", Map::new()).await
    }

    /// Fetch default attribute values for a new object, expanded from the
    /// server-side templates with the given template keys
    pub async fn new_object_default_attrs(
        &self,
        container: &str,
        objclass: &str,
        templatekeys: Value,
    ) -> ClientResult<Value> {
        let mut params = Map::new();
        params.insert("container".to_string(), container.into());
        params.insert("objclass".to_string(), objclass.into());
        params.insert("templatekeys".to_string(), templatekeys);
        self.call("new_object_default_attrs", params).await
    }
}

/// Builder for [`SpsidClient`]
#[derive(Default)]
pub struct SpsidClientBuilder {
    endpoint: Option<String>,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl SpsidClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            config: ClientConfig::default(),
            transport: None,
        }
    }

    /// Set an explicit endpoint URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of HTTP
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client
    ///
    /// Without a custom transport, the endpoint is resolved (explicit, then
    /// environment, then default) and an [`HttpTransport`] is created.
    pub fn build(self) -> ClientResult<SpsidClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let endpoint = resolve_endpoint(self.endpoint.as_deref(), |name| {
                    std::env::var(name).ok()
                });
                Arc::new(HttpTransport::new(endpoint, &self.config)?)
            }
        };

        Ok(SpsidClient::with_transport(transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_explicit_endpoint() {
        let client = SpsidClientBuilder::new()
            .endpoint("http://127.0.0.1:9090/rpc")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9090/rpc");
    }

    #[test]
    fn test_malformed_endpoint_is_accepted_at_construction() {
        let client = SpsidClient::new(Some("::definitely-not-a-url::")).unwrap();
        assert_eq!(client.endpoint(), "::definitely-not-a-url::");
    }
}
