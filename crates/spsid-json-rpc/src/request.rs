use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::{JsonRpcVersion, RequestId};

/// Parameters for a JSON-RPC request
///
/// SPSID methods always take named parameters; the positional form is kept
/// for JSON-RPC 2.0 completeness.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RequestParams {
    /// Named parameters as an object
    Object(Map<String, Value>),
    /// Positional parameters as an array
    Array(Vec<Value>),
}

impl RequestParams {
    /// Empty named parameters (`{}` on the wire)
    pub fn empty() -> Self {
        RequestParams::Object(Map::new())
    }

    /// Get a parameter by name (for object params)
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            RequestParams::Object(map) => map.get(key),
            RequestParams::Array(_) => None,
        }
    }

    /// Check if parameters are empty
    pub fn is_empty(&self) -> bool {
        match self {
            RequestParams::Object(map) => map.is_empty(),
            RequestParams::Array(vec) => vec.is_empty(),
        }
    }

    /// Convert to a `serde_json::Value` for embedding
    pub fn to_value(&self) -> Value {
        match self {
            RequestParams::Object(map) => Value::Object(map.clone()),
            RequestParams::Array(arr) => Value::Array(arr.clone()),
        }
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        RequestParams::Object(map)
    }
}

impl From<Vec<Value>> for RequestParams {
    fn from(vec: Vec<Value>) -> Self {
        RequestParams::Array(vec)
    }
}

/// A JSON-RPC request envelope
///
/// `params` is always serialized, even when empty: a method without
/// arguments still carries `"params": {}` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: RequestId,
    pub method: String,
    pub params: RequestParams,
}

impl JsonRpcRequest {
    pub fn new(id: RequestId, method: impl Into<String>, params: RequestParams) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            method: method.into(),
            params,
        }
    }

    /// Create a request with named parameters
    pub fn with_object_params(
        id: RequestId,
        method: impl Into<String>,
        params: Map<String, Value>,
    ) -> Self {
        Self::new(id, method, RequestParams::Object(params))
    }

    /// Get a parameter by name (if params are an object)
    pub fn get_param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_string, to_value};

    #[test]
    fn test_request_serialization() {
        let request = JsonRpcRequest::with_object_params(
            RequestId::Number(1),
            "get_object",
            {
                let mut params = Map::new();
                params.insert("id".to_string(), json!("node-01"));
                params
            },
        );

        let value = to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "get_object",
                "params": {"id": "node-01"}
            })
        );
    }

    #[test]
    fn test_empty_params_are_serialized() {
        let request =
            JsonRpcRequest::new(RequestId::Number(5), "get_schema", RequestParams::empty());

        let value = to_value(&request).unwrap();
        assert_eq!(value["params"], json!({}));
        assert!(value.get("params").is_some());
    }

    #[test]
    fn test_request_round_trip() {
        let request = JsonRpcRequest::with_object_params(
            RequestId::Number(3),
            "search_fulltext",
            {
                let mut params = Map::new();
                params.insert("objclass".to_string(), json!("Person"));
                params.insert("search_string".to_string(), json!("alice"));
                params
            },
        );

        let json_str = to_string(&request).unwrap();
        let parsed: JsonRpcRequest = from_str(&json_str).unwrap();

        assert_eq!(parsed.id, RequestId::Number(3));
        assert_eq!(parsed.method, "search_fulltext");
        assert_eq!(parsed.get_param("objclass"), Some(&json!("Person")));
        assert_eq!(parsed.get_param("missing"), None);
    }

    #[test]
    fn test_array_params() {
        let params: RequestParams = vec![json!("first"), json!(2)].into();
        assert!(!params.is_empty());
        assert_eq!(params.get("first"), None);
        assert_eq!(params.to_value(), json!(["first", 2]));
    }
}
