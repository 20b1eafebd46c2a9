use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JsonRpcErrorObject;
use crate::types::{JsonRpcVersion, RequestId};

/// A successful JSON-RPC response
///
/// The version tag and id are not validated by the client, so both are
/// lenient: the tag defaults when absent and the id may be missing or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(rename = "jsonrpc", default)]
    pub version: JsonRpcVersion,
    pub id: Option<RequestId>,
    pub result: Value,
}

impl JsonRpcResponse {
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: Some(id),
            result,
        }
    }
}

/// A JSON-RPC error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcFailure {
    #[serde(rename = "jsonrpc", default)]
    pub version: JsonRpcVersion,
    pub id: Option<RequestId>,
    pub error: JsonRpcErrorObject,
}

impl JsonRpcFailure {
    pub fn new(id: Option<RequestId>, error: JsonRpcErrorObject) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id,
            error,
        }
    }
}

/// Union of the two response shapes
///
/// The failure variant is tried first, matching the convention that a body
/// carrying both fields is treated as an error. A body with neither `result`
/// nor `error` fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    Failure(JsonRpcFailure),
    Response(JsonRpcResponse),
}

impl JsonRpcMessage {
    /// Check if this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcMessage::Failure(_))
    }

    /// Get the request id from either shape
    pub fn id(&self) -> Option<&RequestId> {
        match self {
            JsonRpcMessage::Response(resp) => resp.id.as_ref(),
            JsonRpcMessage::Failure(failure) => failure.id.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json};

    #[test]
    fn test_parse_success_response() {
        let message: JsonRpcMessage = from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"id": "obj-1", "attr": {"name": "core-sw1"}}
        }))
        .unwrap();

        assert!(!message.is_error());
        assert_eq!(message.id(), Some(&RequestId::Number(1)));
        match message {
            JsonRpcMessage::Response(resp) => {
                assert_eq!(resp.result["attr"]["name"], json!("core-sw1"));
            }
            JsonRpcMessage::Failure(_) => panic!("expected success"),
        }
    }

    #[test]
    fn test_parse_error_response() {
        let message: JsonRpcMessage = from_value(json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": {"code": -32601, "message": "Method not found"}
        }))
        .unwrap();

        assert!(message.is_error());
        match message {
            JsonRpcMessage::Failure(failure) => {
                assert_eq!(failure.error.code, -32601);
                assert_eq!(failure.error.message, "Method not found");
                assert_eq!(failure.error.data, None);
            }
            JsonRpcMessage::Response(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_parse_bare_result() {
        // Version tag and id are not required for decoding
        let message: JsonRpcMessage = from_value(json!({"result": [1, 2, 3]})).unwrap();
        assert!(!message.is_error());
        assert_eq!(message.id(), None);
    }

    #[test]
    fn test_null_result_is_success() {
        let message: JsonRpcMessage =
            from_value(json!({"jsonrpc": "2.0", "id": 4, "result": null})).unwrap();
        match message {
            JsonRpcMessage::Response(resp) => assert!(resp.result.is_null()),
            JsonRpcMessage::Failure(_) => panic!("expected success"),
        }
    }

    #[test]
    fn test_error_takes_precedence() {
        let message: JsonRpcMessage = from_value(json!({
            "id": 5,
            "result": null,
            "error": {"code": -32603, "message": "Internal error"}
        }))
        .unwrap();
        assert!(message.is_error());
    }

    #[test]
    fn test_neither_result_nor_error_fails() {
        let parsed = from_value::<JsonRpcMessage>(json!({"jsonrpc": "2.0", "id": 6}));
        assert!(parsed.is_err());
    }
}
