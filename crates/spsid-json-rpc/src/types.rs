use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC protocol version tag
///
/// Serializes to the literal `"2.0"`. Deserialization of responses tolerates
/// a missing tag via `#[serde(default)]` on the containing structs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JsonRpcVersion {
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

impl fmt::Display for JsonRpcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::JSONRPC_VERSION)
    }
}

/// Request identifier correlating a response to its originating request
///
/// The SPSID client only ever sends numbers, but servers may echo either form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    String(String),
}

impl RequestId {
    /// The numeric value, if this id is a number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            RequestId::Number(n) => Some(*n),
            RequestId::String(_) => None,
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

impl From<String> for RequestId {
    fn from(s: String) -> Self {
        RequestId::String(s)
    }
}

impl From<&str> for RequestId {
    fn from(s: &str) -> Self {
        RequestId::String(s.to_string())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_str, json, to_value};

    #[test]
    fn test_version_serialization() {
        assert_eq!(to_value(JsonRpcVersion::V2_0).unwrap(), json!("2.0"));

        let parsed: JsonRpcVersion = from_str("\"2.0\"").unwrap();
        assert_eq!(parsed, JsonRpcVersion::V2_0);

        assert!(from_str::<JsonRpcVersion>("\"1.0\"").is_err());
    }

    #[test]
    fn test_request_id_untagged() {
        let number: RequestId = from_str("7").unwrap();
        assert_eq!(number, RequestId::Number(7));
        assert_eq!(number.as_number(), Some(7));

        let string: RequestId = from_str("\"req-7\"").unwrap();
        assert_eq!(string, RequestId::String("req-7".to_string()));
        assert_eq!(string.as_number(), None);
    }

    #[test]
    fn test_request_id_display() {
        assert_eq!(RequestId::Number(42).to_string(), "42");
        assert_eq!(RequestId::from("abc").to_string(), "abc");
    }
}
