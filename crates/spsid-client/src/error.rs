//! Error types for SPSID client operations

use serde_json::Value;
use thiserror::Error;

/// Result type for SPSID client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error type for SPSID client operations
///
/// The two kinds the protocol distinguishes: the remote service processed
/// the request and answered with a structured error (`Rpc`), or the request
/// never produced a decodable JSON-RPC response (`Transport`).
#[derive(Error, Debug)]
pub enum ClientError {
    /// The remote service returned a structured error
    #[error("RPC Error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    /// Transport-level errors
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Transport-specific errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Server answered with a non-success HTTP status
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// Request could not be sent (includes malformed endpoint URLs)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Response body was not a JSON-RPC result or error
    #[error("Invalid JSON-RPC response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Create a remote-error value from a decoded error object
    pub fn rpc(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
            data,
        }
    }

    /// Check if the error is a remote application error
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc { .. })
    }

    /// Check if the error is a timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Timeout))
    }

    /// Get the remote error code, if this is a remote error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_error_display() {
        let error = ClientError::rpc(42, "bad", None);
        assert_eq!(error.to_string(), "RPC Error 42: bad");
        assert!(error.is_rpc());
        assert_eq!(error.error_code(), Some(42));
    }

    #[test]
    fn test_rpc_error_keeps_data() {
        let error = ClientError::rpc(-32602, "Invalid params", Some(json!({"key": "attr"})));
        match error {
            ClientError::Rpc { data, .. } => assert_eq!(data, Some(json!({"key": "attr"}))),
            _ => panic!("expected Rpc variant"),
        }
    }

    #[test]
    fn test_timeout_predicate() {
        let error: ClientError = TransportError::Timeout.into();
        assert!(error.is_timeout());
        assert!(!error.is_rpc());
        assert_eq!(error.error_code(), None);
    }

    #[test]
    fn test_transport_error_display() {
        let error: ClientError = TransportError::Http {
            status: 503,
            body: "Service Unavailable".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Transport error: HTTP error 503: Service Unavailable"
        );
    }
}
