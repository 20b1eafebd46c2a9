//! Configuration and endpoint resolution for the SPSID client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint used when neither an explicit URL nor the environment provides one
pub const DEFAULT_ENDPOINT: &str = "http://localhost";

/// Environment variable consulted when no explicit endpoint is given
pub const ENDPOINT_ENV: &str = "SPSIDGUI_DB_URL";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User agent string sent with every request
    pub user_agent: Option<String>,

    /// Timeout applied to each request
    #[serde(with = "duration_serde")]
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: Some(format!("spsid-client/{}", env!("CARGO_PKG_VERSION"))),
            request_timeout: Duration::from_secs(20),
        }
    }
}

/// Resolve the endpoint URL to use
///
/// Priority: explicit argument, then the `SPSIDGUI_DB_URL` environment
/// variable, then [`DEFAULT_ENDPOINT`]. The environment accessor is injected
/// so resolution can be tested without touching process state; an empty
/// variable counts as unset. No well-formedness check happens here, so a
/// malformed URL surfaces as a transport error on the first call.
pub fn resolve_endpoint<F>(explicit: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = explicit {
        return url.to_string();
    }
    if let Some(url) = env(ENDPOINT_ENV).filter(|value| !value.is_empty()) {
        return url;
    }
    DEFAULT_ENDPOINT.to_string()
}

// Helper module for Duration serialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
