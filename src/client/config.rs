//! Client configuration.

use serde::Deserialize;

/// Configuration for [`MediaClient`](crate::client::MediaClient).
///
/// # Examples
///
/// ```
/// use mediakit_http::client::ClientConfig;
///
/// let config = ClientConfig {
///     request_timeout_ms: 5_000,
///     ..ClientConfig::new("https://media.example.com/v1/")
/// };
/// assert_eq!(config.api_prefix, "https://media.example.com/v1/");
/// assert!(config.enable_logging);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is joined onto
    pub api_prefix: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Idle connections kept per host
    pub max_idle_connections: u32,
    /// Proxy for all requests; empty disables it
    pub proxy_url: String,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
    /// Emit per-request `tracing` events
    pub enable_logging: bool,
}

impl ClientConfig {
    /// Defaults with the given API prefix.
    pub fn new(api_prefix: impl Into<String>) -> Self {
        ClientConfig {
            api_prefix: api_prefix.into(),
            ..Default::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_prefix: "http://localhost/".to_string(),
            request_timeout_ms: 30_000,
            max_idle_connections: 32,
            proxy_url: String::new(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            enable_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.request_timeout_ms, 30_000);
        assert!(config.proxy_url.is_empty());
        assert!(config.user_agent.starts_with("mediakit_http/"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"api_prefix":"https://media.example.com/v1/","enable_logging":false}"#)
                .unwrap();
        assert_eq!(config.api_prefix, "https://media.example.com/v1/");
        assert!(!config.enable_logging);
        assert_eq!(config.max_idle_connections, 32);
    }
}
