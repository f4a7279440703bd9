//! Pluggable HTTP transport.
//!
//! [`MediaClient`](crate::client::MediaClient) builds a complete
//! [`reqwest::Request`] and hands it to an [`HttpClient`]. The default transport
//! is a configured [`reqwest::Client`]; tests and embedders can supply their own.

use async_trait::async_trait;

/// Executes a fully built request.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send `request` and return the response head with an unread body.
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response>;
}

#[async_trait]
impl HttpClient for reqwest::Client {
    async fn execute(&self, request: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        reqwest::Client::execute(self, request).await
    }
}
