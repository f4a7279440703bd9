//! Main media API client implementation.
//!
//! `MediaClient` turns an endpoint path, query parameters and an optional body
//! into a [`reqwest::Request`], executes it through its [`HttpClient`], and
//! captures the raw response onto a typed result.
//!
//! # Examples
//!
//! ```ignore
//! use mediakit_http::client::{ClientConfig, MediaClient};
//! use mediakit_http::media::AssetsParam;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MediaClient::with_config(ClientConfig::new("https://media.example.com/v1/"));
//!     let assets = client.assets(&AssetsParam::default()).await?;
//!     println!("{} assets, status {:?}", assets.data.len(), assets.response.status_code());
//!     Ok(())
//! }
//! ```

use crate::client::config::ClientConfig;
use crate::client::transport::HttpClient;
use crate::client::utils::{is_success_status, join_endpoint};
use crate::error::{MediaError, Result};
use crate::protocol::QueryParams;
use crate::response::{set_response_meta, ApiResponse, HasResponse, MetaSetter, Response};
use http::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// `application/json` body.
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` body.
    Form(QueryParams),
}

impl RequestBody {
    /// Serialize `value` as a JSON body.
    ///
    /// # Errors
    ///
    /// [`MediaError::Encode`] if `value` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(RequestBody::Json)
            .map_err(|e| MediaError::Encode(e.to_string()))
    }
}

/// Client for the media-management REST API.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Clone)]
pub struct MediaClient {
    http: Arc<dyn HttpClient>,
    config: Arc<ClientConfig>,
}

impl MediaClient {
    /// Create a client with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client backed by a `reqwest` connection pool built from `config`
    pub fn with_config(config: ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(config.max_idle_connections as usize);

        if !config.proxy_url.is_empty() {
            match reqwest::Proxy::all(&config.proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!(proxy = %config.proxy_url, error = %e, "ignoring invalid proxy URL"),
            }
        }

        let client = builder.build().unwrap_or_default();
        Self::with_http_client(config, client)
    }

    /// Create a client that sends requests through `http`
    pub fn with_http_client(config: ClientConfig, http: impl HttpClient + 'static) -> Self {
        MediaClient {
            http: Arc::new(http),
            config: Arc::new(config),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Assemble the request for `path` without sending it.
    ///
    /// # Errors
    ///
    /// [`MediaError::InvalidUrl`] if the configured prefix and `path` do not form a
    /// URL, [`MediaError::Encode`] if a JSON body cannot be rendered.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &RequestBody,
    ) -> Result<reqwest::Request> {
        let mut url = join_endpoint(&self.config.api_prefix, path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        let mut request = reqwest::Request::new(method, url);
        *request.timeout_mut() = Some(Duration::from_millis(self.config.request_timeout_ms));

        if let Ok(agent) = HeaderValue::from_str(&self.config.user_agent) {
            request.headers_mut().insert(USER_AGENT, agent);
        }

        match body {
            RequestBody::Empty => {}
            RequestBody::Json(value) => {
                let bytes = serde_json::to_vec(value).map_err(|e| MediaError::Encode(e.to_string()))?;
                request
                    .headers_mut()
                    .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                *request.body_mut() = Some(bytes.into());
            }
            RequestBody::Form(params) => {
                request.headers_mut().insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static("application/x-www-form-urlencoded"),
                );
                *request.body_mut() = Some(params.encode().into());
            }
        }

        Ok(request)
    }

    /// Send a request and return the raw response.
    ///
    /// Non-success statuses are not errors at this level.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &RequestBody,
    ) -> Result<reqwest::Response> {
        let request = self.build_request(method, path, query, body)?;

        if self.config.enable_logging {
            tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        }

        let response = self.http.execute(request).await?;

        if self.config.enable_logging {
            tracing::debug!(status = response.status().as_u16(), "received response");
        }

        Ok(response)
    }

    /// Send a request and capture its metadata onto `target`.
    ///
    /// # Errors
    ///
    /// Transport failures as [`MediaError::Http`]; a non-2xx status as the result of
    /// `target.parse_error()` wrapped in [`MediaError::Response`] with the captured
    /// response, which also stays on `target`.
    pub async fn send_into<M>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &RequestBody,
        target: &mut M,
    ) -> Result<()>
    where
        M: HasResponse + ?Sized,
    {
        let response = self.send(method, path, query, body).await?;
        set_response_meta(Some(response), target).await;

        match target.response().status_code() {
            Some(status) if is_success_status(status) => Ok(()),
            Some(_) => {
                let err = target
                    .parse_error()
                    .unwrap_or_else(|| MediaError::Http("empty response".to_string()));
                Err(err.with_response(target.response().clone()))
            }
            None => Err(MediaError::Http("no response received".to_string())),
        }
    }

    /// Send a request whose response carries no payload of interest.
    pub async fn call_empty(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &RequestBody,
    ) -> Result<Response> {
        let mut response = Response::default();
        self.send_into(method, path, query, body, &mut response).await?;
        Ok(response)
    }

    /// Send a request and decode its JSON payload into `T`.
    ///
    /// An empty success body leaves `data` at `T::default()`.
    pub async fn call<T>(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &RequestBody,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let mut result = ApiResponse::<T>::default();
        self.send_into(method, path, query, body, &mut result).await?;

        let raw = result.response.body();
        if !raw.is_empty() {
            result.data = serde_json::from_slice(raw)
                .map_err(|e| MediaError::Decode(e).with_response(result.response.clone()))?;
        }

        Ok(result)
    }
}

impl Default for MediaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MediaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> MediaClient {
        MediaClient::with_config(ClientConfig::new("https://media.example.com/v1/"))
    }

    #[test]
    fn test_client_creation() {
        let client = MediaClient::new();
        assert_eq!(client.config().request_timeout_ms, 30_000);
    }

    #[test]
    fn test_build_request_with_query() {
        let mut query = QueryParams::new();
        query.add("path", "/");
        query.add("tags[0]", "sea");

        let req = client()
            .build_request(Method::GET, "files", &query, &RequestBody::Empty)
            .unwrap();

        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://media.example.com/v1/files?path=%2F&tags%5B0%5D=sea"
        );
        assert!(req.body().is_none());
        assert!(req.headers().get(USER_AGENT).is_some());
    }

    #[test]
    fn test_build_request_json_body() {
        let body = RequestBody::json(&json!({"fileIds": ["a"]})).unwrap();
        let req = client()
            .build_request(Method::POST, "files/addTags", &QueryParams::new(), &body)
            .unwrap();

        assert_eq!(req.url().as_str(), "https://media.example.com/v1/files/addTags");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&br#"{"fileIds":["a"]}"#[..]));
    }

    #[test]
    fn test_build_request_form_body() {
        let body = RequestBody::Form([("a", "1 2")].into_iter().collect());
        let req = client()
            .build_request(Method::POST, "files", &QueryParams::new(), &body)
            .unwrap();

        assert_eq!(req.headers()[CONTENT_TYPE], "application/x-www-form-urlencoded");
        assert_eq!(req.body().and_then(|b| b.as_bytes()), Some(&b"a=1+2"[..]));
    }

    #[test]
    fn test_build_request_invalid_prefix() {
        let client = MediaClient::with_config(ClientConfig::new("not a prefix"));
        let err = client
            .build_request(Method::GET, "files", &QueryParams::new(), &RequestBody::Empty)
            .unwrap_err();
        assert!(matches!(err, MediaError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_http_error() {
        let client = MediaClient::with_config(ClientConfig {
            request_timeout_ms: 2_000,
            ..ClientConfig::new("http://127.0.0.1:1/")
        });
        let err = client
            .call_empty(Method::GET, "files", &QueryParams::new(), &RequestBody::Empty)
            .await
            .unwrap_err();
        assert!(matches!(err, MediaError::Http(_)));
    }
}
