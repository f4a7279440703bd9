//! Response metadata and the response capability contract.
//!
//! Every typed result returned by the client carries the raw HTTP metadata it
//! was built from. Rather than sharing a base type, response types embed a
//! [`Response`] holder and expose it through [`HasResponse`]; the blanket
//! [`MetaSetter`] impl then gives each of them the two operations the request
//! pipeline needs:
//!
//! - `set_meta`: attach the captured [`ResponseMetaData`] (once);
//! - `parse_error`: decode the stored body into an error.
//!
//! # Examples
//!
//! ```
//! use mediakit_http::response::{HasResponse, MetaSetter, Response, ResponseMetaData};
//!
//! #[derive(Default)]
//! struct PurgeStatus {
//!     status: String,
//!     response: Response,
//! }
//!
//! impl HasResponse for PurgeStatus {
//!     fn response(&self) -> &Response { &self.response }
//!     fn response_mut(&mut self) -> &mut Response { &mut self.response }
//! }
//!
//! let mut result = PurgeStatus::default();
//! result.set_meta(ResponseMetaData::new(404, Default::default(), r#"{"message":"missing"}"#));
//!
//! assert_eq!(result.response.status_code(), Some(404));
//! assert_eq!(result.parse_error().unwrap().to_string(), "missing");
//! ```

use crate::client::is_success_status;
use crate::error::{parse_error, MediaError};
use bytes::Bytes;
use http::HeaderMap;
use std::fmt;
use std::sync::OnceLock;

/// Raw metadata of one HTTP response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseMetaData {
    /// Response headers; a name may carry several values.
    pub headers: HeaderMap,
    /// HTTP status code.
    pub status_code: u16,
    /// Full response body.
    pub body: Bytes,
}

impl ResponseMetaData {
    /// Bundle status, headers and body.
    pub fn new(status_code: u16, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        ResponseMetaData {
            headers,
            status_code,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        is_success_status(self.status_code)
    }
}

impl fmt::Display for ResponseMetaData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{:?}",
            self.status_code,
            String::from_utf8_lossy(&self.body),
            self.headers
        )
    }
}

/// Write-once holder for [`ResponseMetaData`].
///
/// An unset holder means no response was received.
#[derive(Debug, Clone, Default)]
pub struct Response {
    meta: OnceLock<ResponseMetaData>,
}

impl Response {
    /// The captured metadata, if any.
    pub fn meta(&self) -> Option<&ResponseMetaData> {
        self.meta.get()
    }

    /// HTTP status of the captured response.
    pub fn status_code(&self) -> Option<u16> {
        self.meta().map(|m| m.status_code)
    }

    /// Headers of the captured response.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.meta().map(|m| &m.headers)
    }

    /// Raw body; empty when nothing was captured.
    pub fn body(&self) -> &[u8] {
        self.meta().map(|m| &m.body[..]).unwrap_or_default()
    }
}

/// Access to the embedded [`Response`] holder.
///
/// Implementing this is all a response type needs to become a [`MetaSetter`].
pub trait HasResponse {
    /// Shared access to the holder.
    fn response(&self) -> &Response;

    /// Exclusive access to the holder.
    fn response_mut(&mut self) -> &mut Response;
}

impl HasResponse for Response {
    fn response(&self) -> &Response {
        self
    }

    fn response_mut(&mut self) -> &mut Response {
        self
    }
}

/// Typed result of an operation together with its raw response.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse<T> {
    /// Decoded response payload.
    pub data: T,
    /// Raw metadata the payload was decoded from.
    pub response: Response,
}

impl<T> HasResponse for ApiResponse<T> {
    fn response(&self) -> &Response {
        &self.response
    }

    fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }
}

/// Capability required by [`set_response_meta`].
pub trait MetaSetter {
    /// Attach captured metadata. Metadata that is already set is kept.
    fn set_meta(&mut self, meta: ResponseMetaData);

    /// Parse the stored body as an error; `None` if no response was captured.
    fn parse_error(&self) -> Option<MediaError>;
}

impl<T: HasResponse + ?Sized> MetaSetter for T {
    fn set_meta(&mut self, meta: ResponseMetaData) {
        if let Err(rejected) = self.response_mut().meta.set(meta) {
            tracing::warn!(
                status = rejected.status_code,
                "response metadata already set, ignoring reassignment"
            );
        }
    }

    fn parse_error(&self) -> Option<MediaError> {
        self.response().meta().map(|m| parse_error(&m.body))
    }
}

/// Copy status, headers and body of `http_resp` onto `target`.
///
/// `None` (the transport produced no response) leaves `target` untouched. A body
/// that fails to read is stored as empty; status and headers are still attached.
pub async fn set_response_meta<M: MetaSetter + ?Sized>(
    http_resp: Option<reqwest::Response>,
    target: &mut M,
) {
    let Some(http_resp) = http_resp else {
        return;
    };

    let status_code = http_resp.status().as_u16();
    let headers = http_resp.headers().clone();
    let body = match http_resp.bytes().await {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(status = status_code, error = %e, "failed to read response body");
            Bytes::new()
        }
    };

    target.set_meta(ResponseMetaData {
        headers,
        status_code,
        body,
    });
}
