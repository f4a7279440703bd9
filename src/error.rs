//! Error types and the response-body error parser.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! [`MediaError`]. The variants keep three failure sources apart:
//!
//! | Variant | Origin |
//! |---------|--------|
//! | [`MediaError::Encode`] | A request struct could not be turned into parameters |
//! | [`MediaError::Decode`] | A response body did not have the expected JSON shape |
//! | [`MediaError::Api`] | The service answered with a structured [`ApiError`] |
//! | [`MediaError::Http`] | The transport failed before a response existed |
//! | [`MediaError::Response`] | Any of the above, tied to the response it came from |
//!
//! Failures of a request that did reach the service come back as
//! [`MediaError::Response`], so status, headers and body stay available through
//! [`MediaError::response`] and [`MediaError::status_code`].
//!
//! # Examples
//!
//! ```
//! use mediakit_http::error::{parse_error, MediaError};
//!
//! match parse_error(br#"{"message":"not found"}"#) {
//!     MediaError::Api(err) => assert_eq!(err.message, "not found"),
//!     other => panic!("unexpected error: {other}"),
//! }
//!
//! assert!(matches!(parse_error(b"not json"), MediaError::Decode(_)));
//! ```

use crate::response::Response;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MediaError>;

/// Structured failure payload returned by the media service.
///
/// The service reports failures as `{"message": "...", "reason": "..."}`; `reason`
/// is frequently omitted. Field names are matched in lower, capitalised or upper
/// case; other casings are not recognised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable failure reason.
    #[serde(default, alias = "Message", alias = "MESSAGE")]
    pub message: String,

    /// Machine-oriented failure code, when the service provides one.
    #[serde(default, alias = "Reason", alias = "REASON", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ApiError {
    /// Create an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
            reason: None,
        }
    }

    /// Attach a reason code.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Errors produced by the media client.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A request value could not be rendered into query parameters.
    #[error("failed to encode parameters: {0}")]
    Encode(String),

    /// A response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The service rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The transport failed; no response is available.
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// An endpoint URL could not be assembled.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A data URI payload could not be decoded.
    #[error("invalid data URI: {0}")]
    InvalidData(String),

    /// A failure that came with a response; `response` holds its metadata.
    #[error("{source}")]
    Response {
        source: Box<MediaError>,
        response: Box<Response>,
    },
}

impl MediaError {
    /// Attach the response this failure was read from.
    pub fn with_response(self, response: Response) -> Self {
        match self {
            MediaError::Response { .. } => self,
            source => MediaError::Response {
                source: Box::new(source),
                response: Box::new(response),
            },
        }
    }

    /// The error without any attached response.
    pub fn inner(&self) -> &MediaError {
        match self {
            MediaError::Response { source, .. } => source.inner(),
            other => other,
        }
    }

    /// The service-provided error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self.inner() {
            MediaError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The response the failure was read from.
    pub fn response(&self) -> Option<&Response> {
        match self {
            MediaError::Response { response, .. } => Some(&**response),
            _ => None,
        }
    }

    /// HTTP status of the response the failure was read from.
    pub fn status_code(&self) -> Option<u16> {
        self.response().and_then(Response::status_code)
    }
}

impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        MediaError::Http(err.to_string())
    }
}

/// Decode a response body into the service's error payload.
///
/// A body that is not an [`ApiError`] object yields [`MediaError::Decode`] rather
/// than an empty `ApiError`, so a malformed failure response stays visible.
pub fn parse_error(body: &[u8]) -> MediaError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(err) => MediaError::Api(err),
        Err(err) => MediaError::Decode(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = parse_error(br#"{"message":"not found"}"#);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.api_error(), Some(&ApiError::new("not found")));
    }

    #[test]
    fn test_parse_error_with_reason() {
        let err = parse_error(br#"{"message":"Your request contains invalid fileId parameter.","reason":"INVALID_FILE_ID"}"#);
        let api = err.api_error().unwrap();
        assert_eq!(api.reason.as_deref(), Some("INVALID_FILE_ID"));
    }

    #[test]
    fn test_parse_error_capitalised_fields() {
        let err = parse_error(br#"{"Message":"quota exceeded","Reason":"LIMIT"}"#);
        assert_eq!(
            err.api_error(),
            Some(&ApiError::new("quota exceeded").with_reason("LIMIT"))
        );
    }

    #[test]
    fn test_parse_error_upper_case_fields() {
        let err = parse_error(br#"{"MESSAGE":"quota exceeded","REASON":"LIMIT"}"#);
        assert_eq!(
            err.api_error(),
            Some(&ApiError::new("quota exceeded").with_reason("LIMIT"))
        );
    }

    #[test]
    fn test_parse_error_not_json() {
        let err = parse_error(b"not json");
        assert!(matches!(err, MediaError::Decode(_)));
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_parse_error_wrong_shape() {
        assert!(matches!(parse_error(b"[1, 2]"), MediaError::Decode(_)));
        assert!(matches!(parse_error(b""), MediaError::Decode(_)));
    }

    #[test]
    fn test_api_error_display() {
        let err: MediaError = ApiError::new("missing").with_reason("NOT_FOUND").into();
        assert_eq!(err.to_string(), "missing");
    }

    #[test]
    fn test_with_response_keeps_inner_error() {
        use crate::response::{MetaSetter, ResponseMetaData};
        use http::HeaderMap;

        let mut response = Response::default();
        response.set_meta(ResponseMetaData::new(429, HeaderMap::new(), r#"{"message":"slow down"}"#));

        let err = parse_error(response.body()).with_response(response.clone());
        assert_eq!(err.to_string(), "slow down");
        assert_eq!(err.status_code(), Some(429));
        assert_eq!(err.api_error(), Some(&ApiError::new("slow down")));

        let err = err.with_response(Response::default());
        assert_eq!(err.status_code(), Some(429));
        assert!(matches!(err.inner(), MediaError::Api(_)));
    }

    #[test]
    fn test_bare_error_has_no_response() {
        let err = parse_error(b"not json");
        assert!(err.response().is_none());
        assert!(err.status_code().is_none());
        assert!(matches!(err.inner(), MediaError::Decode(_)));
    }
}
