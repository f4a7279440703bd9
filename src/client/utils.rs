//! Utility functions for the media client.
//!
//! This module provides helper functions for:
//! - Joining endpoint paths onto the configured API prefix
//! - Classifying status codes

use crate::error::{MediaError, Result};
use url::Url;

/// Join `path` onto `prefix` with exactly one `/` between them.
///
/// # Examples
///
/// ```
/// use mediakit_http::client::join_endpoint;
///
/// let url = join_endpoint("https://media.example.com/v1/", "/files/abc").unwrap();
/// assert_eq!(url.as_str(), "https://media.example.com/v1/files/abc");
/// ```
pub fn join_endpoint(prefix: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| MediaError::InvalidUrl(format!("{}: {}", joined, e)))
}

/// Check if status code indicates success
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint() {
        let url = join_endpoint("http://localhost:8080", "files").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/files");

        let url = join_endpoint("http://localhost:8080/v1//", "//files").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v1/files");
    }

    #[test]
    fn test_join_endpoint_invalid() {
        assert!(matches!(
            join_endpoint("relative/prefix", "files"),
            Err(MediaError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_is_success_status() {
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(!is_success_status(304));
        assert!(!is_success_status(404));
    }
}
