//! Endpoint path assembly.
//!
//! Segments may be anything implementing [`Display`]. Each one is trimmed of
//! surrounding `/` and empty segments are dropped, so optional segments can be
//! passed unconditionally:
//!
//! ```
//! use mediakit_http::build_path;
//!
//! let version: Option<&str> = None;
//! assert_eq!(
//!     build_path!("files", "abc", "versions", version.unwrap_or_default()),
//!     "files/abc/versions"
//! );
//! assert_eq!(build_path!("/files/", "", "123/", "/details"), "files/123/details");
//! ```

use std::fmt::Display;

/// Join path segments with a single `/`.
///
/// Leading and trailing separators of every segment are removed; segments that
/// end up empty are skipped.
pub fn build_path(parts: &[&dyn Display]) -> String {
    let mut segments = Vec::with_capacity(parts.len());

    for part in parts {
        let rendered = part.to_string();
        let trimmed = rendered.trim_matches('/');
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
    }

    segments.join("/")
}

/// Build a path from heterogeneous [`Display`] segments.
///
/// Expands to a call to [`build_path`](crate::protocol::build_path).
#[macro_export]
macro_rules! build_path {
    ($($part:expr),* $(,)?) => {
        $crate::protocol::build_path(&[$(&$part as &dyn ::std::fmt::Display),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path_normalizes_separators() {
        assert_eq!(build_path!("/files/", "", "123/", "/details"), "files/123/details");
    }

    #[test]
    fn test_build_path_drops_separator_only_parts() {
        assert_eq!(build_path!("/", "files", "//", "a"), "files/a");
    }

    #[test]
    fn test_build_path_mixed_types() {
        assert_eq!(build_path!("bulkJobs", 42, 'x'), "bulkJobs/42/x");
    }

    #[test]
    fn test_build_path_keeps_inner_separators() {
        assert_eq!(build_path!("files", "a/b/"), "files/a/b");
    }

    #[test]
    fn test_build_path_empty() {
        assert_eq!(build_path(&[]), "");
        assert_eq!(build_path!("", "/"), "");
    }
}
