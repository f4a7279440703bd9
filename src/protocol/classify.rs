//! Classification of file inputs: remote URL, base64 data URI or local path.
//!
//! Upload-style endpoints accept a file as a URL, as inline base64 data, or as a
//! path on the local machine. [`FileSource`] carries the caller's input and
//! [`FileSource::kind`] decides which of those it is. None of these checks touch
//! the filesystem.

use crate::error::{MediaError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use url::Url;

/// Pattern for `data:<media type>;<attr=value>;base64,<payload>` URIs.
///
/// `\w` is ASCII-only here.
static BASE64_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^data:([\w-]+/[\w\-+.]+)?(;[\w-]+=[\w-]+)*;base64,([a-zA-Z0-9/+\n=]+)$")
        .expect("Invalid base64 data regex")
});

/// What a [`FileSource`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A URL with a scheme, fetched by the service itself.
    RemoteUrl,
    /// An inline `data:...;base64,...` URI.
    Base64Data,
    /// Any other text, treated as a local path.
    LocalPath,
    /// Raw file contents.
    Binary,
}

/// A file input as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// Textual input: URL, data URI or path.
    Text(String),
    /// Raw bytes.
    Binary(Bytes),
}

impl FileSource {
    /// Classify this input.
    pub fn kind(&self) -> SourceKind {
        match self {
            FileSource::Binary(_) => SourceKind::Binary,
            FileSource::Text(text) if is_valid_url(text) => SourceKind::RemoteUrl,
            FileSource::Text(text) if is_base64_data(text) => SourceKind::Base64Data,
            FileSource::Text(_) => SourceKind::LocalPath,
        }
    }

    /// The textual form, if this is not binary input.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileSource::Text(text) => Some(text),
            FileSource::Binary(_) => None,
        }
    }
}

impl From<&str> for FileSource {
    fn from(value: &str) -> Self {
        FileSource::Text(value.to_string())
    }
}

impl From<String> for FileSource {
    fn from(value: String) -> Self {
        FileSource::Text(value)
    }
}

impl From<&Path> for FileSource {
    fn from(value: &Path) -> Self {
        FileSource::Text(value.to_string_lossy().into_owned())
    }
}

impl From<Vec<u8>> for FileSource {
    fn from(value: Vec<u8>) -> Self {
        FileSource::Binary(Bytes::from(value))
    }
}

impl From<Bytes> for FileSource {
    fn from(value: Bytes) -> Self {
        FileSource::Binary(value)
    }
}

/// Whether `candidate` parses as a URL with a non-empty scheme.
///
/// Parsing follows the WHATWG URL standard, which is stricter than a bare
/// scheme check: special schemes such as `http` need a host, so `"http://"` is
/// not a URL.
///
/// # Examples
///
/// ```
/// use mediakit_http::protocol::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/x"));
/// assert!(!is_valid_url("not a url"));
/// assert!(!is_valid_url("/local/path"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty(),
        Err(_) => false,
    }
}

/// Whether `candidate` is a base64 data URI.
///
/// # Examples
///
/// ```
/// use mediakit_http::protocol::is_base64_data;
///
/// assert!(is_base64_data("data:image/png;base64,iVBORw0KGgo="));
/// assert!(!is_base64_data("plain string"));
/// ```
pub fn is_base64_data(candidate: &str) -> bool {
    BASE64_DATA_RE.is_match(candidate)
}

/// Whether `source` should be read from the local machine.
///
/// True for text that is neither a URL nor a data URI; binary input is never a
/// path.
pub fn is_local_file_path(source: &FileSource) -> bool {
    source.kind() == SourceKind::LocalPath
}

/// Decode the payload of a base64 data URI.
///
/// # Errors
///
/// [`MediaError::InvalidData`] if `uri` is not a data URI or its payload is not
/// valid base64.
pub fn decode_data_uri(uri: &str) -> Result<Bytes> {
    let captures = BASE64_DATA_RE
        .captures(uri)
        .ok_or_else(|| MediaError::InvalidData("not a base64 data URI".to_string()))?;
    let payload: String = captures
        .get(3)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .chars()
        .filter(|c| *c != '\n')
        .collect();

    STANDARD
        .decode(payload)
        .map(Bytes::from)
        .map_err(|e| MediaError::InvalidData(e.to_string()))
}
