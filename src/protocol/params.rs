//! Request struct to query parameter encoding.
//!
//! Any `Serialize` request type is rendered through the generic
//! [`serde_json::Value`] tree and flattened one level into [`QueryParams`]:
//!
//! | Field value | Encoded as |
//! |-------------|------------|
//! | `"a b"` | `name=a b` (raw string, never JSON-quoted) |
//! | `42`, `true` | `name=42`, `name=true` |
//! | `["x", "y"]` | `name[0]=x`, `name[1]=y` |
//! | `{"k": 1}` | `name={"k":1}` (nested objects are not flattened) |
//! | skipped by serde | omitted |
//!
//! # Examples
//!
//! ```
//! use mediakit_http::protocol::struct_to_params;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Search {
//!     search_query: String,
//!     tags: Vec<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     limit: Option<u32>,
//! }
//!
//! let params = struct_to_params(&Search {
//!     search_query: r#"name = "beach""#.to_string(),
//!     tags: vec!["sea".to_string(), "sand".to_string()],
//!     limit: None,
//! })
//! .unwrap();
//!
//! assert_eq!(params.get("searchQuery"), Some(r#"name = "beach""#));
//! assert_eq!(params.get("tags[1]"), Some("sand"));
//! assert!(params.get("limit").is_none());
//! ```

use crate::error::{MediaError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Ordered collection of query (or form) parameters.
///
/// Keys may repeat. Pairs keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair; existing pairs with the same key are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any pair uses `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Borrow the pairs, e.g. for `reqwest::RequestBuilder::query`.
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `application/x-www-form-urlencoded` text.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryParams {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Encode a request struct into query parameters.
///
/// The value must serialize to a JSON object (or `null`, which yields no
/// parameters). Top-level arrays are expanded into `name[i]` keys; every other
/// value is encoded with [`encode_param_value`]. Encoding stops at the first
/// failure and returns no partial result.
///
/// # Errors
///
/// [`MediaError::Encode`] if the value cannot be serialized or is not an object.
pub fn struct_to_params<T: Serialize + ?Sized>(input: &T) -> Result<QueryParams> {
    let map = match serde_json::to_value(input).map_err(|e| MediaError::Encode(e.to_string()))? {
        Value::Object(map) => map,
        Value::Null => return Ok(QueryParams::new()),
        other => {
            return Err(MediaError::Encode(format!(
                "expected a struct or map, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut params = QueryParams::new();
    for (name, value) in &map {
        if let Value::Array(items) = value {
            for (index, item) in items.iter().enumerate() {
                params.add(format!("{}[{}]", name, index), encode_param_value(item)?);
            }
            continue;
        }

        params.add(name.as_str(), encode_param_value(value)?);
    }

    Ok(params)
}

/// Encode a single value as parameter text.
///
/// Strings are emitted as-is; everything else uses its compact JSON form.
pub fn encode_param_value(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string(other).map_err(|e| MediaError::Encode(e.to_string())),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use serde::Serializer;
    use serde_json::json;

    #[derive(Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    struct ListParams {
        #[serde(skip_serializing_if = "String::is_empty")]
        path: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        include_folder: bool,
    }

    #[test]
    fn test_array_expands_to_indexed_keys() {
        let params = struct_to_params(&ListParams {
            tags: vec!["one".into(), "two".into(), "three".into()],
            ..Default::default()
        })
        .unwrap();

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["tags[0]", "tags[1]", "tags[2]"]);
        assert_eq!(params.get("tags[0]"), Some("one"));
        assert_eq!(params.get("tags[2]"), Some("three"));
    }

    #[test]
    fn test_strings_are_not_quoted() {
        let raw = "a \"quoted\" \\ value — ünïcödé ✓";
        let params = struct_to_params(&ListParams {
            path: raw.into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.get("path"), Some(raw));
    }

    #[test]
    fn test_scalars_render_literally() {
        let params = struct_to_params(&ListParams {
            limit: Some(42),
            include_folder: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.get("limit"), Some("42"));
        assert_eq!(params.get("includeFolder"), Some("true"));
    }

    #[test]
    fn test_default_fields_are_omitted() {
        let params = struct_to_params(&ListParams::default()).unwrap();
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn test_mixed_array_elements() {
        let params = struct_to_params(&json!({"values": ["a", 1, true, null, {"k": "v"}]})).unwrap();
        let values: Vec<&str> = params.iter().map(|(_, v)| v).collect();
        assert_eq!(values, ["a", "1", "true", "null", r#"{"k":"v"}"#]);
    }

    #[test]
    fn test_nested_object_is_not_flattened() {
        let params = struct_to_params(&json!({"customMetadata": {"price": 10}})).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("customMetadata"), Some(r#"{"price":10}"#));
    }

    #[test]
    fn test_null_input_yields_empty_set() {
        let params = struct_to_params(&Option::<ListParams>::None).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_non_object_input_is_rejected() {
        let err = struct_to_params(&vec!["a", "b"]).unwrap_err();
        assert!(matches!(err, MediaError::Encode(_)));
        assert!(struct_to_params("plain").is_err());
    }

    #[test]
    fn test_serialize_failure_aborts() {
        struct Broken;

        impl Serialize for Broken {
            fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
                Err(S::Error::custom("cannot serialize"))
            }
        }

        #[derive(Serialize)]
        struct Outer {
            name: &'static str,
            broken: Broken,
        }

        let err = struct_to_params(&Outer { name: "x", broken: Broken }).unwrap_err();
        assert!(err.to_string().contains("cannot serialize"));
    }

    #[test]
    fn test_encode_query_string() {
        let mut params = QueryParams::new();
        params.add("path", "/");
        params.add("tags[0]", "a b");
        assert_eq!(params.encode(), "path=%2F&tags%5B0%5D=a+b");
        assert_eq!(params.to_string(), params.encode());
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let params: QueryParams = [("tag", "a"), ("tag", "b")].into_iter().collect();
        assert_eq!(params.get_all("tag").collect::<Vec<_>>(), ["a", "b"]);
        assert!(params.contains_key("tag"));
        assert!(!params.contains_key("other"));
    }

    #[test]
    fn test_string_values_round_trip() {
        for raw in ["", " ", "~!@#$%^&*()_+`-=[]{}|;':\",./<>?", "日本語テキスト", "emoji 🎉", "line\nbreak"] {
            let params = struct_to_params(&json!({ "value": raw })).unwrap();
            let decoded: Vec<(String, String)> =
                url::form_urlencoded::parse(params.encode().as_bytes()).into_owned().collect();
            assert_eq!(decoded, vec![("value".to_string(), raw.to_string())]);
        }
    }
}
