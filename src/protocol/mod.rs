//! Wire-level helpers shared by every resource operation.
//!
//! # Module Organization
//!
//! ```text
//! protocol/
//! ├── params   - Request struct to query parameter encoding
//! ├── path     - Endpoint path assembly
//! └── classify - URL / data URI / local path classification
//! ```
//!
//! # Examples
//!
//! ```
//! use mediakit_http::protocol::{struct_to_params, is_valid_url};
//! use mediakit_http::build_path;
//! use serde_json::json;
//!
//! let params = struct_to_params(&json!({"fileIds": ["a", "b"], "purge": true})).unwrap();
//! assert_eq!(params.encode(), "fileIds%5B0%5D=a&fileIds%5B1%5D=b&purge=true");
//!
//! assert_eq!(build_path!("files", "a", "details"), "files/a/details");
//! assert!(is_valid_url("https://example.com/a.jpg"));
//! ```

mod classify;
mod params;
mod path;

pub use classify::{
    decode_data_uri, is_base64_data, is_local_file_path, is_valid_url, FileSource, SourceKind,
};
pub use params::{encode_param_value, struct_to_params, QueryParams};
pub use path::build_path;
